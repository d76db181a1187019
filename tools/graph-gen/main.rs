use clap::Parser;
use rand::{Rng, rngs::ThreadRng};
use std::fs;
use wirebox::prelude::*;

/// A CLI tool to generate random edit scripts for the Wirebox canvas
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON script to
    #[arg(short, long, default_value = "generated_script.json")]
    output: String,

    /// The number of boxes to create
    #[arg(long, default_value_t = 20)]
    boxes: usize,

    /// The number of box-to-box wires to attempt
    #[arg(long, default_value_t = 30)]
    wires: usize,

    /// The number of tag inputs to attach
    #[arg(long, default_value_t = 10)]
    tags: usize,

    /// Only wire boxes into later-created boxes, so a single pass is exact
    #[arg(long)]
    forward: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.boxes == 0 && (cli.wires > 0 || cli.tags > 0) {
        eprintln!("Error: --wires and --tags need at least one box");
        std::process::exit(1);
    }

    println!(
        "Generating script ({} boxes, {} wires, {} tags{})...",
        cli.boxes,
        cli.wires,
        cli.tags,
        if cli.forward { ", forward only" } else { "" }
    );

    let mut commands = generate_boxes(&mut rng, cli.boxes);
    commands.extend(generate_wires(&mut rng, cli.boxes, cli.wires, cli.forward));
    commands.extend(generate_tags(&mut rng, cli.boxes, cli.tags));

    let script = EditScript::new(commands);
    fs::write(&cli.output, script.to_json()?)?;

    println!(
        "Successfully generated and saved {} command(s) to '{}'",
        script.len(),
        cli.output
    );

    Ok(())
}

/// Creates boxes laid out on a loose grid; ids follow creation order from 1.
fn generate_boxes(rng: &mut ThreadRng, count: usize) -> Vec<EditCommand> {
    (0..count)
        .map(|i| {
            let operator = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
            let position = Position::new(
                (i % 8) as f64 * 160.0 + rng.random_range(0.0..40.0),
                (i / 8) as f64 * 120.0 + rng.random_range(0.0..40.0),
            );
            EditCommand::CreateBox {
                kind: operator.kind(),
                operator: operator.name().to_string(),
                position,
            }
        })
        .collect()
}

/// Box ids are 1-based, so `rng.random_range(1..=boxes)` always hits a box.
/// Input indices may fall past a box's arity; those wires replay as ignored.
fn generate_wires(
    rng: &mut ThreadRng,
    boxes: usize,
    count: usize,
    forward: bool,
) -> Vec<EditCommand> {
    if boxes < 2 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let (from, to) = if forward {
                let from = rng.random_range(1..boxes);
                (from, rng.random_range(from + 1..=boxes))
            } else {
                (rng.random_range(1..=boxes), rng.random_range(1..=boxes))
            };
            EditCommand::ConnectBoxOutput {
                from_box_id: BoxId(from as u64),
                to_box_id: BoxId(to as u64),
                to_input_index: rng.random_range(0..3),
            }
        })
        .collect()
}

fn generate_tags(rng: &mut ThreadRng, boxes: usize, count: usize) -> Vec<EditCommand> {
    (0..count)
        .map(|i| {
            let name = format!("Sensor{}", i + 1);
            EditCommand::ConnectTagInput {
                box_id: BoxId(rng.random_range(1..=boxes) as u64),
                to_input_index: rng.random_range(0..2),
                external_id: format!("ns=2;s=Channel1.Device1.{}", name),
                tag_name: name,
            }
        })
        .collect()
}
