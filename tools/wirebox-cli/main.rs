use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use wirebox::prelude::*;

/// Replays graph edit scripts and shows the live-evaluated outputs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the edit script (`.json`, or the line-based text form)
    script_path: Option<String>,

    /// Optional path to the tag palette JSON
    #[arg(short, long)]
    palette: Option<String>,

    /// Extra evaluation passes to run after the script
    #[arg(long, default_value_t = 0)]
    passes: usize,

    /// Keep evaluating until outputs stop changing, up to this many passes
    #[arg(long)]
    settle: Option<usize>,

    /// Explain how every output was derived in the last mutation's pass
    #[arg(short, long)]
    trace: bool,

    /// Print the final graph as a JSON snapshot
    #[arg(long)]
    json: bool,

    /// Run in interactive mode, reading one command per line
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut builder = Canvas::builder().with_tracing(cli.trace || cli.human);
    if let Some(path) = &cli.palette {
        builder = builder.with_palette_source(&JsonFileSource::new(path));
    }
    let canvas = builder.build();

    if cli.human {
        run_interactive(canvas);
    } else {
        run_non_interactive(cli, canvas);
    }
}

/// Replays a script file, then prints the resulting graph.
fn run_non_interactive(cli: Cli, mut canvas: Canvas) {
    let script_path = cli.script_path.unwrap_or_else(|| {
        exit_with_error("Script path is required in non-interactive mode.");
    });

    let script = EditScript::from_file(&script_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load script: {}", e)));

    let replay_start = Instant::now();
    let outcomes = script.replay(&mut canvas);
    let replay_duration = replay_start.elapsed();

    let ignored = outcomes.iter().filter(|o| o.is_ignored()).count();
    if !cli.json {
        println!(
            "Replayed {} command(s) in {:?} ({} ignored)",
            outcomes.len(),
            replay_duration,
            ignored
        );
        for (i, outcome) in outcomes.iter().enumerate() {
            if let MutationOutcome::Ignored(reason) = outcome {
                println!("  -> Command {} ignored: {}", i + 1, reason);
            }
        }
    }

    if cli.trace && !cli.json {
        println!("\n--- Trace of last pass ---");
        println!("{}", TraceFormatter::format_pass(canvas.last_trace()));
    }

    for _ in 0..cli.passes {
        canvas.evaluate();
    }
    if let Some(max_passes) = cli.settle {
        let report = canvas.settle(max_passes);
        if !cli.json {
            if report.settled {
                println!("Settled after {} extra pass(es)", report.passes);
            } else {
                println!("Still changing after {} extra pass(es)", report.passes);
            }
        }
    }

    let snapshot = canvas.snapshot();
    if cli.json {
        match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with_error(&format!("Failed to serialize snapshot: {}", e)),
        }
    } else {
        println!("\n--- Graph ---");
        print!("{}", snapshot);
    }
}

/// Runs the CLI in an interactive, human-friendly mode.
fn run_interactive(mut canvas: Canvas) {
    println!("--- Wirebox Interactive Mode ---");
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => exit_with_error(&format!("Failed to read input: {}", e)),
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["show"] => print!("{}", canvas.snapshot()),
            ["trace"] => println!("{}", TraceFormatter::format_pass(canvas.last_trace())),
            ["eval"] => {
                let summary = canvas.evaluate();
                println!("  -> {} output(s) changed", summary.changed);
                print!("{}", canvas.snapshot());
            }
            ["settle", max] => match max.parse() {
                Ok(max_passes) => {
                    let report = canvas.settle(max_passes);
                    println!(
                        "  -> {} after {} pass(es)",
                        if report.settled { "Settled" } else { "Not settled" },
                        report.passes
                    );
                }
                Err(_) => println!("  -> '{}' is not a pass count", max),
            },
            ["palette"] => print_palette(canvas.palette()),
            _ => match line.parse::<EditCommand>() {
                Ok(command) => {
                    match canvas.apply(command) {
                        MutationOutcome::Created(id) => println!("  -> Created box {}", id),
                        MutationOutcome::Applied => println!("  -> Applied"),
                        MutationOutcome::Ignored(reason) => println!("  -> Ignored: {}", reason),
                    }
                    print!("{}", canvas.snapshot());
                }
                Err(e) => println!("  -> {}", e),
            },
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  box <logical|operation> <OPERATOR> [x y]");
    println!("  wire <from-box> <to-box> <input>");
    println!("  tag <box> <input> <tag-name> [external-id]");
    println!("  show | trace | eval | settle <max> | palette | help | quit");
}

fn print_palette(palette: &Palette) {
    for group in Palette::operator_entries() {
        let names: Vec<&str> = group.operators.iter().map(|op| op.name()).collect();
        println!("{}: {}", group.title, names.join(", "));
    }
    if palette.is_empty() {
        println!("No server connection or no structure found.");
        return;
    }
    for (path, tag) in palette.tags() {
        println!("  {}/{} ({})", path, tag.name, tag.external_id);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
