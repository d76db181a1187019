use super::{BoxRead, BoxTrace, InputOrigin, InputTrace};
use crate::model::{OperationKind, Operator};
use itertools::Itertools;

/// Formats box traces into human-readable explanations.
pub struct TraceFormatter;

impl TraceFormatter {
    /// Explains a single box, e.g. `#3 = #1 (was 4) > $Level (default 0) => true`.
    pub fn format_trace(trace: &BoxTrace) -> String {
        let args: Vec<String> = trace.inputs.iter().map(Self::format_input).collect();
        let operator = if trace.recognized {
            Operator::resolve(trace.kind, &trace.operator_name)
        } else {
            None
        };

        let body = match operator {
            Some(op) if trace.kind == OperationKind::Logical && args.len() == 1 => {
                format!("{} {}", op.symbol(), args[0])
            }
            Some(op) if trace.kind == OperationKind::Logical && args.len() == 2 => {
                format!("{} {} {}", args[0], op.symbol(), args[1])
            }
            Some(op) => format!("{}({})", op.symbol(), args.iter().join(", ")),
            None => format!("unknown '{}'", trace.operator_name),
        };
        format!("{} = {} => {}", trace.box_id, body, trace.outcome)
    }

    /// Explains a whole pass, one line per box.
    pub fn format_pass(traces: &[BoxTrace]) -> String {
        traces.iter().map(Self::format_trace).join("\n")
    }

    fn format_input(input: &InputTrace) -> String {
        match &input.origin {
            InputOrigin::Empty => input.value.to_string(),
            InputOrigin::Tag(tag) => format!("${} (default {})", tag.name, input.value),
            InputOrigin::Box { source, read } => match read {
                BoxRead::Current => format!("{} (was {})", source, input.value),
                BoxRead::PreviousPass => {
                    format!("{} (previous pass {})", source, input.value)
                }
                BoxRead::Unset => format!("{} (unset, default {})", source, input.value),
                BoxRead::Missing => format!("{} (missing, default {})", source, input.value),
            },
        }
    }
}
