//! Records of how each box arrived at its output during a pass.

mod formatter;

pub use formatter::TraceFormatter;

use crate::model::{BoxId, OperationKind, TagRef, Value};

/// How a box-wired input was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxRead {
    /// The source was evaluated earlier in the same pass.
    Current,
    /// The source comes later in creation order (or is the reader itself),
    /// so the value is the one left by the previous pass.
    PreviousPass,
    /// The source exists but has never been evaluated; the default was used.
    Unset,
    /// No box with that id exists; the default was used.
    Missing,
}

/// Where an input value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputOrigin {
    Empty,
    /// Tags have no live reading yet, so they always yield the default.
    Tag(TagRef),
    Box { source: BoxId, read: BoxRead },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputTrace {
    pub origin: InputOrigin,
    pub value: Value,
}

impl InputTrace {
    /// Whether the value is a substituted default rather than something read.
    pub fn is_default(&self) -> bool {
        match &self.origin {
            InputOrigin::Empty | InputOrigin::Tag(_) => true,
            InputOrigin::Box { read, .. } => matches!(read, BoxRead::Unset | BoxRead::Missing),
        }
    }
}

/// One box's evaluation within a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxTrace {
    pub box_id: BoxId,
    pub kind: OperationKind,
    pub operator_name: String,
    /// `false` when the operator name is unknown and the kind default was produced.
    pub recognized: bool,
    pub inputs: Vec<InputTrace>,
    pub outcome: Value,
}

impl BoxTrace {
    /// Whether any input was read from the previous pass.
    pub fn reads_stale(&self) -> bool {
        self.inputs.iter().any(|input| {
            matches!(
                input.origin,
                InputOrigin::Box {
                    read: BoxRead::PreviousPass,
                    ..
                }
            )
        })
    }
}
