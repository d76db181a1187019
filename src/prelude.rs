//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the wirebox crate.
//!
//! # Example
//!
//! ```rust
//! use wirebox::prelude::*;
//!
//! let mut canvas = Canvas::new();
//! let not = canvas.create_box(OperationKind::Logical, "NOT", Position::default());
//! assert_eq!(canvas.output(not), Some(Value::Bool(true)));
//! ```

// Mutation API and evaluation
pub use crate::canvas::{
    Canvas, CanvasBuilder, DropPayload, EditCommand, MutationOutcome, SharedCanvas,
};
pub use crate::evaluator::{Evaluator, PassSummary, SettleReport};

// Graph model
pub use crate::graph::{BoxView, GraphSnapshot, GraphStore};
pub use crate::model::{
    BoxId, Connection, InputSlot, OpBox, OperationKind, Operator, Position, TagRef, Value,
};

// Palette
pub use crate::palette::{BrowseNode, JsonFileSource, Palette, PaletteGroup, PaletteSource};

// Scripts
pub use crate::script::EditScript;

// Error types
pub use crate::error::{CanvasError, PaletteError, ScriptError, WiringError};

// Trace formatting
pub use crate::trace::{BoxTrace, TraceFormatter};
