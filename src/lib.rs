//! # Wirebox - Live Operation Graph Engine
//!
//! **Wirebox** is the model and evaluation engine behind a visual expression
//! editor. Users place *operation boxes* on a canvas, wire box outputs into
//! other boxes' inputs (or feed inputs from externally named *tags*), and see
//! every output recomputed after each edit. Drawing, dragging, and hit-testing
//! live outside this crate: they issue mutations and read back graph state.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Palette**: Obtain the tag catalog once from a [`palette::PaletteSource`].
//!     A failing source yields an empty palette, never an error.
//! 2.  **Build a Canvas**: Use [`Canvas::builder`] to create the canvas that owns
//!     the [`graph::GraphStore`] and the [`Evaluator`].
//! 3.  **Mutate**: Create boxes and wire inputs through the canvas. Each applied
//!     mutation runs one full evaluation pass before returning; invalid wiring is
//!     reported as ignored and changes nothing.
//! 4.  **Read Back**: Query outputs or take a [`graph::GraphSnapshot`] to redraw.
//!
//! ## Evaluation Order
//!
//! A pass evaluates boxes once each in creation order. A box reading a box
//! created *after* it sees that box's value from the previous pass, and cycles
//! keep reading one-pass-stale values rather than failing. Empty inputs and
//! tags read as `false` in logical boxes and `0` in arithmetic ones; division
//! by a zero product yields positive infinity.
//!
//! ## Quick Start
//!
//! ```rust
//! use wirebox::prelude::*;
//!
//! let mut canvas = Canvas::builder().with_palette(Palette::empty()).build();
//!
//! let sum = canvas.create_box(OperationKind::Arithmetic, "ADD", Position::new(40.0, 60.0));
//! let check = canvas.create_box(OperationKind::Logical, "GreaterThan", Position::new(300.0, 60.0));
//!
//! canvas.connect_box_output(sum, check, 0);
//! canvas.connect_tag_input(check, 1, "Level", "ns=2;s=Channel1.Device1.Level");
//!
//! // 0 > 0 (the tag reads as its default)
//! assert_eq!(canvas.output(check), Some(Value::Bool(false)));
//!
//! // Out-of-range wiring is ignored, not an error.
//! let outcome = canvas.connect_box_output(sum, check, 5);
//! assert!(outcome.is_ignored());
//! ```

pub mod canvas;
pub mod error;
pub mod evaluator;
pub mod graph;
pub mod model;
pub mod palette;
pub mod prelude;
pub mod script;
pub mod trace;

pub use canvas::{Canvas, CanvasBuilder};
pub use evaluator::Evaluator;
