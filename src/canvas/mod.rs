//! The mutation API: the only way the drawing layer changes the graph.
//!
//! Every applied mutation is followed by one full evaluation pass before the
//! call returns, so outputs read afterwards are always current. Invalid wiring
//! never fails: it is logged, reported as [`MutationOutcome::Ignored`], and
//! leaves the graph and its outputs untouched.

mod command;
mod shared;

pub use command::*;
pub use shared::SharedCanvas;

use crate::evaluator::{Evaluator, PassSummary, SettleReport};
use crate::graph::{GraphSnapshot, GraphStore};
use crate::model::{BoxId, OperationKind, Position, TagRef, Value};
use crate::palette::{Palette, PaletteSource};
use crate::trace::BoxTrace;

/// Configures a [`Canvas`] before use.
pub struct CanvasBuilder {
    palette: Palette,
    tracing: bool,
}

impl Default for CanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasBuilder {
    pub fn new() -> Self {
        Self {
            palette: Palette::empty(),
            tracing: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Fetches the palette once; a failing source leaves it empty.
    pub fn with_palette_source(mut self, source: &dyn PaletteSource) -> Self {
        self.palette = Palette::load_or_empty(source);
        self
    }

    /// Keep a trace of the latest pass, readable through [`Canvas::last_trace`].
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn build(self) -> Canvas {
        Canvas {
            store: GraphStore::new(),
            evaluator: Evaluator::new(),
            palette: self.palette,
            tracing: self.tracing,
            last_trace: Vec::new(),
        }
    }
}

/// A graph store paired with its evaluator and palette.
pub struct Canvas {
    store: GraphStore,
    evaluator: Evaluator,
    palette: Palette,
    tracing: bool,
    last_trace: Vec<BoxTrace>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        CanvasBuilder::new().build()
    }

    pub fn builder() -> CanvasBuilder {
        CanvasBuilder::new()
    }

    /// Places a new box and evaluates. Unknown operator names still produce a
    /// box whose output is the kind default.
    pub fn create_box(
        &mut self,
        kind: OperationKind,
        operator_name: &str,
        position: Position,
    ) -> BoxId {
        let id = self.store.create_box(kind, operator_name, position).id();
        self.refresh();
        id
    }

    /// Wires `from`'s output into input `to_input_index` of `to`, replacing
    /// whatever fed it, then evaluates.
    pub fn connect_box_output(
        &mut self,
        from: BoxId,
        to: BoxId,
        to_input_index: usize,
    ) -> MutationOutcome {
        let result = self.store.add_connection(from, to, to_input_index);
        self.finish(result.into())
    }

    /// Feeds input `to_input_index` of `box_id` from a tag, then evaluates.
    pub fn connect_tag_input(
        &mut self,
        box_id: BoxId,
        to_input_index: usize,
        tag_name: &str,
        external_id: &str,
    ) -> MutationOutcome {
        let tag = TagRef::new(tag_name, external_id);
        let result = self.store.set_tag_input(box_id, to_input_index, tag);
        self.finish(result.into())
    }

    pub fn apply(&mut self, command: EditCommand) -> MutationOutcome {
        match command {
            EditCommand::CreateBox {
                kind,
                operator,
                position,
            } => MutationOutcome::Created(self.create_box(kind, &operator, position)),
            EditCommand::ConnectBoxOutput {
                from_box_id,
                to_box_id,
                to_input_index,
            } => self.connect_box_output(from_box_id, to_box_id, to_input_index),
            EditCommand::ConnectTagInput {
                box_id,
                to_input_index,
                tag_name,
                external_id,
            } => self.connect_tag_input(box_id, to_input_index, &tag_name, &external_id),
        }
    }

    /// Handles a palette entry dropped on empty canvas. `None` if the entry
    /// cannot be dropped there.
    pub fn drop_on_canvas(
        &mut self,
        payload: DropPayload,
        position: Position,
    ) -> Option<MutationOutcome> {
        payload.onto_canvas(position).map(|cmd| self.apply(cmd))
    }

    /// Handles a palette entry dropped on a box input. `None` if the entry
    /// cannot be dropped there.
    pub fn drop_on_input(
        &mut self,
        payload: DropPayload,
        box_id: BoxId,
        input_index: usize,
    ) -> Option<MutationOutcome> {
        payload
            .onto_input(box_id, input_index)
            .map(|cmd| self.apply(cmd))
    }

    /// Runs one more pass without changing the graph.
    pub fn evaluate(&mut self) -> PassSummary {
        self.refresh()
    }

    /// Runs extra passes until outputs stop changing, up to `max_passes`.
    pub fn settle(&mut self, max_passes: usize) -> SettleReport {
        self.evaluator.settle(&mut self.store, max_passes)
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn output(&self, id: BoxId) -> Option<Value> {
        self.store.find_box(id).and_then(|b| b.output())
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(&self.store)
    }

    /// Traces of the latest mutation-triggered pass. Empty unless tracing is enabled.
    pub fn last_trace(&self) -> &[BoxTrace] {
        &self.last_trace
    }

    fn finish(&mut self, outcome: MutationOutcome) -> MutationOutcome {
        match &outcome {
            MutationOutcome::Ignored(reason) => log::warn!("Ignored mutation: {}", reason),
            _ => {
                self.refresh();
            }
        }
        outcome
    }

    fn refresh(&mut self) -> PassSummary {
        if self.tracing {
            let (summary, traces) = self.evaluator.run_pass_traced(&mut self.store);
            self.last_trace = traces;
            summary
        } else {
            self.evaluator.run_pass(&mut self.store)
        }
    }
}
