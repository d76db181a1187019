use crate::graph::GraphStore;
use crate::model::Value;
use crate::trace::BoxTrace;

mod engine;

pub use engine::apply;
use engine::BoxEngine;

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    /// Number of boxes evaluated (always every box in the store).
    pub evaluated: usize,
    /// Number of boxes whose output differs from before the pass.
    /// A box evaluated for the first time counts as changed.
    pub changed: usize,
}

/// Outcome of [`Evaluator::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleReport {
    /// Passes actually run.
    pub passes: usize,
    /// `true` if the last pass changed nothing.
    pub settled: bool,
}

/// Recomputes every box output from the current graph.
///
/// A pass visits boxes once each in creation order and stores each result
/// before moving on. It is a single linear sweep, not a dependency-ordered
/// one: a box reading a box created after it sees the previous pass's value,
/// and cycles keep reading one-pass-stale values instead of failing. A pass
/// never fails and never recurses.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Runs one full pass over the store.
    pub fn run_pass(&self, store: &mut GraphStore) -> PassSummary {
        let mut summary = PassSummary::default();
        for position in 0..store.len() {
            let outcome = BoxEngine::new(store, position).evaluate();
            Self::record(store, position, outcome, &mut summary);
        }
        log::trace!(
            "Pass evaluated {} box(es), {} changed",
            summary.evaluated,
            summary.changed
        );
        summary
    }

    /// Runs one full pass, also recording how each box got its value.
    pub fn run_pass_traced(&self, store: &mut GraphStore) -> (PassSummary, Vec<BoxTrace>) {
        let mut summary = PassSummary::default();
        let mut traces = Vec::with_capacity(store.len());
        for position in 0..store.len() {
            let trace = BoxEngine::new(store, position).evaluate_traced();
            Self::record(store, position, trace.outcome, &mut summary);
            traces.push(trace);
        }
        (summary, traces)
    }

    /// Runs passes until one changes nothing, up to `max_passes`.
    ///
    /// Forward references need extra passes to catch up; a genuine cycle may
    /// never settle, which is why the count is bounded.
    pub fn settle(&self, store: &mut GraphStore, max_passes: usize) -> SettleReport {
        for pass in 1..=max_passes {
            if self.run_pass(store).changed == 0 {
                return SettleReport {
                    passes: pass,
                    settled: true,
                };
            }
        }
        log::debug!("Graph did not settle within {} pass(es)", max_passes);
        SettleReport {
            passes: max_passes,
            settled: false,
        }
    }

    fn record(
        store: &mut GraphStore,
        position: usize,
        outcome: Value,
        summary: &mut PassSummary,
    ) {
        let unchanged = store
            .box_at(position)
            .output()
            .is_some_and(|previous| previous.same_as(&outcome));
        if !unchanged {
            summary.changed += 1;
        }
        summary.evaluated += 1;
        store.set_output_at(position, outcome);
    }
}
