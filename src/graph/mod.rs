//! The graph store and the read-only views handed to the drawing layer.

mod snapshot;
mod store;

pub use snapshot::*;
pub use store::GraphStore;
