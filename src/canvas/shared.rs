use super::{Canvas, EditCommand, MutationOutcome};
use crate::error::CanvasError;
use crate::graph::GraphSnapshot;
use crate::model::{BoxId, Value};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A canvas that can be handed to several callers.
///
/// A mutation and the pass that follows it run under one write lock, so
/// readers never observe outputs from the middle of a pass.
#[derive(Clone)]
pub struct SharedCanvas {
    inner: Arc<RwLock<Canvas>>,
}

impl SharedCanvas {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            inner: Arc::new(RwLock::new(canvas)),
        }
    }

    pub fn apply(&self, command: EditCommand) -> Result<MutationOutcome, CanvasError> {
        Ok(self.write()?.apply(command))
    }

    pub fn snapshot(&self) -> Result<GraphSnapshot, CanvasError> {
        Ok(self.read()?.snapshot())
    }

    pub fn output(&self, id: BoxId) -> Result<Option<Value>, CanvasError> {
        Ok(self.read()?.output(id))
    }

    /// Runs `f` against the canvas under the read lock.
    pub fn with_canvas<R>(&self, f: impl FnOnce(&Canvas) -> R) -> Result<R, CanvasError> {
        let canvas = self.read()?;
        Ok(f(&canvas))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Canvas>, CanvasError> {
        self.inner.read().map_err(|_| CanvasError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Canvas>, CanvasError> {
        self.inner.write().map_err(|_| CanvasError::LockPoisoned)
    }
}
