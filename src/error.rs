use crate::model::BoxId;
use thiserror::Error;

/// Why a wiring mutation was ignored. Reported as a diagnostic only: the graph
/// is left untouched and the caller carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WiringError {
    #[error("Box '{box_id}' does not exist")]
    BoxNotFound { box_id: BoxId },

    #[error("Input {index} is out of range for box '{box_id}', which has {arity} input(s)")]
    InputOutOfRange {
        box_id: BoxId,
        index: usize,
        arity: usize,
    },
}

/// Errors raised while obtaining the tag palette. Callers that build a canvas
/// fall back to an empty palette instead of failing.
#[derive(Error, Debug, Clone)]
pub enum PaletteError {
    #[error("Could not read palette '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse palette JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to browse the tag address space: {0}")]
    Browse(String),
}

/// Errors raised while loading an edit script.
#[derive(Error, Debug, Clone)]
pub enum ScriptError {
    #[error("Could not read script '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse script JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid command on line {line}: {message}")]
    InvalidCommand { line: usize, message: String },
}

/// Errors raised by the shared, lock-guarded canvas.
#[derive(Error, Debug, Clone)]
pub enum CanvasError {
    #[error("Canvas lock poisoned")]
    LockPoisoned,
}
