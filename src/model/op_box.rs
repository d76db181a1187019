use super::{InputSlot, OperationKind, Operator, Value};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a box. Assigned in creation order, starting at 1, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxId(pub u64);

impl fmt::Display for BoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for BoxId {
    fn from(id: u64) -> Self {
        BoxId(id)
    }
}

/// Canvas placement. The engine stores it and never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One operation instance on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct OpBox {
    id: BoxId,
    kind: OperationKind,
    operator_name: String,
    operator: Option<Operator>,
    inputs: Vec<InputSlot>,
    output: Option<Value>,
    pub position: Position,
}

impl OpBox {
    pub(crate) fn new(
        id: BoxId,
        kind: OperationKind,
        operator_name: &str,
        position: Position,
    ) -> Self {
        let arity = kind.arity_for(operator_name);
        Self {
            id,
            kind,
            operator_name: operator_name.to_string(),
            operator: Operator::resolve(kind, operator_name),
            inputs: vec![InputSlot::Empty; arity],
            output: None,
            position,
        }
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The operator name exactly as requested at creation.
    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    /// The resolved operator, or `None` when the name is unknown for this kind.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    pub fn inputs(&self) -> &[InputSlot] {
        &self.inputs
    }

    pub fn input(&self, index: usize) -> Option<&InputSlot> {
        self.inputs.get(index)
    }

    /// Last computed output; `None` until the first evaluation pass.
    pub fn output(&self) -> Option<Value> {
        self.output
    }

    // Slot count is fixed at creation, so this only ever replaces contents.
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut InputSlot> {
        self.inputs.get_mut(index)
    }

    pub(crate) fn set_output(&mut self, value: Value) {
        self.output = Some(value);
    }
}
