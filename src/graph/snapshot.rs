use super::GraphStore;
use crate::model::{BoxId, Connection, InputSlot, OpBox, OperationKind, Position, Value};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Everything the drawing layer needs to render one box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxView {
    pub id: BoxId,
    pub kind: OperationKind,
    pub operator_name: String,
    pub arity: usize,
    pub output: Option<Value>,
    pub inputs: Vec<InputSlot>,
    pub position: Position,
}

impl From<&OpBox> for BoxView {
    fn from(op_box: &OpBox) -> Self {
        Self {
            id: op_box.id(),
            kind: op_box.kind(),
            operator_name: op_box.operator_name().to_string(),
            arity: op_box.arity(),
            output: op_box.output(),
            inputs: op_box.inputs().to_vec(),
            position: op_box.position,
        }
    }
}

/// A detached copy of the graph: boxes in creation order and every wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub boxes: Vec<BoxView>,
    pub connections: Vec<Connection>,
}

impl GraphSnapshot {
    pub fn capture(store: &GraphStore) -> Self {
        Self {
            boxes: store.boxes().iter().map(BoxView::from).collect(),
            connections: store.connections().to_vec(),
        }
    }

    pub fn find(&self, id: BoxId) -> Option<&BoxView> {
        self.boxes.iter().find(|b| b.id == id)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GraphSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for view in &self.boxes {
            let output = view
                .output
                .map_or_else(|| "?".to_string(), |v| v.to_string());
            writeln!(
                f,
                "{:<6} {:<12} [{}] -> {}",
                view.id.to_string(),
                view.operator_name,
                view.inputs.iter().join(", "),
                output
            )?;
        }
        for c in &self.connections {
            writeln!(
                f,
                "  wire {} -> {} input {}",
                c.from_box_id, c.to_box_id, c.to_input_index
            )?;
        }
        Ok(())
    }
}
