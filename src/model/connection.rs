use super::BoxId;
use serde::{Deserialize, Serialize};

/// A drawn wire from one box's output to a numbered input of another box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from_box_id: BoxId,
    pub to_box_id: BoxId,
    pub to_input_index: usize,
}

impl Connection {
    pub fn new(from_box_id: BoxId, to_box_id: BoxId, to_input_index: usize) -> Self {
        Self {
            from_box_id,
            to_box_id,
            to_input_index,
        }
    }

    /// Whether this wire lands on the given input.
    pub fn targets(&self, box_id: BoxId, input_index: usize) -> bool {
        self.to_box_id == box_id && self.to_input_index == input_index
    }
}
