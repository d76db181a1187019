use crate::error::{ScriptError, WiringError};
use crate::model::{BoxId, OperationKind, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One graph edit, as produced by the drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditCommand {
    #[serde(rename_all = "camelCase")]
    CreateBox {
        kind: OperationKind,
        #[serde(alias = "operationName", alias = "operatorName")]
        operator: String,
        #[serde(default)]
        position: Position,
    },
    #[serde(rename_all = "camelCase")]
    ConnectBoxOutput {
        from_box_id: BoxId,
        to_box_id: BoxId,
        to_input_index: usize,
    },
    #[serde(rename_all = "camelCase")]
    ConnectTagInput {
        box_id: BoxId,
        to_input_index: usize,
        tag_name: String,
        #[serde(alias = "nodeId")]
        external_id: String,
    },
}

// Renders the one-line text syntax read by `EditScript::from_lines`.
impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditCommand::CreateBox {
                kind,
                operator,
                position,
            } => write!(f, "box {} {} {} {}", kind, operator, position.x, position.y),
            EditCommand::ConnectBoxOutput {
                from_box_id,
                to_box_id,
                to_input_index,
            } => write!(
                f,
                "wire {} {} {}",
                from_box_id.0, to_box_id.0, to_input_index
            ),
            EditCommand::ConnectTagInput {
                box_id,
                to_input_index,
                tag_name,
                external_id,
            } => write!(
                f,
                "tag {} {} {} {}",
                box_id.0, to_input_index, tag_name, external_id
            ),
        }
    }
}

/// What a mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Created(BoxId),
    Applied,
    /// Nothing changed; the reason is informational only.
    Ignored(WiringError),
}

impl MutationOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, MutationOutcome::Ignored(_))
    }

    pub fn created_id(&self) -> Option<BoxId> {
        match self {
            MutationOutcome::Created(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<Result<(), WiringError>> for MutationOutcome {
    fn from(result: Result<(), WiringError>) -> Self {
        match result {
            Ok(()) => MutationOutcome::Applied,
            Err(e) => MutationOutcome::Ignored(e),
        }
    }
}

/// Data carried by a palette entry while it is being dragged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DropPayload {
    #[serde(rename = "tag")]
    Tag {
        name: String,
        #[serde(rename = "nodeId")]
        node_id: String,
    },
    #[serde(rename = "logicalOperation")]
    LogicalOperation { value: String },
    #[serde(rename = "operation")]
    Operation { value: String },
}

impl DropPayload {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::JsonParseError(e.to_string()))
    }

    /// The edit for a drop on empty canvas. Only operators create anything there.
    pub fn onto_canvas(self, position: Position) -> Option<EditCommand> {
        let (kind, operator) = match self {
            DropPayload::LogicalOperation { value } => (OperationKind::Logical, value),
            DropPayload::Operation { value } => (OperationKind::Arithmetic, value),
            DropPayload::Tag { .. } => return None,
        };
        Some(EditCommand::CreateBox {
            kind,
            operator,
            position,
        })
    }

    /// The edit for a drop on a box input. Only tags can be dropped there.
    pub fn onto_input(self, box_id: BoxId, input_index: usize) -> Option<EditCommand> {
        match self {
            DropPayload::Tag { name, node_id } => Some(EditCommand::ConnectTagInput {
                box_id,
                to_input_index: input_index,
                tag_name: name,
                external_id: node_id,
            }),
            _ => None,
        }
    }
}
