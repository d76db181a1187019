use super::BoxId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An externally-named value source, as listed in the palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRef {
    #[serde(alias = "tagName")]
    pub name: String,
    #[serde(alias = "nodeId", alias = "externalId")]
    pub external_id: String,
}

impl TagRef {
    pub fn new(name: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            external_id: external_id.into(),
        }
    }
}

/// What feeds one positional input of a box.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "sourceType", rename_all = "camelCase")]
pub enum InputSlot {
    #[default]
    Empty,
    Tag(TagRef),
    Box {
        #[serde(rename = "sourceId")]
        source: BoxId,
    },
}

impl InputSlot {
    pub fn is_empty(&self) -> bool {
        matches!(self, InputSlot::Empty)
    }

    /// The box this slot reads from, if it is wired to one.
    pub fn source_box(&self) -> Option<BoxId> {
        match self {
            InputSlot::Box { source } => Some(*source),
            _ => None,
        }
    }
}

impl fmt::Display for InputSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSlot::Empty => write!(f, "?"),
            InputSlot::Tag(tag) => write!(f, "${}", tag.name),
            InputSlot::Box { source } => write!(f, "{}", source),
        }
    }
}
