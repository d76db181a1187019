//! The sidebar catalog: operator entries plus the externally supplied tag tree.

mod source;

pub use source::*;

use crate::error::PaletteError;
use crate::model::{OperationKind, Operator, TagRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named group of tags, possibly containing further groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteGroup {
    /// Tag display name -> external id.
    #[serde(rename = "_tags", alias = "tags", default)]
    pub tags: BTreeMap<String, String>,
    #[serde(rename = "_groups", alias = "groups", default)]
    pub groups: BTreeMap<String, PaletteGroup>,
}

impl PaletteGroup {
    fn find_tag(&self, name: &str) -> Option<TagRef> {
        if let Some(id) = self.tags.get(name) {
            return Some(TagRef::new(name, id.as_str()));
        }
        self.groups.values().find_map(|g| g.find_tag(name))
    }

    fn collect_tags(&self, path: &str, out: &mut Vec<(String, TagRef)>) {
        for (name, id) in &self.tags {
            out.push((path.to_string(), TagRef::new(name.as_str(), id.as_str())));
        }
        for (name, group) in &self.groups {
            group.collect_tags(&format!("{}/{}", path, name), out);
        }
    }
}

/// Operators of one family as they appear in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorGroup {
    pub title: &'static str,
    pub kind: OperationKind,
    pub operators: Vec<Operator>,
}

/// The tag catalog, keyed by top-level group name.
///
/// Obtained once before the canvas is used. When it cannot be obtained the
/// canvas runs with an empty palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    groups: BTreeMap<String, PaletteGroup>,
}

impl Palette {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(groups: BTreeMap<String, PaletteGroup>) -> Self {
        Self { groups }
    }

    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        serde_json::from_str(json).map_err(|e| PaletteError::JsonParseError(e.to_string()))
    }

    /// Fetches from `source`, falling back to an empty palette on any failure.
    pub fn load_or_empty(source: &dyn PaletteSource) -> Self {
        match source.fetch() {
            Ok(palette) => {
                log::debug!(
                    "Loaded palette from {} ({} tag(s))",
                    source.describe(),
                    palette.tag_count()
                );
                palette
            }
            Err(e) => {
                log::warn!(
                    "Palette unavailable from {}, continuing without tags: {}",
                    source.describe(),
                    e
                );
                Self::empty()
            }
        }
    }

    pub fn groups(&self) -> &BTreeMap<String, PaletteGroup> {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// First tag with this display name, searching each group's own tags
    /// before its subgroups.
    pub fn find_tag(&self, name: &str) -> Option<TagRef> {
        self.groups.values().find_map(|g| g.find_tag(name))
    }

    /// Every tag with the slash-separated path of the group holding it.
    pub fn tags(&self) -> Vec<(String, TagRef)> {
        let mut out = Vec::new();
        for (name, group) in &self.groups {
            group.collect_tags(name, &mut out);
        }
        out
    }

    pub fn tag_count(&self) -> usize {
        self.tags().len()
    }

    /// The draggable operator entries, one group per operator family.
    pub fn operator_entries() -> Vec<OperatorGroup> {
        [OperationKind::Logical, OperationKind::Arithmetic]
            .into_iter()
            .map(|kind| OperatorGroup {
                title: kind.palette_title(),
                kind,
                operators: Operator::of_kind(kind).collect(),
            })
            .collect()
    }
}
