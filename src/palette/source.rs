use super::{Palette, PaletteGroup};
use crate::error::PaletteError;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Anything that can supply the tag palette.
///
/// Implement this to plug in a remote catalog lookup. The canvas calls it once
/// at construction and treats any error as "no tags available".
pub trait PaletteSource {
    fn fetch(&self) -> Result<Palette, PaletteError>;

    /// Short description used in log messages.
    fn describe(&self) -> String {
        "palette source".to_string()
    }
}

impl PaletteSource for Palette {
    fn fetch(&self) -> Result<Palette, PaletteError> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "static palette".to_string()
    }
}

/// Reads the palette from a JSON file in the feed shape.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaletteSource for JsonFileSource {
    fn fetch(&self) -> Result<Palette, PaletteError> {
        let json = fs::read_to_string(&self.path).map_err(|e| PaletteError::Io {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Palette::from_json(&json)
    }

    fn describe(&self) -> String {
        format!("'{}'", self.path.display())
    }
}

/// A node of a hierarchical tag address space.
pub trait BrowseNode: Sized {
    fn browse_name(&self) -> String;
    fn node_id(&self) -> String;
    fn children(&self) -> Result<Vec<Self>, PaletteError>;
}

/// Internal nodes of the address space that never appear in the palette.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('_') || name.contains("Server")
}

impl Palette {
    /// Builds a palette from the top-level nodes of an address space.
    ///
    /// Hidden nodes are skipped at every level. A node without children becomes
    /// a tag mapped to its node id; any other node becomes a group.
    pub fn from_browse_roots<N: BrowseNode>(roots: &[N]) -> Result<Palette, PaletteError> {
        let mut groups = BTreeMap::new();
        for root in roots {
            let name = root.browse_name();
            if is_hidden(&name) {
                continue;
            }
            groups.insert(name, browse_group(root)?);
        }
        Ok(Palette::new(groups))
    }
}

fn browse_group<N: BrowseNode>(node: &N) -> Result<PaletteGroup, PaletteError> {
    let mut group = PaletteGroup::default();
    for child in node.children()? {
        let name = child.browse_name();
        if is_hidden(&name) {
            continue;
        }
        if child.children()?.is_empty() {
            group.tags.insert(name, child.node_id());
        } else {
            group.groups.insert(name, browse_group(&child)?);
        }
    }
    Ok(group)
}

/// A palette source backed by an address space, browsed on every fetch.
pub struct BrowseSource<N: BrowseNode> {
    roots: Vec<N>,
}

impl<N: BrowseNode> BrowseSource<N> {
    pub fn new(roots: Vec<N>) -> Self {
        Self { roots }
    }
}

impl<N: BrowseNode> PaletteSource for BrowseSource<N> {
    fn fetch(&self) -> Result<Palette, PaletteError> {
        Palette::from_browse_roots(&self.roots)
    }

    fn describe(&self) -> String {
        format!("address space ({} root(s))", self.roots.len())
    }
}
