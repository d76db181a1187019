//! Common test utilities for building canvases, palettes and scripts.
use wirebox::error::PaletteError;
use wirebox::prelude::*;

/// A palette in the feed shape, with a nested group and a tag name that
/// appears twice.
#[allow(dead_code)]
pub const PALETTE_JSON: &str = r#"{
    "Plant": {
        "_tags": {
            "Level": "ns=2;s=Plant.Level",
            "Pressure": "ns=2;s=Plant.Pressure"
        },
        "_groups": {
            "Pump": {
                "_tags": { "Speed": "ns=2;s=Plant.Pump.Speed", "Level": "ns=2;s=Plant.Pump.Level" }
            }
        }
    },
    "Ambient": {
        "tags": { "Temperature": "ns=2;s=Ambient.Temperature" }
    }
}"#;

/// Text script: `#1 = NOT(empty)`, `#2 = ADD(#1, $Level)`, `#3 = #2 > #1`.
#[allow(dead_code)]
pub const SCRIPT_TEXT: &str = "\
# three boxes fed from left to right
box logical NOT 10 10
box operation ADD 200 10
box logical GreaterThan 400 10
wire 1 2 0
tag 2 1 Level ns=2;s=Plant.Level
wire 2 3 0
wire 1 3 1
wire 1 3 9   # out of range, ignored
";

/// The same graph as [`SCRIPT_TEXT`], minus the ignored wire, as JSON.
#[allow(dead_code)]
pub const SCRIPT_JSON: &str = r#"{
    "commands": [
        { "op": "createBox", "kind": "logicalOperation", "operator": "NOT", "position": { "x": 10, "y": 10 } },
        { "op": "createBox", "kind": "operation", "operationName": "ADD", "position": { "x": 200, "y": 10 } },
        { "op": "createBox", "kind": "logicalOperation", "operator": "GreaterThan", "position": { "x": 400, "y": 10 } },
        { "op": "connectBoxOutput", "fromBoxId": 1, "toBoxId": 2, "toInputIndex": 0 },
        { "op": "connectTagInput", "boxId": 2, "toInputIndex": 1, "tagName": "Level", "nodeId": "ns=2;s=Plant.Level" },
        { "op": "connectBoxOutput", "fromBoxId": 2, "toBoxId": 3, "toInputIndex": 0 },
        { "op": "connectBoxOutput", "fromBoxId": 1, "toBoxId": 3, "toInputIndex": 1 }
    ]
}"#;

/// Creates a canvas with the sample palette and tracing enabled.
#[allow(dead_code)]
pub fn traced_canvas() -> Canvas {
    let palette = Palette::from_json(PALETTE_JSON).expect("Sample palette should parse");
    Canvas::builder()
        .with_palette(palette)
        .with_tracing(true)
        .build()
}

/// Box `a` created before box `b`, with `a` feeding `b`'s first input.
#[allow(dead_code)]
pub fn forward_chain(
    canvas: &mut Canvas,
    a: (OperationKind, &str),
    b: (OperationKind, &str),
) -> (BoxId, BoxId) {
    let a = canvas.create_box(a.0, a.1, Position::default());
    let b = canvas.create_box(b.0, b.1, Position::default());
    let outcome = canvas.connect_box_output(a, b, 0);
    assert_eq!(outcome, MutationOutcome::Applied);
    (a, b)
}

/// An in-memory address space node for browse-based palette tests.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct FakeNode {
    pub name: String,
    pub id: String,
    pub children: Vec<FakeNode>,
    pub broken: bool,
}

#[allow(dead_code)]
impl FakeNode {
    pub fn leaf(name: &str, id: &str) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            children: Vec::new(),
            broken: false,
        }
    }

    pub fn folder(name: &str, children: Vec<FakeNode>) -> Self {
        Self {
            name: name.to_string(),
            id: format!("ns=2;s={}", name),
            children,
            broken: false,
        }
    }

    /// A node whose children cannot be listed.
    pub fn broken(name: &str) -> Self {
        Self {
            broken: true,
            ..Self::leaf(name, name)
        }
    }
}

impl BrowseNode for FakeNode {
    fn browse_name(&self) -> String {
        self.name.clone()
    }

    fn node_id(&self) -> String {
        self.id.clone()
    }

    fn children(&self) -> Result<Vec<Self>, PaletteError> {
        if self.broken {
            return Err(PaletteError::Browse(format!("'{}' refused browse", self.name)));
        }
        Ok(self.children.clone())
    }
}

/// A typical address space: one channel with a device and its tags, plus
/// the internal nodes that must stay out of the palette.
#[allow(dead_code)]
pub fn sample_address_space() -> Vec<FakeNode> {
    vec![
        FakeNode::folder(
            "Channel1",
            vec![
                FakeNode::folder(
                    "Device1",
                    vec![
                        FakeNode::leaf("Level", "ns=2;s=Channel1.Device1.Level"),
                        FakeNode::leaf("Speed", "ns=2;s=Channel1.Device1.Speed"),
                        FakeNode::leaf("_Statistics", "ns=2;s=Channel1.Device1._Statistics"),
                    ],
                ),
                FakeNode::leaf("_System", "ns=2;s=Channel1._System"),
            ],
        ),
        FakeNode::folder("Server", vec![FakeNode::leaf("ServerStatus", "i=2256")]),
        FakeNode::folder("_AdvancedTags", vec![FakeNode::leaf("Hidden", "h")]),
    ]
}
