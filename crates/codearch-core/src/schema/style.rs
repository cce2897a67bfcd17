//! Visual styles for rendering entity kinds in a graph explorer.

use serde::Serialize;

/// Node shape, using the names graph renderers such as Cytoscape expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    Ellipse,
    RoundRectangle,
    Diamond,
    Hexagon,
    Octagon,
    Tag,
}

impl NodeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::RoundRectangle => "round-rectangle",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
            Self::Octagon => "octagon",
            Self::Tag => "tag",
        }
    }
}

/// How nodes of one kind are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    /// Fill color as a hex string
    pub color: &'static str,
    pub shape: NodeShape,
    /// Node diameter in pixels
    pub size: u32,
}
