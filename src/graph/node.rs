use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Identifier of a placed node, unique within one workflow. Ids come from a
/// monotonically increasing per-graph counter and are never reused within a
/// session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An explicit width/height override for a placed node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// A placed, positioned, configured occurrence of a node type in a workflow.
///
/// The config map's shape is advised by the node type's declared config
/// fields, never enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "nodeType", alias = "type", alias = "node_type")]
    pub node_type: String,
    pub position: Position,
    #[serde(default)]
    pub config: AHashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl Node {
    pub fn new(id: NodeId, node_type: &str, position: Position) -> Self {
        Self {
            id,
            node_type: node_type.to_string(),
            position,
            config: AHashMap::new(),
            size: None,
        }
    }
}
