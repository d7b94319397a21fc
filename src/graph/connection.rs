use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// One end of a connection: a node plus one of its port ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "nodeId", alias = "node")]
    pub node: NodeId,
    pub port: String,
}

impl Endpoint {
    pub fn new(node: NodeId, port: &str) -> Self {
        Self {
            node,
            port: port.to_string(),
        }
    }
}

/// A validated edge from one node's output port to another node's input
/// port. The id is derived deterministically from the endpoint tuple, so
/// equal endpoints always produce equal ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub from: Endpoint,
    pub to: Endpoint,
}

impl Connection {
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        Self {
            id: Self::derive_id(&from, &to),
            from,
            to,
        }
    }

    /// Deterministic connection id for an endpoint tuple.
    pub fn derive_id(from: &Endpoint, to: &Endpoint) -> String {
        format!("c{}:{}-{}:{}", from.node, from.port, to.node, to.port)
    }

    /// Whether either endpoint references the given node.
    pub fn involves_node(&self, node: NodeId) -> bool {
        self.from.node == node || self.to.node == node
    }

    /// Whether this connection joins exactly the given endpoint tuple.
    pub fn joins(&self, from: &Endpoint, to: &Endpoint) -> bool {
        self.from == *from && self.to == *to
    }
}
