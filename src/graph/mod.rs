//! The in-memory workflow graph and its mutation operations.
//!
//! The graph is the single owner of all nodes and connections in a session.
//! Every mutation runs synchronously and atomically from the caller's
//! perspective; no partially applied state is ever observable. Connections
//! only come into existence through [`WorkflowGraph::connect`], which routes
//! the attempt through a [`ConnectionValidator`].

use crate::error::ConnectError;
use crate::validate::{ConnectionAttempt, ConnectionValidator};

mod connection;
mod node;
mod workflow;

pub use connection::{Connection, Endpoint};
pub use node::{Node, NodeId, Position, Size};
pub use workflow::Workflow;

/// Owns a [`Workflow`] and maintains its invariants under mutation: every
/// connection's endpoints reference live nodes, and no two connections share
/// an endpoint tuple.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    workflow: Workflow,
    next_node_id: u64,
}

impl Default for WorkflowGraph {
    fn default() -> Self {
        Self::new("")
    }
}

impl WorkflowGraph {
    /// Creates an empty graph for a new, unsaved workflow.
    pub fn new(name: &str) -> Self {
        Self {
            workflow: Workflow::new(name),
            next_node_id: 1,
        }
    }

    /// Wraps an imported workflow, re-seeding the id counter above the
    /// highest imported node id so newly added nodes never collide.
    pub fn from_workflow(workflow: Workflow) -> Self {
        let next_node_id = workflow
            .nodes
            .iter()
            .map(|n| n.id.0)
            .max()
            .map_or(1, |max| max + 1);
        Self {
            workflow,
            next_node_id,
        }
    }

    /// The current workflow state.
    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    /// Consumes the graph, yielding the workflow for export or saving.
    pub fn into_workflow(self) -> Workflow {
        self.workflow
    }

    pub fn nodes(&self) -> &[Node] {
        &self.workflow.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.workflow.connections
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.workflow.nodes.iter().find(|n| n.id == id)
    }

    pub fn connection(&self, connection_id: &str) -> Option<&Connection> {
        self.workflow
            .connections
            .iter()
            .find(|c| c.id == connection_id)
    }

    /// Whether a connection with exactly this endpoint tuple exists.
    pub fn has_connection(&self, from: &Endpoint, to: &Endpoint) -> bool {
        self.workflow.connections.iter().any(|c| c.joins(from, to))
    }

    /// Places a new node of the given type, returning its generated id.
    pub fn add_node(&mut self, node_type: &str, position: Position) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.workflow.nodes.push(Node::new(id, node_type, position));
        id
    }

    /// Deletes a node, cascading to every connection that references it on
    /// either side. Returns `false` if the node does not exist.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let before = self.workflow.nodes.len();
        self.workflow.nodes.retain(|n| n.id != id);
        if self.workflow.nodes.len() == before {
            return false;
        }
        self.workflow.connections.retain(|c| !c.involves_node(id));
        true
    }

    /// Attempts to materialize a connection through the validator. A
    /// duplicate attempt is a silent no-op that returns the existing
    /// connection; every other rejection propagates to the caller.
    pub fn connect<'a>(
        &'a mut self,
        validator: &ConnectionValidator<'_>,
        attempt: &ConnectionAttempt,
    ) -> Result<&'a Connection, ConnectError> {
        match validator.check(self, attempt) {
            Ok(()) => {
                let connection = Connection::new(attempt.from_endpoint(), attempt.to_endpoint());
                self.workflow.connections.push(connection);
                let idx = self.workflow.connections.len() - 1;
                Ok(&self.workflow.connections[idx])
            }
            Err(ConnectError::Duplicate) => {
                let (from, to) = (attempt.from_endpoint(), attempt.to_endpoint());
                self.workflow
                    .connections
                    .iter()
                    .find(|c| c.joins(&from, &to))
                    .ok_or(ConnectError::Duplicate)
            }
            Err(e) => Err(e),
        }
    }

    /// Inserts a connection whose verdict already arrived through the drag
    /// session's resolution path. Callers guarantee validation happened.
    pub(crate) fn insert_validated(&mut self, connection: Connection) {
        self.workflow.connections.push(connection);
    }

    /// Deletes a connection by id. Returns `false` if no such connection.
    pub fn disconnect(&mut self, connection_id: &str) -> bool {
        let before = self.workflow.connections.len();
        self.workflow.connections.retain(|c| c.id != connection_id);
        self.workflow.connections.len() != before
    }

    /// Updates a node's canvas position.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> bool {
        match self.workflow.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => false,
        }
    }

    /// Sets or clears a node's explicit size override.
    pub fn resize_node(&mut self, id: NodeId, size: Option<Size>) -> bool {
        match self.workflow.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.size = size;
                true
            }
            None => false,
        }
    }

    /// Writes one configuration entry on a node.
    pub fn set_config(&mut self, id: NodeId, key: &str, value: serde_json::Value) -> bool {
        match self.workflow.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.config.insert(key.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Removes every node and connection; the id counter keeps advancing so
    /// cleared ids are not reused within the session.
    pub fn clear(&mut self) {
        self.workflow.nodes.clear();
        self.workflow.connections.clear();
    }
}
