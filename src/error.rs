use thiserror::Error;

/// Errors that can reject a user-attempted connection between two ports.
///
/// Every variant except [`ConnectError::Duplicate`] is meant to be surfaced
/// to the user as an inline, transient indicator near the attempted edge.
/// `Duplicate` is swallowed by the graph: recreating an existing connection
/// is a silent no-op.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    #[error("Cannot connect node '{node_id}' to itself")]
    SelfLoop { node_id: u64 },

    #[error("Port '{port}' not found among the {direction} ports of node type '{node_type}'")]
    PortNotFound {
        node_type: String,
        port: String,
        direction: PortDirection,
    },

    #[error("Incompatible types: {from_type} \u{2192} {to_type}")]
    TypeIncompatible { from_type: String, to_type: String },

    #[error("Connection already exists")]
    Duplicate,
}

/// Which side of a node a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    Input,
    Output,
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortDirection::Input => write!(f, "input"),
            PortDirection::Output => write!(f, "output"),
        }
    }
}

/// Returned by an external compatibility service that could not be reached.
///
/// Deliberately not a [`ConnectError`] variant: an unreachable service
/// degrades to a permissive accept (logged), it never rejects an attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Type compatibility service unavailable")]
pub struct ServiceUnavailable;

/// Errors that can occur while loading a node-type catalog or type table.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParse(String),

    #[error("Node type '{node_type}' declares duplicate {direction} port id '{port}'")]
    DuplicatePort {
        node_type: String,
        port: String,
        direction: PortDirection,
    },
}

/// Errors that can occur while persisting or restoring workflows.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Workflow store IO failure at '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse workflow JSON: {0}")]
    JsonParse(String),

    #[error("No stored workflow with id '{0}'")]
    WorkflowNotFound(String),
}
