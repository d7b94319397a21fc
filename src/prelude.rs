//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the flowport crate so
//! consumers can bring the whole connection model into scope with one use.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowport::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let registry = TypeRegistry::with_defaults();
//! let catalog = NodeTypeCatalog::builtin();
//! let validator = ConnectionValidator::new(&registry, &catalog);
//!
//! let mut graph = WorkflowGraph::new("demo");
//! let loader = graph.add_node("csv_loader", Position::new(80.0, 120.0));
//! let filter = graph.add_node("filter_rows", Position::new(320.0, 120.0));
//!
//! let attempt = ConnectionAttempt::new(loader, "data", filter, "data");
//! graph.connect(&validator, &attempt)?;
//! # Ok(())
//! # }
//! ```

// Graph and workflow model
pub use crate::graph::{
    Connection, Endpoint, Node, NodeId, Position, Size, Workflow, WorkflowGraph,
};

// Catalog and registry
pub use crate::catalog::{ConfigField, NodeType, NodeTypeCatalog, Port, PortSet};
pub use crate::registry::{CompatRule, CompatibilityMode, TypeInfo, TypeRegistry};

// Validation and the drag-session state machine
pub use crate::validate::{
    AttemptId, CompatibilityCheck, ConnectionAttempt, ConnectionValidator, DragSession, DragState,
    ReleaseOutcome, Resolution,
};

// Persistence
pub use crate::store::WorkflowStore;

// Error types
pub use crate::error::{
    CatalogError, ConnectError, PortDirection, ServiceUnavailable, StoreError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
