//! # Flowport - Port Type & Connection Model for Visual Workflow Editors
//!
//! **Flowport** is the typed core behind a node-based workflow canvas: it
//! owns the table of port types and their compatibility rules, the catalog
//! of node types and their declared ports, the validator that decides which
//! user-drawn connections are legal, and the workflow graph those decisions
//! mutate. Everything a canvas renders is downstream of this model; nothing
//! here depends on how it is rendered.
//!
//! ## Core Workflow
//!
//! 1.  **Load the tables**: build a [`registry::TypeRegistry`] and a
//!     [`catalog::NodeTypeCatalog`], either from the backend's JSON
//!     documents or from the built-in fallbacks.
//! 2.  **Own a graph**: create a [`graph::WorkflowGraph`], or import one
//!     from exported JSON via [`graph::Workflow::from_json`].
//! 3.  **Validate connections**: construct a
//!     [`validate::ConnectionValidator`] over the registry and catalog and
//!     route every attempted edge through it, either directly with
//!     [`graph::WorkflowGraph::connect`] or gesture-by-gesture with a
//!     [`validate::DragSession`].
//! 4.  **Persist**: round-trip workflows through pretty-printed JSON and
//!     keep saved copies in a [`store::WorkflowStore`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowport::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Built-in fallback tables; real sessions load these from JSON.
//!     let registry = TypeRegistry::with_defaults();
//!     let catalog = NodeTypeCatalog::builtin();
//!     let validator = ConnectionValidator::new(&registry, &catalog);
//!
//!     // Place two nodes and wire them up.
//!     let mut graph = WorkflowGraph::new("quality pipeline");
//!     let loader = graph.add_node("csv_loader", Position::new(80.0, 160.0));
//!     let features = graph.add_node("feature_extract", Position::new(340.0, 160.0));
//!
//!     let attempt = ConnectionAttempt::new(loader, "data", features, "data");
//!     match graph.connect(&validator, &attempt) {
//!         Ok(connection) => println!("connected: {}", connection.id),
//!         Err(e) => println!("rejected: {}", e),
//!     }
//!
//!     // Export for the canvas to re-import later.
//!     let json = graph.workflow().to_json()?;
//!     println!("{json}");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod registry;
pub mod store;
pub mod validate;
