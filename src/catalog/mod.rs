//! The node type catalog: resolves a node-type identifier to its declared
//! ports and configuration schema.
//!
//! The catalog is populated once per session, either from the discovery
//! backend's JSON document or from the built-in fallback table, and is never
//! patched in place afterwards; reload replaces the whole catalog so no
//! validation observes a half-updated one.

use crate::error::{CatalogError, PortDirection};
use ahash::AHashMap;
use std::collections::HashSet;

mod builtin;
mod node_type;
mod schema;

pub use node_type::{ConfigField, NodeType, Port, PortSet};

/// Maps node-type identifiers to their port lists and config schemas.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeCatalog {
    types: AHashMap<String, NodeType>,
}

impl NodeTypeCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the static fallback catalog used when the discovery backend
    /// is unavailable.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for node_type in builtin::default_node_types() {
            // The built-in table is known-good; insertion cannot fail.
            catalog
                .insert(node_type)
                .unwrap_or_else(|e| unreachable!("builtin catalog invalid: {e}"));
        }
        catalog
    }

    /// Parses a catalog from the discovery backend's JSON document,
    /// normalizing legacy port entries and validating port-id uniqueness.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: schema::CatalogDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParse(e.to_string()))?;
        let mut catalog = Self::new();
        for raw in doc.node_types {
            catalog.insert(raw.normalize()?)?;
        }
        Ok(catalog)
    }

    /// Registers a node type, rejecting duplicate port ids within one
    /// direction. An input and an output may share an id; direction
    /// disambiguates.
    pub fn insert(&mut self, node_type: NodeType) -> Result<(), CatalogError> {
        check_unique(&node_type, PortDirection::Input)?;
        check_unique(&node_type, PortDirection::Output)?;
        self.types.insert(node_type.id.clone(), node_type);
        Ok(())
    }

    /// Replaces this catalog wholesale with a freshly loaded one.
    pub fn replace(&mut self, other: NodeTypeCatalog) {
        self.types = other.types;
    }

    /// Looks up a node type by id.
    pub fn get(&self, node_type_id: &str) -> Option<&NodeType> {
        self.types.get(node_type_id)
    }

    /// Resolves a node-type id to its port lists. Unknown ids yield the
    /// empty port set rather than an error; callers treat that as "no
    /// declared ports".
    pub fn ports(&self, node_type_id: &str) -> PortSet<'_> {
        match self.types.get(node_type_id) {
            Some(node_type) => PortSet {
                inputs: &node_type.inputs,
                outputs: &node_type.outputs,
            },
            None => PortSet::EMPTY,
        }
    }

    /// Whether the catalog knows this node-type id.
    pub fn contains(&self, node_type_id: &str) -> bool {
        self.types.contains_key(node_type_id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over all registered node types in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeType> {
        self.types.values()
    }
}

fn check_unique(node_type: &NodeType, direction: PortDirection) -> Result<(), CatalogError> {
    let ports = match direction {
        PortDirection::Input => &node_type.inputs,
        PortDirection::Output => &node_type.outputs,
    };
    let mut seen = HashSet::new();
    for port in ports {
        if !seen.insert(port.id.as_str()) {
            return Err(CatalogError::DuplicatePort {
                node_type: node_type.id.clone(),
                port: port.id.clone(),
                direction,
            });
        }
    }
    Ok(())
}
