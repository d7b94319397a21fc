//! Wire shapes for the catalog document served by the node discovery
//! backend. These structs exist only for deserialization; loading normalizes
//! them into the canonical [`NodeType`](super::NodeType) model.

use super::node_type::{ConfigField, NodeType, Port};
use crate::error::{CatalogError, PortDirection};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct CatalogDocument {
    #[serde(alias = "nodeTypes")]
    pub node_types: Vec<RawNodeType>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawNodeType {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub inputs: Vec<RawPort>,
    #[serde(default)]
    pub outputs: Vec<RawPort>,
    #[serde(default, alias = "configFields")]
    pub config_fields: Vec<RawConfigField>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawPort {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, alias = "position")]
    pub hint: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawConfigField {
    pub key: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
}

impl RawNodeType {
    /// Normalizes a raw catalog entry into the canonical model: port ids
    /// default to names (and vice versa), port types default to `any`.
    pub(super) fn normalize(self) -> Result<NodeType, CatalogError> {
        let id = self.id;
        let inputs = normalize_ports(self.inputs, &id, PortDirection::Input)?;
        let outputs = normalize_ports(self.outputs, &id, PortDirection::Output)?;
        Ok(NodeType {
            label: self.label.unwrap_or_else(|| id.clone()),
            category: self.category.unwrap_or_default(),
            inputs,
            outputs,
            config_fields: self
                .config_fields
                .into_iter()
                .map(|f| ConfigField {
                    label: f.label.unwrap_or_else(|| f.key.clone()),
                    kind: f.kind.unwrap_or_else(|| "text".to_string()),
                    key: f.key,
                    default: f.default,
                })
                .collect(),
            id,
        })
    }
}

fn normalize_ports(
    raw: Vec<RawPort>,
    node_type: &str,
    direction: PortDirection,
) -> Result<Vec<Port>, CatalogError> {
    let mut ports = Vec::with_capacity(raw.len());
    for port in raw {
        let (id, name) = match (port.id, port.name) {
            (Some(id), Some(name)) => (id, name),
            (Some(id), None) => (id.clone(), id),
            // Legacy entries carry only a display name; adopt it as the id.
            (None, Some(name)) => (name.clone(), name),
            (None, None) => {
                return Err(CatalogError::JsonParse(format!(
                    "a {} port of node type '{}' has neither an id nor a name",
                    direction, node_type
                )));
            }
        };
        ports.push(Port {
            id,
            name,
            ty: port.ty.unwrap_or_else(|| "any".to_string()),
            required: port.required,
            hint: port.hint,
        });
    }
    Ok(ports)
}
