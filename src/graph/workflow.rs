use super::connection::Connection;
use super::node::Node;
use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The saved/exported unit: all nodes and connections plus metadata.
///
/// `id` stays `None` until the workflow is first saved to a store. The JSON
/// shape accepts the camelCase field names the original editor emits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(
        default,
        rename = "lastSaved",
        alias = "last_saved",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_saved: Option<DateTime<Utc>>,
}

impl Workflow {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Serializes to the human-readable export format.
    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(self).map_err(|e| StoreError::JsonParse(e.to_string()))
    }

    /// Parses an exported or hand-written workflow document.
    ///
    /// Node-type identifiers are not checked against any catalog here;
    /// unknown types surface later through the catalog's empty-port-set
    /// path.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        serde_json::from_str(json).map_err(|e| StoreError::JsonParse(e.to_string()))
    }
}
