use serde::{Deserialize, Serialize};

/// A named, typed input or output slot on a node type.
///
/// Ports belong to node types, never to node instances. `name` is purely a
/// display label; lookup always goes through `id`. Legacy catalog entries
/// that only carry a `name` get `id := name` assigned at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Port {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Port {
    /// Creates a port whose display name equals its id.
    pub fn new(id: &str, ty: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            ty: ty.to_string(),
            required: false,
            hint: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.hint = Some(hint.to_string());
        self
    }
}

/// An advisory configuration field declared by a node type. The shape of a
/// node instance's config map is advised, not enforced, by these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigField {
    pub key: String,
    pub label: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// A template defining a kind of workflow step: its display metadata and
/// its ordered input and output ports. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeType {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub inputs: Vec<Port>,
    #[serde(default)]
    pub outputs: Vec<Port>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub config_fields: Vec<ConfigField>,
}

/// A borrowed view of one node type's port lists. Unknown node types resolve
/// to the empty set, which callers treat as "no declared ports".
#[derive(Debug, Clone, Copy)]
pub struct PortSet<'a> {
    pub inputs: &'a [Port],
    pub outputs: &'a [Port],
}

impl<'a> PortSet<'a> {
    pub const EMPTY: PortSet<'static> = PortSet {
        inputs: &[],
        outputs: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }

    /// Finds an input port by id.
    pub fn input(&self, id: &str) -> Option<&'a Port> {
        self.inputs.iter().find(|p| p.id == id)
    }

    /// Finds an output port by id.
    pub fn output(&self, id: &str) -> Option<&'a Port> {
        self.outputs.iter().find(|p| p.id == id)
    }
}
