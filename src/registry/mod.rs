//! The type registry: display metadata and compatibility rules for port types.
//!
//! The registry answers exactly one question for the connection validator:
//! "can a value of type A flow into a port expecting type B?". It is a pure
//! lookup structure, read-only after load, and replaced wholesale on reload
//! so that no validation ever observes a half-updated rule table.

use crate::error::CatalogError;
use ahash::AHashMap;

mod table;

pub use table::{CompatRule, TypeInfo};

/// How the registry decides compatibility.
///
/// `PermitAll` exists for development against incomplete catalogs; it accepts
/// every pairing and must be opted into explicitly. `Rules` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompatibilityMode {
    #[default]
    Rules,
    PermitAll,
}

/// The table of known port types and the rules governing which may connect.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: AHashMap<String, TypeInfo>,
    rules: AHashMap<String, CompatRule>,
    mode: CompatibilityMode,
}

impl TypeRegistry {
    /// Creates an empty registry. With no rules, only identical types, `any`,
    /// and unknown types connect.
    pub fn new() -> Self {
        Self {
            types: AHashMap::new(),
            rules: AHashMap::new(),
            mode: CompatibilityMode::Rules,
        }
    }

    /// Creates a registry populated with the built-in type table used when no
    /// backend-provided table is available.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for info in table::default_types() {
            registry.types.insert(info.name.clone(), info);
        }
        for rule in table::default_rules() {
            registry.insert_rule(rule);
        }
        registry
    }

    /// Parses a registry from the JSON type-table document served by the
    /// catalog backend.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: table::TypeTableDocument =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParse(e.to_string()))?;
        let mut registry = Self::new();
        for info in doc.types {
            registry.types.insert(info.name.clone(), info);
        }
        for rule in doc.rules {
            registry.insert_rule(rule);
        }
        Ok(registry)
    }

    /// Switches the compatibility decision mode. Selecting `PermitAll` is
    /// logged so permissive sessions are visible in traces.
    pub fn with_mode(mut self, mode: CompatibilityMode) -> Self {
        if mode == CompatibilityMode::PermitAll {
            tracing::warn!("type registry running in PermitAll mode; every connection will pass");
        }
        self.mode = mode;
        self
    }

    /// Replaces this registry wholesale with a freshly loaded one.
    pub fn replace(&mut self, other: TypeRegistry) {
        *self = other;
    }

    /// Display metadata for a type name, if the type is known.
    pub fn type_info(&self, name: &str) -> Option<&TypeInfo> {
        self.types.get(name)
    }

    /// Whether `name` appears in the type table.
    pub fn is_known(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Decides whether a value of `source` type may flow into a port that
    /// expects `target` type.
    ///
    /// Identical types and `any` on either side always pass. A type name
    /// absent from the table is treated permissively rather than rejected,
    /// so metadata gaps never block the user. Otherwise a directed rule from
    /// `source` must list `target`, or a bidirectional rule from `target`
    /// must list `source`.
    pub fn is_compatible(&self, source: &str, target: &str) -> bool {
        if self.mode == CompatibilityMode::PermitAll {
            return true;
        }
        if source == target || source == "any" || target == "any" {
            return true;
        }
        // Unknown type names are a metadata gap, not a user error.
        if !self.is_known(source) || !self.is_known(target) {
            tracing::debug!(source, target, "unknown type in compatibility check; permitting");
            return true;
        }
        if let Some(rule) = self.rules.get(source) {
            if rule.targets.iter().any(|t| t == target) {
                return true;
            }
        }
        if let Some(reverse) = self.rules.get(target) {
            if reverse.bidirectional && reverse.targets.iter().any(|t| t == source) {
                return true;
            }
        }
        false
    }

    fn insert_rule(&mut self, rule: CompatRule) {
        // Two documents may both carry a rule for the same source; merge
        // their target lists instead of dropping one.
        match self.rules.get_mut(&rule.source) {
            Some(existing) => {
                for target in rule.targets {
                    if !existing.targets.contains(&target) {
                        existing.targets.push(target);
                    }
                }
                existing.bidirectional |= rule.bidirectional;
            }
            None => {
                self.rules.insert(rule.source.clone(), rule);
            }
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
