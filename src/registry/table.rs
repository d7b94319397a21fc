use serde::Deserialize;

/// Display metadata for a single port type.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// A directed compatibility rule: values of `source` type may flow into
/// ports expecting any of `targets`. When `bidirectional` is set the rule
/// also applies in reverse.
#[derive(Debug, Clone, Deserialize)]
pub struct CompatRule {
    pub source: String,
    #[serde(alias = "allowedTargets")]
    pub targets: Vec<String>,
    #[serde(default)]
    pub bidirectional: bool,
}

/// The JSON type-table document shape served by the catalog backend.
#[derive(Debug, Deserialize)]
pub(super) struct TypeTableDocument {
    #[serde(default)]
    pub types: Vec<TypeInfo>,
    #[serde(default, alias = "compatibilityRules")]
    pub rules: Vec<CompatRule>,
}

fn info(name: &str, color: &str, icon: &str) -> TypeInfo {
    TypeInfo {
        name: name.to_string(),
        color: color.to_string(),
        icon: icon.to_string(),
    }
}

fn rule(source: &str, targets: &[&str], bidirectional: bool) -> CompatRule {
    CompatRule {
        source: source.to_string(),
        targets: targets.iter().map(|t| t.to_string()).collect(),
        bidirectional,
    }
}

/// The built-in type table: the primitive JSON-ish types plus the domain
/// types the pipeline nodes exchange.
pub(super) fn default_types() -> Vec<TypeInfo> {
    vec![
        info("any", "#9e9e9e", "asterisk"),
        info("string", "#4caf50", "text"),
        info("number", "#2196f3", "hash"),
        info("boolean", "#ff9800", "toggle"),
        info("object", "#9c27b0", "braces"),
        info("array", "#00bcd4", "brackets"),
        info("trigger", "#f44336", "bolt"),
        info("dataset", "#3f51b5", "table"),
        info("features", "#009688", "columns"),
        info("model", "#795548", "brain"),
    ]
}

/// The built-in compatibility rules. Same-type and `any` pairings are
/// handled by the registry itself and never appear here.
pub(super) fn default_rules() -> Vec<CompatRule> {
    vec![
        // Scalars render into strings for display-style inputs.
        rule("number", &["string"], false),
        rule("boolean", &["string"], false),
        // Structured data is interchangeable between object and array views.
        rule("array", &["object"], true),
        // The ML pipeline chain: dataset -> features -> model.
        rule("dataset", &["features", "array", "object"], false),
        rule("features", &["model", "dataset"], false),
        rule("model", &["object"], false),
    ]
}
