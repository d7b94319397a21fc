//! The static fallback catalog used when the discovery backend is
//! unreachable: a representative set of loaders, transforms, ML steps and
//! control-flow primitives.

use super::node_type::{ConfigField, NodeType, Port};

fn config(key: &str, label: &str, kind: &str) -> ConfigField {
    ConfigField {
        key: key.to_string(),
        label: label.to_string(),
        kind: kind.to_string(),
        default: None,
    }
}

fn node_type(
    id: &str,
    label: &str,
    category: &str,
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    config_fields: Vec<ConfigField>,
) -> NodeType {
    NodeType {
        id: id.to_string(),
        label: label.to_string(),
        category: category.to_string(),
        inputs,
        outputs,
        config_fields,
    }
}

pub(super) fn default_node_types() -> Vec<NodeType> {
    vec![
        node_type(
            "csv_loader",
            "CSV Loader",
            "loader",
            vec![Port::new("path", "string").required()],
            vec![Port::new("data", "dataset").named("Data")],
            vec![config("delimiter", "Delimiter", "text")],
        ),
        node_type(
            "http_source",
            "HTTP Source",
            "loader",
            vec![Port::new("url", "string").required()],
            vec![Port::new("response", "object").named("Response")],
            vec![config("method", "Method", "select")],
        ),
        node_type(
            "filter_rows",
            "Filter Rows",
            "transform",
            vec![
                Port::new("data", "dataset").required(),
                Port::new("predicate", "string"),
            ],
            vec![Port::new("filtered", "dataset").named("Filtered")],
            vec![config("expression", "Expression", "text")],
        ),
        node_type(
            "select_columns",
            "Select Columns",
            "transform",
            vec![Port::new("data", "dataset").required()],
            vec![Port::new("selected", "dataset").named("Selected")],
            vec![config("columns", "Columns", "text")],
        ),
        node_type(
            "json_parse",
            "Parse JSON",
            "transform",
            vec![Port::new("text", "string").required()],
            vec![Port::new("value", "object").named("Value")],
            vec![],
        ),
        node_type(
            "feature_extract",
            "Extract Features",
            "ml",
            vec![Port::new("data", "dataset").required()],
            vec![Port::new("features", "features").named("Features")],
            vec![config("strategy", "Strategy", "select")],
        ),
        node_type(
            "train_model",
            "Train Model",
            "ml",
            vec![
                Port::new("features", "features").required(),
                Port::new("labels", "array"),
            ],
            vec![Port::new("model", "model").named("Model")],
            vec![config("algorithm", "Algorithm", "select")],
        ),
        node_type(
            "predict",
            "Predict",
            "ml",
            vec![
                Port::new("model", "model").required(),
                Port::new("features", "features").required(),
            ],
            vec![Port::new("predictions", "array").named("Predictions")],
            vec![],
        ),
        node_type(
            "manual_trigger",
            "Manual Trigger",
            "control",
            vec![],
            vec![Port::new("fire", "trigger").named("Fire")],
            vec![],
        ),
        node_type(
            "branch",
            "Branch",
            "control",
            vec![
                Port::new("trigger", "trigger").required(),
                Port::new("condition", "boolean").required(),
            ],
            vec![
                Port::new("then", "trigger").named("Then"),
                Port::new("else", "trigger").named("Else"),
            ],
            vec![],
        ),
        node_type(
            "merge",
            "Merge",
            "control",
            vec![
                Port::new("left", "object"),
                Port::new("right", "object"),
            ],
            vec![Port::new("merged", "object").named("Merged")],
            vec![],
        ),
        node_type(
            "export_json",
            "Export JSON",
            "output",
            vec![Port::new("value", "any").required()],
            vec![Port::new("text", "string").named("Text")],
            vec![config("pretty", "Pretty print", "checkbox")],
        ),
    ]
}
