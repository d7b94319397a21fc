//! Common test utilities for building catalogs, registries and graphs.
use flowport::prelude::*;

/// A minimal catalog with the four node types the validator scenarios use:
///
/// - `source_a`: output `out: string`
/// - `sink_b`: input `in: string`
/// - `source_c`: output `n: number`
/// - `sink_d`: input `b: boolean`
#[allow(dead_code)]
pub fn scenario_catalog() -> NodeTypeCatalog {
    let mut catalog = NodeTypeCatalog::new();
    catalog
        .insert(NodeType {
            id: "source_a".to_string(),
            label: "Source A".to_string(),
            category: "test".to_string(),
            inputs: vec![],
            outputs: vec![Port::new("out", "string")],
            config_fields: vec![],
        })
        .unwrap();
    catalog
        .insert(NodeType {
            id: "sink_b".to_string(),
            label: "Sink B".to_string(),
            category: "test".to_string(),
            inputs: vec![Port::new("in", "string").required()],
            outputs: vec![],
            config_fields: vec![],
        })
        .unwrap();
    catalog
        .insert(NodeType {
            id: "source_c".to_string(),
            label: "Source C".to_string(),
            category: "test".to_string(),
            inputs: vec![],
            outputs: vec![Port::new("n", "number")],
            config_fields: vec![],
        })
        .unwrap();
    catalog
        .insert(NodeType {
            id: "sink_d".to_string(),
            label: "Sink D".to_string(),
            category: "test".to_string(),
            inputs: vec![Port::new("b", "boolean")],
            outputs: vec![],
            config_fields: vec![],
        })
        .unwrap();
    catalog
}

/// A node type with both an input and an output of type `string`, used for
/// self-loop and duplicate tests.
#[allow(dead_code)]
pub fn passthrough_type() -> NodeType {
    NodeType {
        id: "passthrough".to_string(),
        label: "Passthrough".to_string(),
        category: "test".to_string(),
        inputs: vec![Port::new("in", "string")],
        outputs: vec![Port::new("out", "string")],
        config_fields: vec![],
    }
}

/// Places one `source_a` and one `sink_b` node, returning their ids.
#[allow(dead_code)]
pub fn graph_with_a_and_b() -> (WorkflowGraph, NodeId, NodeId) {
    let mut graph = WorkflowGraph::new("test");
    let a = graph.add_node("source_a", Position::new(0.0, 0.0));
    let b = graph.add_node("sink_b", Position::new(200.0, 0.0));
    (graph, a, b)
}

/// A compatibility service that is always down.
#[allow(dead_code)]
pub struct DownService;

impl CompatibilityCheck for DownService {
    fn check(&self, _source: &str, _target: &str) -> std::result::Result<bool, ServiceUnavailable> {
        Err(ServiceUnavailable)
    }
}

/// A compatibility service that rejects every pairing.
#[allow(dead_code)]
pub struct RefusingService;

impl CompatibilityCheck for RefusingService {
    fn check(&self, _source: &str, _target: &str) -> std::result::Result<bool, ServiceUnavailable> {
        Ok(false)
    }
}
