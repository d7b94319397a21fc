//! Tests for the connection validator and the drag-session state machine.
mod common;
use flowport::prelude::*;

#[test]
fn test_matching_string_ports_connect() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let (mut graph, a, b) = common::graph_with_a_and_b();
    let connection = graph
        .connect(&validator, &ConnectionAttempt::new(a, "out", b, "in"))
        .unwrap();
    assert_eq!(connection.from, Endpoint::new(a, "out"));
    assert_eq!(connection.to, Endpoint::new(b, "in"));
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_number_to_boolean_is_rejected_with_both_types_named() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let mut graph = WorkflowGraph::new("test");
    let c = graph.add_node("source_c", Position::new(0.0, 0.0));
    let d = graph.add_node("sink_d", Position::new(200.0, 0.0));

    let err = graph
        .connect(&validator, &ConnectionAttempt::new(c, "n", d, "b"))
        .unwrap_err();
    assert_eq!(
        err,
        ConnectError::TypeIncompatible {
            from_type: "number".to_string(),
            to_type: "boolean".to_string(),
        }
    );
    assert!(graph.connections().is_empty(), "rejected edges never appear");
}

#[test]
fn test_self_loop_is_rejected_regardless_of_types() {
    let registry = TypeRegistry::with_defaults();
    let mut catalog = NodeTypeCatalog::new();
    catalog.insert(common::passthrough_type()).unwrap();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let mut graph = WorkflowGraph::new("test");
    let node = graph.add_node("passthrough", Position::new(0.0, 0.0));

    let err = graph
        .connect(&validator, &ConnectionAttempt::new(node, "out", node, "in"))
        .unwrap_err();
    assert!(matches!(err, ConnectError::SelfLoop { .. }));
}

#[test]
fn test_missing_port_on_known_type_is_rejected() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let (mut graph, a, b) = common::graph_with_a_and_b();
    let err = graph
        .connect(&validator, &ConnectionAttempt::new(a, "bogus", b, "in"))
        .unwrap_err();
    assert_eq!(
        err,
        ConnectError::PortNotFound {
            node_type: "source_a".to_string(),
            port: "bogus".to_string(),
            direction: PortDirection::Output,
        }
    );
}

#[test]
fn test_unknown_node_type_connects_permissively() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let mut graph = WorkflowGraph::new("test");
    let unknown = graph.add_node("not_in_catalog", Position::new(0.0, 0.0));
    let b = graph.add_node("sink_b", Position::new(200.0, 0.0));

    // No declared ports means no grounds for rejection.
    graph
        .connect(&validator, &ConnectionAttempt::new(unknown, "anything", b, "in"))
        .unwrap();
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_unavailable_service_degrades_to_accept() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let service = common::DownService;
    let validator = ConnectionValidator::new(&registry, &catalog).with_service(&service);

    let mut graph = WorkflowGraph::new("test");
    let c = graph.add_node("source_c", Position::new(0.0, 0.0));
    let d = graph.add_node("sink_d", Position::new(200.0, 0.0));

    // number -> boolean would fail the rule table, but availability wins.
    graph
        .connect(&validator, &ConnectionAttempt::new(c, "n", d, "b"))
        .unwrap();
}

#[test]
fn test_refusing_service_overrides_the_rule_table() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let service = common::RefusingService;
    let validator = ConnectionValidator::new(&registry, &catalog).with_service(&service);

    let (mut graph, a, b) = common::graph_with_a_and_b();
    let err = graph
        .connect(&validator, &ConnectionAttempt::new(a, "out", b, "in"))
        .unwrap_err();
    assert!(matches!(err, ConnectError::TypeIncompatible { .. }));
}

#[test]
fn test_drag_session_happy_path() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (mut graph, a, b) = common::graph_with_a_and_b();

    let mut session = DragSession::new();
    assert_eq!(*session.state(), DragState::Idle);

    session.press(a, "out", Position::new(10.0, 10.0));
    session.update_pointer(Position::new(150.0, 30.0));
    assert!(matches!(session.state(), DragState::Drawing { .. }));

    let ReleaseOutcome::Pending(ticket) = session.release_over(&validator, &graph, b, "in") else {
        panic!("structurally sound attempt should be pending");
    };
    assert!(matches!(session.state(), DragState::Validating { .. }));

    let resolution = session.resolve(ticket, Ok(true), &mut graph);
    assert!(matches!(resolution, Resolution::Accepted(_)));
    assert_eq!(*session.state(), DragState::Idle);
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_drag_cancel_discards_the_ghost_edge() {
    let (_, a, _) = common::graph_with_a_and_b();
    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    session.cancel();
    assert_eq!(*session.state(), DragState::Idle);
    assert_eq!(session.pending_count(), 0);
}

#[test]
fn test_release_without_drag_is_ignored() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (graph, _, b) = common::graph_with_a_and_b();

    let mut session = DragSession::new();
    let outcome = session.release_over(&validator, &graph, b, "in");
    assert_eq!(outcome, ReleaseOutcome::Ignored);
}

#[test]
fn test_structural_rejection_returns_to_idle() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (graph, a, _) = common::graph_with_a_and_b();

    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    let outcome = session.release_over(&validator, &graph, a, "in");
    assert!(matches!(
        outcome,
        ReleaseOutcome::Rejected(ConnectError::SelfLoop { .. })
    ));
    assert_eq!(*session.state(), DragState::Idle);
}

#[test]
fn test_stale_verdict_does_not_apply_twice() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (mut graph, a, b) = common::graph_with_a_and_b();

    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(ticket) = session.release_over(&validator, &graph, b, "in") else {
        panic!("expected pending");
    };

    assert!(matches!(
        session.resolve(ticket, Ok(true), &mut graph),
        Resolution::Accepted(_)
    ));
    assert_eq!(
        session.resolve(ticket, Ok(true), &mut graph),
        Resolution::Stale
    );
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_verdict_for_deleted_endpoint_is_discarded() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (mut graph, a, b) = common::graph_with_a_and_b();

    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(ticket) = session.release_over(&validator, &graph, b, "in") else {
        panic!("expected pending");
    };

    // The source node disappears while the verdict is in flight.
    graph.remove_node(a);
    assert_eq!(
        session.resolve(ticket, Ok(true), &mut graph),
        Resolution::Discarded
    );
    assert!(graph.connections().is_empty());
}

#[test]
fn test_old_verdict_applies_to_its_own_attempt_not_the_new_drag() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let mut graph = WorkflowGraph::new("test");
    let a = graph.add_node("source_a", Position::new(0.0, 0.0));
    let b1 = graph.add_node("sink_b", Position::new(200.0, 0.0));
    let b2 = graph.add_node("sink_b", Position::new(200.0, 100.0));

    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(first) = session.release_over(&validator, &graph, b1, "in") else {
        panic!("expected pending");
    };

    // A second gesture begins before the first verdict lands.
    session.press(a, "out", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(second) = session.release_over(&validator, &graph, b2, "in") else {
        panic!("expected pending");
    };
    assert_ne!(first, second);

    // The late verdict lands on its own attempt only.
    assert!(matches!(
        session.resolve(first, Ok(true), &mut graph),
        Resolution::Accepted(_)
    ));
    assert_eq!(graph.connections().len(), 1);
    assert_eq!(graph.connections()[0].to, Endpoint::new(b1, "in"));

    assert!(matches!(
        session.resolve(second, Ok(true), &mut graph),
        Resolution::Accepted(_)
    ));
    assert_eq!(graph.connections().len(), 2);
}

#[test]
fn test_rejected_verdict_names_the_resolved_types() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let mut graph = WorkflowGraph::new("test");
    let c = graph.add_node("source_c", Position::new(0.0, 0.0));
    let d = graph.add_node("sink_d", Position::new(200.0, 0.0));

    let mut session = DragSession::new();
    session.press(c, "n", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(ticket) = session.release_over(&validator, &graph, d, "b") else {
        panic!("expected pending");
    };

    let resolution = session.resolve_with(&validator, ticket, &mut graph);
    assert_eq!(
        resolution,
        Resolution::Rejected(ConnectError::TypeIncompatible {
            from_type: "number".to_string(),
            to_type: "boolean".to_string(),
        })
    );
    assert!(graph.connections().is_empty());
}

#[test]
fn test_unavailable_verdict_resolves_permissively() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (mut graph, a, b) = common::graph_with_a_and_b();

    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(ticket) = session.release_over(&validator, &graph, b, "in") else {
        panic!("expected pending");
    };

    let resolution = session.resolve(ticket, Err(ServiceUnavailable), &mut graph);
    assert!(matches!(resolution, Resolution::Accepted(_)));
    assert_eq!(graph.connections().len(), 1);
}

#[test]
fn test_duplicate_resolution_collapses_onto_existing_connection() {
    let registry = TypeRegistry::with_defaults();
    let catalog = common::scenario_catalog();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let (mut graph, a, b) = common::graph_with_a_and_b();

    // The connection already exists before the verdict lands.
    let existing = graph
        .connect(&validator, &ConnectionAttempt::new(a, "out", b, "in"))
        .unwrap()
        .id
        .clone();

    let mut session = DragSession::new();
    session.press(a, "out", Position::new(0.0, 0.0));
    let ReleaseOutcome::Pending(ticket) = session.release_over(&validator, &graph, b, "in") else {
        panic!("expected pending");
    };

    assert_eq!(
        session.resolve(ticket, Ok(true), &mut graph),
        Resolution::Accepted(existing)
    );
    assert_eq!(graph.connections().len(), 1);
}
