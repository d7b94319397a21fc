//! The connection validator: decides whether a user-attempted edge between
//! two ports may materialize.
//!
//! The validator borrows its registry and catalog from the call site; there
//! is no ambient global instance. The optional [`CompatibilityCheck`] seam
//! stands in for the backend's type-compatibility endpoint; when it is
//! unreachable the validator degrades to a permissive accept, logged so the
//! fallback is distinguishable from a genuine incompatibility.

use crate::catalog::NodeTypeCatalog;
use crate::error::{ConnectError, PortDirection, ServiceUnavailable};
use crate::graph::{Endpoint, NodeId, WorkflowGraph};
use crate::registry::TypeRegistry;

mod session;

pub use session::{AttemptId, DragSession, DragState, ReleaseOutcome, Resolution};

/// A candidate edge as the user drew it: source node + output port, target
/// node + input port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionAttempt {
    pub from_node: NodeId,
    pub from_port: String,
    pub to_node: NodeId,
    pub to_port: String,
}

impl ConnectionAttempt {
    pub fn new(from_node: NodeId, from_port: &str, to_node: NodeId, to_port: &str) -> Self {
        Self {
            from_node,
            from_port: from_port.to_string(),
            to_node,
            to_port: to_port.to_string(),
        }
    }

    pub fn from_endpoint(&self) -> Endpoint {
        Endpoint::new(self.from_node, &self.from_port)
    }

    pub fn to_endpoint(&self) -> Endpoint {
        Endpoint::new(self.to_node, &self.to_port)
    }
}

/// The seam for an external type-compatibility service. [`TypeRegistry`]
/// implements it infallibly, so the local rule table can stand in wherever a
/// remote service is expected.
pub trait CompatibilityCheck {
    fn check(&self, source_type: &str, target_type: &str) -> Result<bool, ServiceUnavailable>;
}

impl CompatibilityCheck for TypeRegistry {
    fn check(&self, source_type: &str, target_type: &str) -> Result<bool, ServiceUnavailable> {
        Ok(self.is_compatible(source_type, target_type))
    }
}

/// The resolved port types of an attempt that passed the structural checks
/// (self-loop and port resolution) and still awaits its compatibility
/// verdict.
#[derive(Debug, Clone)]
pub struct ResolvedAttempt {
    pub attempt: ConnectionAttempt,
    pub from_type: String,
    pub to_type: String,
}

/// Validates connection attempts against a type registry and node type
/// catalog, both injected by reference.
pub struct ConnectionValidator<'a> {
    registry: &'a TypeRegistry,
    catalog: &'a NodeTypeCatalog,
    service: Option<&'a dyn CompatibilityCheck>,
}

impl<'a> ConnectionValidator<'a> {
    pub fn new(registry: &'a TypeRegistry, catalog: &'a NodeTypeCatalog) -> Self {
        Self {
            registry,
            catalog,
            service: None,
        }
    }

    /// Routes the compatibility decision through an external service instead
    /// of the local rule table.
    pub fn with_service(mut self, service: &'a dyn CompatibilityCheck) -> Self {
        self.service = Some(service);
        self
    }

    /// Runs the full synchronous decision: self-loop, port resolution, type
    /// resolution, compatibility, duplicate detection. `Err(Duplicate)`
    /// means the edge already exists and callers should no-op.
    pub fn check(
        &self,
        graph: &WorkflowGraph,
        attempt: &ConnectionAttempt,
    ) -> Result<(), ConnectError> {
        let resolved = self.resolve_types(graph, attempt)?;
        self.check_compatibility(&resolved.from_type, &resolved.to_type)?;
        if graph.has_connection(&attempt.from_endpoint(), &attempt.to_endpoint()) {
            return Err(ConnectError::Duplicate);
        }
        Ok(())
    }

    /// Structural validation only: rejects self-loops and unresolvable ports,
    /// and resolves both port types (defaulting to `any`). A node type the
    /// catalog does not know has no declared ports and passes through
    /// permissively with `any` types.
    pub fn resolve_types(
        &self,
        graph: &WorkflowGraph,
        attempt: &ConnectionAttempt,
    ) -> Result<ResolvedAttempt, ConnectError> {
        if attempt.from_node == attempt.to_node {
            return Err(ConnectError::SelfLoop {
                node_id: attempt.from_node.0,
            });
        }
        let from_type = self.port_type(
            graph,
            attempt.from_node,
            &attempt.from_port,
            PortDirection::Output,
        )?;
        let to_type = self.port_type(
            graph,
            attempt.to_node,
            &attempt.to_port,
            PortDirection::Input,
        )?;
        Ok(ResolvedAttempt {
            attempt: attempt.clone(),
            from_type,
            to_type,
        })
    }

    /// The raw verdict from the service (if any) or the local rule table.
    pub fn compatibility_verdict(
        &self,
        from_type: &str,
        to_type: &str,
    ) -> Result<bool, ServiceUnavailable> {
        match self.service {
            Some(service) => service.check(from_type, to_type),
            None => self.registry.check(from_type, to_type),
        }
    }

    /// Applies the compatibility verdict from the service (if any) or the
    /// local rule table. An unreachable service accepts permissively.
    pub fn check_compatibility(&self, from_type: &str, to_type: &str) -> Result<(), ConnectError> {
        match self.compatibility_verdict(from_type, to_type) {
            Ok(true) => Ok(()),
            Ok(false) => Err(ConnectError::TypeIncompatible {
                from_type: from_type.to_string(),
                to_type: to_type.to_string(),
            }),
            Err(ServiceUnavailable) => {
                tracing::warn!(
                    from_type,
                    to_type,
                    "compatibility service unavailable; permitting connection"
                );
                Ok(())
            }
        }
    }

    fn port_type(
        &self,
        graph: &WorkflowGraph,
        node_id: NodeId,
        port: &str,
        direction: PortDirection,
    ) -> Result<String, ConnectError> {
        let Some(node) = graph.node(node_id) else {
            // The node vanished between gesture and check; a catalog/data
            // inconsistency, reported like a missing port.
            return Err(ConnectError::PortNotFound {
                node_type: format!("(missing node {})", node_id),
                port: port.to_string(),
                direction,
            });
        };
        if !self.catalog.contains(&node.node_type) {
            tracing::debug!(
                node_type = %node.node_type,
                port,
                "unknown node type has no declared ports; treating port as any"
            );
            return Ok("any".to_string());
        }
        let ports = self.catalog.ports(&node.node_type);
        let resolved = match direction {
            PortDirection::Output => ports.output(port),
            PortDirection::Input => ports.input(port),
        };
        match resolved {
            Some(p) => Ok(p.ty.clone()),
            None => Err(ConnectError::PortNotFound {
                node_type: node.node_type.clone(),
                port: port.to_string(),
                direction,
            }),
        }
    }
}
