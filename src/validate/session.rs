//! The per-gesture drag state machine.
//!
//! A connection gesture moves `Idle -> Drawing -> Validating -> Idle`.
//! `Drawing` is the only interruptible state: releasing in empty space or
//! cancelling discards the ghost edge immediately. `Validating` covers the
//! window where a compatibility verdict is still in flight; each attempt
//! carries a monotonically increasing id, and a verdict arriving for an
//! attempt whose endpoints have since been deleted, or that the session no
//! longer tracks, is discarded rather than applied to stale state.

use super::{ConnectionAttempt, ConnectionValidator, ResolvedAttempt};
use crate::error::{ConnectError, ServiceUnavailable};
use crate::graph::{Connection, NodeId, Position, WorkflowGraph};
use ahash::AHashMap;

/// Ticket identifying one in-flight validation attempt.
pub type AttemptId = u64;

/// Where the current gesture stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A port has been pressed; the ghost edge follows the pointer.
    Drawing {
        from_node: NodeId,
        from_port: String,
        pointer: Position,
    },
    /// Released over an input port; the compatibility verdict is in flight.
    Validating { attempt_id: AttemptId },
}

/// What releasing the pointer over an input port produced.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// No drag was in progress; the release is meaningless.
    Ignored,
    /// Structural rejection (self-loop or unresolvable port); back to idle.
    Rejected(ConnectError),
    /// Structure is sound; awaiting the compatibility verdict.
    Pending(AttemptId),
}

/// The final fate of one validation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The connection now exists in the graph (or already did; duplicates
    /// collapse silently onto the existing connection).
    Accepted(String),
    Rejected(ConnectError),
    /// The session no longer tracks this attempt id.
    Stale,
    /// The attempt's endpoints were deleted while the verdict was in flight.
    Discarded,
}

/// Tracks one user's connection gesture and its in-flight validations.
///
/// Verdicts may resolve out of order and long after newer gestures began;
/// each applies only to its own recorded attempt.
#[derive(Debug)]
pub struct DragSession {
    state: DragState,
    next_attempt: AttemptId,
    pending: AHashMap<AttemptId, ResolvedAttempt>,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            next_attempt: 1,
            pending: AHashMap::new(),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Begins a gesture from an output port. Starting a new drag while a
    /// previous verdict is still in flight is allowed; the old attempt stays
    /// pending and resolves independently.
    pub fn press(&mut self, from_node: NodeId, from_port: &str, pointer: Position) {
        self.state = DragState::Drawing {
            from_node,
            from_port: from_port.to_string(),
            pointer,
        };
    }

    /// Moves the ghost edge. Ignored outside `Drawing`.
    pub fn update_pointer(&mut self, position: Position) {
        if let DragState::Drawing { pointer, .. } = &mut self.state {
            *pointer = position;
        }
    }

    /// Abandons the gesture (release in empty space or escape). The ghost
    /// edge is gone; any in-flight verdicts still resolve on their own.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Releases over an input port. Structural checks run immediately; a
    /// structurally sound attempt transitions to `Validating` and returns a
    /// ticket to resolve once the compatibility verdict arrives.
    pub fn release_over(
        &mut self,
        validator: &ConnectionValidator<'_>,
        graph: &WorkflowGraph,
        to_node: NodeId,
        to_port: &str,
    ) -> ReleaseOutcome {
        let DragState::Drawing {
            from_node,
            from_port,
            ..
        } = &self.state
        else {
            return ReleaseOutcome::Ignored;
        };
        let attempt = ConnectionAttempt::new(*from_node, from_port, to_node, to_port);
        match validator.resolve_types(graph, &attempt) {
            Ok(resolved) => {
                let attempt_id = self.next_attempt;
                self.next_attempt += 1;
                self.pending.insert(attempt_id, resolved);
                self.state = DragState::Validating { attempt_id };
                ReleaseOutcome::Pending(attempt_id)
            }
            Err(e) => {
                self.state = DragState::Idle;
                ReleaseOutcome::Rejected(e)
            }
        }
    }

    /// Applies a compatibility verdict to its original attempt.
    ///
    /// Unknown tickets return `Stale`; attempts whose endpoints no longer
    /// exist return `Discarded`. Neither mutates the graph. An unavailable
    /// service accepts permissively (logged). The session's visible state
    /// returns to `Idle` only when the verdict belongs to the attempt
    /// currently shown as validating.
    pub fn resolve(
        &mut self,
        attempt_id: AttemptId,
        verdict: Result<bool, ServiceUnavailable>,
        graph: &mut WorkflowGraph,
    ) -> Resolution {
        let Some(resolved) = self.pending.remove(&attempt_id) else {
            tracing::debug!(attempt_id, "verdict for unknown attempt; ignoring");
            return Resolution::Stale;
        };
        if self.state == (DragState::Validating { attempt_id }) {
            self.state = DragState::Idle;
        }
        let attempt = &resolved.attempt;
        if graph.node(attempt.from_node).is_none() || graph.node(attempt.to_node).is_none() {
            tracing::debug!(
                attempt_id,
                "attempt endpoints deleted while verdict was in flight; discarding"
            );
            return Resolution::Discarded;
        }
        let accepted = match verdict {
            Ok(compatible) => compatible,
            Err(ServiceUnavailable) => {
                tracing::warn!(
                    from_type = %resolved.from_type,
                    to_type = %resolved.to_type,
                    "compatibility service unavailable; permitting connection"
                );
                true
            }
        };
        if !accepted {
            return Resolution::Rejected(ConnectError::TypeIncompatible {
                from_type: resolved.from_type,
                to_type: resolved.to_type,
            });
        }
        let (from, to) = (attempt.from_endpoint(), attempt.to_endpoint());
        if graph.has_connection(&from, &to) {
            return Resolution::Accepted(Connection::derive_id(&from, &to));
        }
        let connection = Connection::new(from, to);
        let id = connection.id.clone();
        graph.insert_validated(connection);
        Resolution::Accepted(id)
    }

    /// Convenience for callers without a deferred service round-trip:
    /// computes the verdict synchronously through the validator and applies
    /// it at once.
    pub fn resolve_with(
        &mut self,
        validator: &ConnectionValidator<'_>,
        attempt_id: AttemptId,
        graph: &mut WorkflowGraph,
    ) -> Resolution {
        let verdict = match self.pending.get(&attempt_id) {
            Some(resolved) => validator.compatibility_verdict(&resolved.from_type, &resolved.to_type),
            None => return Resolution::Stale,
        };
        self.resolve(attempt_id, verdict, graph)
    }

    /// Number of verdicts still in flight.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
