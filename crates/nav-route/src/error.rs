//! Routing and direction error types.

use thiserror::Error;

use nav_core::VertexId;
use nav_graph::GraphError;

/// Errors produced by path finding and direction generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: VertexId, to: VertexId },

    #[error("search budget exhausted after {expansions} expansions")]
    SearchBudgetExceeded { expansions: usize },

    #[error("route must contain at least 2 vertices, got {len}")]
    InvalidRoute { len: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;

/// A maneuver string that does not follow
/// `"<Verb> on <Way> and continue for <d> miles."`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ManeuverParseError {
    #[error("malformed maneuver {0:?}")]
    Grammar(String),

    #[error("unknown maneuver verb {0:?}")]
    UnknownVerb(String),

    #[error("invalid maneuver distance {0:?}")]
    Distance(String),
}
