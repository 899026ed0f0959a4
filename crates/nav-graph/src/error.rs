//! Graph query error type.

use thiserror::Error;

use nav_core::VertexId;

/// Errors produced by `nav-graph` queries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("vertex {0} not found in graph")]
    UnknownVertex(VertexId),

    #[error("coordinate ({lon}, {lat}) is not finite")]
    InvalidCoordinate { lon: f64, lat: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
