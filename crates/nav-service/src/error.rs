use thiserror::Error;

use nav_core::NavError;
use nav_graph::GraphError;
use nav_route::RouteError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("invalid service configuration: {0}")]
    Config(#[from] NavError),

    #[error("graph query failed: {0}")]
    Graph(#[from] GraphError),

    #[error("routing failed: {0}")]
    Route(#[from] RouteError),
}

impl ServiceError {
    /// `true` when the endpoints lie in different components.
    pub fn is_no_route(&self) -> bool {
        matches!(self, ServiceError::Route(RouteError::NoRoute { .. }))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
