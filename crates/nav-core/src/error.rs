//! Workspace-wide error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `RouteError`, …)
//! and the service facade wraps them.  `NavError` covers the concerns that
//! live in this crate: configuration validation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
