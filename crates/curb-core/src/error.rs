//! Shared error type.
//!
//! `curb-direction` returns `CurbError` directly.  `curb-network` keeps its
//! own `NetworkError` for storage and import failures.

use thiserror::Error;

use crate::{GeoPoint, NodeId};

/// Caller contract violations surfaced by the resolver and its helpers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurbError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("invalid coordinate {0}")]
    InvalidCoordinate(GeoPoint),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for the `curb-*` crates.
pub type CurbResult<T> = Result<T, CurbError>;
