//! World-map error type.

use thiserror::Error;

use ld_core::LngLat;

/// Errors produced by `ld-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    /// The next-hop walk between two known locations did not terminate.
    #[error("no route from {from:?} to {to:?}")]
    Unreachable { from: String, to: String },

    /// A* exhausted its open set (or its expansion limit).
    #[error("no flyable path from {from} to {to} after expanding {expanded} nodes")]
    NoSolution { from: LngLat, to: LngLat, expanded: usize },
}

pub type WorldResult<T> = Result<T, WorldError>;
