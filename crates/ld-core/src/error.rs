//! Error type for geometry construction and collaborator input.
//!
//! Every other `ld-*` crate has its own error enum and result alias.

use thiserror::Error;

/// Errors raised while preparing the inputs the planner depends on.
///
/// `Parse` covers malformed geometry; everything a collaborator fails to
/// deliver is `UpstreamUnavailable`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An external collaborator could not supply required data (no-fly
    /// zones, landmarks, shops, orders).  Fatal before any movement begins.
    #[error("{what} unavailable: {reason}")]
    UpstreamUnavailable { what: &'static str, reason: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::UpstreamUnavailable`].
    pub fn upstream(what: &'static str, reason: impl ToString) -> Self {
        Self::UpstreamUnavailable { what, reason: reason.to_string() }
    }
}

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;
