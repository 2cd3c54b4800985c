//! Billing error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the billing engine.
pub type BillingResult<T> = Result<T, BillingError>;

/// Billing-level error.
///
/// Every variant is a deterministic data error: retrying with the same input
/// yields the same failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// A play's genre tag is not one of the recognized genres.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    /// A performance references a play that is missing from the catalog.
    #[error("unresolved play: {0}")]
    UnresolvedPlay(PlayId),

    /// A value failed validation (e.g. malformed rate table or catalog).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An arithmetic or structural invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl BillingError {
    pub fn unknown_genre(tag: impl Into<String>) -> Self {
        Self::UnknownGenre(tag.into())
    }

    pub fn unresolved_play(id: PlayId) -> Self {
        Self::UnresolvedPlay(id)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
