//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure is local and synchronous: the caller can always recover by
/// re-issuing a corrected request. Nothing here is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request carried missing or malformed fields (e.g. blank name, no price).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation referenced an identifier that does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
