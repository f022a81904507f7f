//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: the caller reports it and the session goes on
/// with the inventory untouched. Storage failures live in the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// User input failed validation (bad quantity, kind selector or name).
    #[error("{0}")]
    Validation(String),

    /// No item with the given name exists.
    #[error("item '{0}' not found in inventory")]
    NotFound(String),

    /// A removal asked for more than the item holds.
    #[error("insufficient quantity of '{name}': only {available} available, {requested} requested")]
    InsufficientQuantity {
        name: String,
        available: u32,
        requested: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn insufficient(name: impl Into<String>, available: u32, requested: u32) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            available,
            requested,
        }
    }

    /// True for errors caused by malformed user input rather than inventory state.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
