//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Cart validation failures are *not* errors: they are reported as messages
/// inside a validation result. This type is for faults the caller has to deal
/// with, such as a reference that resolves to nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A code or identifier was malformed (e.g. blank).
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// A reference (store, pickup location, ...) resolved to no entity.
    #[error("no such entity: {0}")]
    NoSuchEntity(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_code(msg: impl Into<String>) -> Self {
        Self::InvalidCode(msg.into())
    }

    pub fn no_such_entity(msg: impl Into<String>) -> Self {
        Self::NoSuchEntity(msg.into())
    }

    /// True for faults caused by dangling references to reference data.
    pub fn is_no_such_entity(&self) -> bool {
        matches!(self, Self::NoSuchEntity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_entity_renders_its_subject() {
        let err = DomainError::no_such_entity("pickup location STORE1");
        assert_eq!(err.to_string(), "no such entity: pickup location STORE1");
        assert!(err.is_no_such_entity());
        assert!(!DomainError::invariant("lock poisoned").is_no_such_entity());
    }
}
