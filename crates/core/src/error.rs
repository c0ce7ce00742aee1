//! Errors raised while building catalog and checkout values.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Rejection of a value the domain cannot accept.
///
/// Cart operations have their own error type; this one covers products,
/// identifiers and checkout details.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input that is missing or malformed (blank SKU, short address, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Input that is well formed but impossible (negative stock or price).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_reason() {
        assert_eq!(
            DomainError::validation("city is required").to_string(),
            "validation failed: city is required"
        );
        assert_eq!(
            DomainError::invariant("stock cannot go negative").to_string(),
            "invariant violated: stock cannot go negative"
        );
    }
}
