//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a seed record with an empty title)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (malformed JSON shape, unknown enum variant)
    #[error("Parse error: {0}")]
    Parse(String),

    /// No play mode is registered under this id
    #[error("Unknown play mode: {0}")]
    UnknownPlayMode(String),
}

impl DomainError {
    /// Creates a validation error for record invariants.
    ///
    /// Use this when a record violates the battle schema:
    /// - Required fields are empty or missing
    /// - Power values are not finite numbers
    /// - A successful battle is missing one of its sides
    ///
    /// # Example
    /// ```ignore
    /// if battle.id.trim().is_empty() {
    ///     return Err(DomainError::validation("battle id cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type or JSON-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn unknown_play_mode(id: impl Into<String>) -> Self {
        Self::UnknownPlayMode(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("title cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: title cannot be empty");
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown variant `done`");
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("done"));
    }

    #[test]
    fn test_unknown_play_mode_error() {
        let err = DomainError::unknown_play_mode("mystery");
        assert_eq!(err.to_string(), "Unknown play mode: mystery");
    }
}
