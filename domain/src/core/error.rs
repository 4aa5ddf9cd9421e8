//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// None of these are fatal to a run. Callers turn them into the matching
/// validation outcome or skip the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Expected an integer, got '{0}'")]
    MalformedInteger(String),

    #[error("Unknown exam type: {0}")]
    UnknownExamType(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_integer_display() {
        let error = DomainError::MalformedInteger("abc".to_string());
        assert_eq!(error.to_string(), "Expected an integer, got 'abc'");
    }

    #[test]
    fn test_unknown_exam_type_display() {
        let error = DomainError::UnknownExamType("ORAL".into());
        assert_eq!(error.to_string(), "Unknown exam type: ORAL");
    }
}
