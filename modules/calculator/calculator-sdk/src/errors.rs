//! Public error types for the calculator module.

use thiserror::Error;

/// Errors that can be returned by the `CalculatorClientV1`.
///
/// Operations are in-process and infallible apart from their documented
/// preconditions, so a violated precondition is the only failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// A precondition of the requested operation was violated.
    #[error("{message}")]
    InvalidOperation { message: String },
}

impl CalculatorError {
    /// Create an `InvalidOperation` error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operation_displays_bare_message() {
        let err = CalculatorError::invalid_operation("Cannot divide by zero");
        assert_eq!(err.to_string(), "Cannot divide by zero");
        assert!(err.is_invalid_operation());
    }
}
