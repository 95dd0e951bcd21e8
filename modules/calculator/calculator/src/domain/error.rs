//! Domain error types for the calculator module.

use calculator_sdk::CalculatorError;
use thiserror::Error;

/// Precondition violations of calculator operations.
///
/// The display text is the human-readable message returned to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,

    #[error("Factorial is not defined for negative numbers")]
    NegativeFactorial,

    /// `n!` does not fit into `u128` (`n > 34`).
    #[error("Factorial of {n} exceeds the supported range")]
    FactorialOverflow { n: u64 },

    #[error("Cannot calculate average of empty list")]
    EmptyAverage,
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        CalculatorError::invalid_operation(e.to_string())
    }
}
