//! `CalculatorClientV1` trait definition.
//!
//! In-process consumers obtain an implementation from the calculator module:
//! ```ignore
//! let client = module.client();
//! let quotient = client.divide(Number::Int(10), Number::Int(4)).await?;
//! ```

use async_trait::async_trait;

use crate::errors::CalculatorError;
use crate::models::{CalculationRecord, Number};

/// Public API trait for the calculator module.
///
/// Every successful operation (except the `0!` / `1!` base cases) appends a
/// record to the calculator's history.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers.
    async fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Subtract `b` from `a`.
    async fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Multiply two numbers.
    async fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Divide `a` by `b`. Fails when `b` is zero.
    async fn divide(&self, a: Number, b: Number) -> Result<f64, CalculatorError>;

    /// Raise `base` to `exponent`.
    async fn power(&self, base: Number, exponent: Number) -> Result<Number, CalculatorError>;

    /// Square root. Fails for negative input.
    async fn square_root(&self, number: Number) -> Result<f64, CalculatorError>;

    /// Factorial of a non-negative integer.
    async fn factorial(&self, n: i64) -> Result<u128, CalculatorError>;

    /// Arithmetic mean. Fails for an empty sequence.
    async fn average(&self, numbers: Vec<Number>) -> Result<f64, CalculatorError>;

    /// Snapshot of the history, oldest first.
    async fn history(&self) -> Result<Vec<CalculationRecord>, CalculatorError>;

    /// Drop every history record.
    async fn clear_history(&self) -> Result<(), CalculatorError>;
}
