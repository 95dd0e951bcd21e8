//! Domain service for calculator
//!
//! Shares one `Calculator` between concurrent callers. Every operation,
//! including history reads and clears, runs under the same lock so records
//! are never lost or observed half-written.

use calculator_sdk::{CalculationRecord, Number};
use parking_lot::Mutex;
use tracing::debug;

use super::engine::Calculator;
use super::error::DomainError;

/// Domain service that performs calculator operations.
///
/// Constructed explicitly and shared through `Arc` by the REST layer and the
/// local client.
#[derive(Debug, Default)]
pub struct Service {
    calculator: Mutex<Calculator>,
}

impl Service {
    /// Create a new service with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, a: Number, b: Number) -> Number {
        let result = self.calculator.lock().add(a, b);
        debug!(%a, %b, %result, "performed addition");
        result
    }

    pub fn subtract(&self, a: Number, b: Number) -> Number {
        let result = self.calculator.lock().subtract(a, b);
        debug!(%a, %b, %result, "performed subtraction");
        result
    }

    pub fn multiply(&self, a: Number, b: Number) -> Number {
        let result = self.calculator.lock().multiply(a, b);
        debug!(%a, %b, %result, "performed multiplication");
        result
    }

    /// # Errors
    /// Returns `DomainError::DivisionByZero` when `b` is zero.
    pub fn divide(&self, a: Number, b: Number) -> Result<f64, DomainError> {
        let result = self.calculator.lock().divide(a, b);
        match &result {
            Ok(quotient) => debug!(%a, %b, quotient, "performed division"),
            Err(e) => debug!(%a, %b, error = %e, "division rejected"),
        }
        result
    }

    pub fn power(&self, base: Number, exponent: Number) -> Number {
        let result = self.calculator.lock().power(base, exponent);
        debug!(%base, %exponent, %result, "performed exponentiation");
        result
    }

    /// # Errors
    /// Returns `DomainError::NegativeSquareRoot` when `number < 0`.
    pub fn square_root(&self, number: Number) -> Result<f64, DomainError> {
        let result = self.calculator.lock().square_root(number);
        match &result {
            Ok(root) => debug!(%number, root, "computed square root"),
            Err(e) => debug!(%number, error = %e, "square root rejected"),
        }
        result
    }

    /// # Errors
    /// Returns `DomainError::NegativeFactorial` for `n < 0` and
    /// `DomainError::FactorialOverflow` when `n!` exceeds `u128`.
    pub fn factorial(&self, n: i64) -> Result<u128, DomainError> {
        let result = self.calculator.lock().factorial(n);
        match &result {
            Ok(value) => debug!(n, %value, "computed factorial"),
            Err(e) => debug!(n, error = %e, "factorial rejected"),
        }
        result
    }

    /// # Errors
    /// Returns `DomainError::EmptyAverage` for an empty slice.
    pub fn average(&self, numbers: &[Number]) -> Result<f64, DomainError> {
        let result = self.calculator.lock().average(numbers);
        match &result {
            Ok(mean) => debug!(count = numbers.len(), mean, "computed average"),
            Err(e) => debug!(error = %e, "average rejected"),
        }
        result
    }

    #[must_use]
    pub fn history(&self) -> Vec<CalculationRecord> {
        self.calculator.lock().history()
    }

    pub fn clear_history(&self) {
        let mut calculator = self.calculator.lock();
        let dropped = calculator.history_len();
        calculator.clear_history();
        debug!(dropped, "history cleared");
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_add() {
        let service = Service::new();
        assert_eq!(service.add(Number::Int(10), Number::Int(20)), Number::Int(30));
    }

    #[test]
    fn test_add_negative() {
        let service = Service::new();
        assert_eq!(service.add(Number::Int(-5), Number::Int(3)), Number::Int(-2));
    }

    #[test]
    fn test_concurrent_callers_lose_no_records() {
        let service = Arc::new(Service::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        service.add(Number::Int(t), Number::Int(i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(service.history().len(), 400);
        service.clear_history();
        assert!(service.history().is_empty());
    }
}
