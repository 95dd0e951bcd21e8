//! Local implementation of `CalculatorClientV1`.
//!
//! Used by in-process consumers. Delegates to the domain service and converts
//! errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use calculator_sdk::{CalculationRecord, CalculatorClientV1, CalculatorError, Number};

use crate::domain::Service;

/// Local implementation of the `CalculatorClientV1` trait that delegates to the domain service.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Create a new local client wrapping the domain service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorLocalClient {
    async fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        Ok(self.service.add(a, b))
    }

    async fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        Ok(self.service.subtract(a, b))
    }

    async fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        Ok(self.service.multiply(a, b))
    }

    async fn divide(&self, a: Number, b: Number) -> Result<f64, CalculatorError> {
        self.service.divide(a, b).map_err(Into::into)
    }

    async fn power(&self, base: Number, exponent: Number) -> Result<Number, CalculatorError> {
        Ok(self.service.power(base, exponent))
    }

    async fn square_root(&self, number: Number) -> Result<f64, CalculatorError> {
        self.service.square_root(number).map_err(Into::into)
    }

    async fn factorial(&self, n: i64) -> Result<u128, CalculatorError> {
        self.service.factorial(n).map_err(Into::into)
    }

    async fn average(&self, numbers: Vec<Number>) -> Result<f64, CalculatorError> {
        self.service.average(&numbers).map_err(Into::into)
    }

    async fn history(&self) -> Result<Vec<CalculationRecord>, CalculatorError> {
        Ok(self.service.history())
    }

    async fn clear_history(&self) -> Result<(), CalculatorError> {
        self.service.clear_history();
        Ok(())
    }
}
