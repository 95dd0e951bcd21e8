//! Calculation engine: validated operations that record their outcome.

use calculator_sdk::{CalculationRecord, Number};

use super::error::DomainError;
use super::history::HistoryLog;
use super::ops;

/// Single-owner calculator with its own history.
///
/// A record is appended only after the operation succeeded. `0!` and `1!`
/// return early and leave no record, unlike every other successful call.
#[derive(Debug, Default)]
pub struct Calculator {
    history: HistoryLog,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, text: String) {
        self.history.append(CalculationRecord::new(text));
    }

    pub fn add(&mut self, a: Number, b: Number) -> Number {
        let result = ops::add(a, b);
        self.record(format!("{a} + {b} = {result}"));
        result
    }

    pub fn subtract(&mut self, a: Number, b: Number) -> Number {
        let result = ops::subtract(a, b);
        self.record(format!("{a} - {b} = {result}"));
        result
    }

    pub fn multiply(&mut self, a: Number, b: Number) -> Number {
        let result = ops::multiply(a, b);
        self.record(format!("{a} * {b} = {result}"));
        result
    }

    /// # Errors
    /// `DomainError::DivisionByZero` when `b` is zero.
    pub fn divide(&mut self, a: Number, b: Number) -> Result<f64, DomainError> {
        let result = ops::divide(a, b)?;
        self.record(format!("{a} / {b} = {}", Number::Float(result)));
        Ok(result)
    }

    pub fn power(&mut self, base: Number, exponent: Number) -> Number {
        let result = ops::power(base, exponent);
        self.record(format!("{base} ^ {exponent} = {result}"));
        result
    }

    /// # Errors
    /// `DomainError::NegativeSquareRoot` when `number < 0`.
    pub fn square_root(&mut self, number: Number) -> Result<f64, DomainError> {
        let result = ops::square_root(number)?;
        self.record(format!("\u{221a}{number} = {}", Number::Float(result)));
        Ok(result)
    }

    /// # Errors
    /// `DomainError::NegativeFactorial` for `n < 0`,
    /// `DomainError::FactorialOverflow` past `34!`.
    pub fn factorial(&mut self, n: i64) -> Result<u128, DomainError> {
        if n < 0 {
            return Err(DomainError::NegativeFactorial);
        }
        // base cases are not recorded
        if n == 0 || n == 1 {
            return Ok(1);
        }
        let result = ops::factorial(n)?;
        self.record(format!("{n}! = {result}"));
        Ok(result)
    }

    /// # Errors
    /// `DomainError::EmptyAverage` for an empty slice.
    pub fn average(&mut self, numbers: &[Number]) -> Result<f64, DomainError> {
        let result = ops::average(numbers)?;
        let listing = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        self.record(format!(
            "Average of [{listing}] = {}",
            Number::Float(result)
        ));
        Ok(result)
    }

    #[must_use]
    pub fn history(&self) -> Vec<CalculationRecord> {
        self.history.list()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn history_texts(calc: &Calculator) -> Vec<String> {
        calc.history().into_iter().map(String::from).collect()
    }

    #[test]
    fn test_scenario_history() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(Number::Int(5), Number::Int(3)), Number::Int(8));
        assert_eq!(calc.multiply(Number::Int(2), Number::Int(4)), Number::Int(8));
        assert_eq!(calc.divide(Number::Int(10), Number::Int(2)), Ok(5.0));

        assert_eq!(
            history_texts(&calc),
            vec!["5 + 3 = 8", "2 * 4 = 8", "10 / 2 = 5.0"]
        );
    }

    #[test]
    fn test_record_formats() {
        let mut calc = Calculator::new();
        calc.subtract(Number::Int(10), Number::Int(3));
        calc.power(Number::Int(2), Number::Int(3));
        calc.square_root(Number::Int(16)).unwrap();
        calc.factorial(5).unwrap();
        calc.average(&[Number::Int(1), Number::Int(2), Number::Float(3.5)])
            .unwrap();
        calc.add(Number::Float(5.0), Number::Float(3.0));

        assert_eq!(
            history_texts(&calc),
            vec![
                "10 - 3 = 7",
                "2 ^ 3 = 8",
                "\u{221a}16 = 4.0",
                "5! = 120",
                "Average of [1, 2, 3.5] = 2.1666666666666665",
                "5.0 + 3.0 = 8.0",
            ]
        );
    }

    #[test]
    fn test_failed_operations_leave_no_record() {
        let mut calc = Calculator::new();
        assert_eq!(
            calc.divide(Number::Int(1), Number::Int(0)),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(
            calc.square_root(Number::Int(-4)),
            Err(DomainError::NegativeSquareRoot)
        );
        assert_eq!(calc.factorial(-5), Err(DomainError::NegativeFactorial));
        assert_eq!(calc.average(&[]), Err(DomainError::EmptyAverage));
        assert!(calc.factorial(35).is_err());

        assert_eq!(calc.history_len(), 0);
    }

    // Pins current behaviour: 0! and 1! return before anything is recorded.
    #[test]
    fn test_factorial_base_cases_are_not_recorded() {
        let mut calc = Calculator::new();
        assert_eq!(calc.factorial(0), Ok(1));
        assert_eq!(calc.factorial(1), Ok(1));
        assert_eq!(calc.history_len(), 0);

        assert_eq!(calc.factorial(2), Ok(2));
        assert_eq!(history_texts(&calc), vec!["2! = 2"]);
    }

    #[test]
    fn test_history_counts_and_clear() {
        let mut calc = Calculator::new();
        for i in 0..10 {
            calc.add(Number::Int(i), Number::Int(1));
        }
        assert_eq!(calc.history_len(), 10);
        assert_eq!(history_texts(&calc)[0], "0 + 1 = 1");
        assert_eq!(history_texts(&calc)[9], "9 + 1 = 10");

        calc.clear_history();
        assert!(calc.history().is_empty());
        calc.clear_history();
        assert!(calc.history().is_empty());
    }
}
