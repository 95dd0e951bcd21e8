//! Pure arithmetic, no history.
//!
//! Integer operands stay integers while the result fits into `i64`; any float
//! operand, or an integer overflow, moves the computation to `f64`.

use calculator_sdk::Number;

use super::error::DomainError;

fn combine(
    a: Number,
    b: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Number {
    if let (Number::Int(x), Number::Int(y)) = (a, b)
        && let Some(v) = int_op(x, y)
    {
        return Number::Int(v);
    }
    Number::Float(float_op(a.as_f64(), b.as_f64()))
}

#[must_use]
pub fn add(a: Number, b: Number) -> Number {
    combine(a, b, i64::checked_add, |x, y| x + y)
}

#[must_use]
pub fn subtract(a: Number, b: Number) -> Number {
    combine(a, b, i64::checked_sub, |x, y| x - y)
}

#[must_use]
pub fn multiply(a: Number, b: Number) -> Number {
    combine(a, b, i64::checked_mul, |x, y| x * y)
}

/// True division; the quotient is always a float.
///
/// # Errors
/// Returns `DomainError::DivisionByZero` when `b` is zero.
pub fn divide(a: Number, b: Number) -> Result<f64, DomainError> {
    if b.is_zero() {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a.as_f64() / b.as_f64())
}

/// `base ^ exponent`. Integer base with a non-negative integer exponent stays
/// integer; everything else goes through `f64::powf`.
#[must_use]
pub fn power(base: Number, exponent: Number) -> Number {
    if let (Number::Int(b), Number::Int(e)) = (base, exponent)
        && let Ok(e) = u32::try_from(e)
        && let Some(v) = b.checked_pow(e)
    {
        return Number::Int(v);
    }
    Number::Float(base.as_f64().powf(exponent.as_f64()))
}

/// # Errors
/// Returns `DomainError::NegativeSquareRoot` when `number < 0`.
pub fn square_root(number: Number) -> Result<f64, DomainError> {
    if number.is_negative() {
        return Err(DomainError::NegativeSquareRoot);
    }
    Ok(number.as_f64().sqrt())
}

/// Iterative product `2 * 3 * ... * n`.
///
/// # Errors
/// Returns `DomainError::NegativeFactorial` for `n < 0` and
/// `DomainError::FactorialOverflow` when the result does not fit into `u128`.
pub fn factorial(n: i64) -> Result<u128, DomainError> {
    let n = u64::try_from(n).map_err(|_| DomainError::NegativeFactorial)?;
    (2..=n)
        .try_fold(1u128, |acc, i| acc.checked_mul(u128::from(i)))
        .ok_or(DomainError::FactorialOverflow { n })
}

/// Arithmetic mean as a float.
///
/// # Errors
/// Returns `DomainError::EmptyAverage` for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn average(numbers: &[Number]) -> Result<f64, DomainError> {
    if numbers.is_empty() {
        return Err(DomainError::EmptyAverage);
    }
    let sum: f64 = numbers.iter().map(|n| n.as_f64()).sum();
    Ok(sum / numbers.len() as f64)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        assert_eq!(add(Number::Int(5), Number::Int(3)), Number::Int(8));
        assert_eq!(subtract(Number::Int(10), Number::Int(3)), Number::Int(7));
        assert_eq!(multiply(Number::Int(5), Number::Int(3)), Number::Int(15));
        assert_eq!(add(Number::Int(-5), Number::Int(3)), Number::Int(-2));
    }

    #[test]
    fn test_float_operand_promotes_result() {
        let Number::Float(v) = add(Number::Float(5.5), Number::Float(3.2)) else {
            panic!("expected float");
        };
        assert!((v - 8.7).abs() < EPS);
        assert_eq!(add(Number::Int(5), Number::Float(0.5)), Number::Float(5.5));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let result = add(Number::Int(i64::MAX), Number::Int(1));
        assert!(matches!(result, Number::Float(_)));
        let result = multiply(Number::Int(i64::MAX), Number::Int(2));
        assert!(matches!(result, Number::Float(_)));
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(Number::Int(10), Number::Int(2)), Ok(5.0));
        assert_eq!(divide(Number::Int(1), Number::Int(4)), Ok(0.25));
        assert_eq!(
            divide(Number::Int(10), Number::Int(0)),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(
            divide(Number::Float(1.0), Number::Float(-0.0)),
            Err(DomainError::DivisionByZero)
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(power(Number::Int(2), Number::Int(3)), Number::Int(8));
        assert_eq!(power(Number::Int(2), Number::Int(-1)), Number::Float(0.5));
        assert_eq!(power(Number::Float(2.0), Number::Int(3)), Number::Float(8.0));
        assert_eq!(power(Number::Int(7), Number::Int(0)), Number::Int(1));
        assert!(matches!(
            power(Number::Int(10), Number::Int(40)),
            Number::Float(_)
        ));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(Number::Int(16)), Ok(4.0));
        assert_eq!(square_root(Number::Int(0)), Ok(0.0));
        assert_eq!(
            square_root(Number::Int(-4)),
            Err(DomainError::NegativeSquareRoot)
        );
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(10), Ok(3_628_800));
        assert_eq!(factorial(-1), Err(DomainError::NegativeFactorial));
    }

    #[test]
    fn test_factorial_range() {
        assert!(factorial(34).is_ok());
        assert_eq!(
            factorial(35),
            Err(DomainError::FactorialOverflow { n: 35 })
        );
        assert_eq!(
            factorial(i64::MAX),
            Err(DomainError::FactorialOverflow {
                n: i64::MAX.unsigned_abs()
            })
        );
    }

    #[test]
    fn test_average() {
        let numbers: Vec<Number> = (1..=5).map(Number::Int).collect();
        assert_eq!(average(&numbers), Ok(3.0));
        assert_eq!(average(&[Number::Float(2.5)]), Ok(2.5));
        assert_eq!(average(&[]), Err(DomainError::EmptyAverage));
    }
}
