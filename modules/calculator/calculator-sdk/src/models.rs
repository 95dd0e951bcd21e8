//! Public models for the calculator module.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A numeric operand or result.
///
/// Integers and floats are kept apart so that `5 + 3` stays `8` while
/// `5.5 + 3` becomes `8.5`. Serializes as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Lossy conversion to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    /// `true` when strictly below zero. `NaN` and `-0.0` are not negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(v) => v < 0,
            Self::Float(v) => v < 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => fmt_float(v, f),
        }
    }
}

/// Writes a float the way history records show it: `5.0`, `0.1`, `1e+16`,
/// `1e-05`, `inf`, `nan`.
fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }

    let abs = v.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        // `{:e}` yields the shortest round-trip mantissa, e.g. `1.5e-5`
        let formatted = format!("{v:e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return f.write_str(&formatted);
        };
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }

    if v.fract() == 0.0 {
        write!(f, "{v:.1}")
    } else {
        write!(f, "{v}")
    }
}

/// Immutable textual trace of one completed calculation, e.g. `"5 + 3 = 8"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CalculationRecord(String);

impl CalculationRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CalculationRecord> for String {
    fn from(record: CalculationRecord) -> Self {
        record.0
    }
}
