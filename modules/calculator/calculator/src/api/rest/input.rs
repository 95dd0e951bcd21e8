//! Boundary conversion of JSON request values into calculator operands.
//!
//! Every value is converted exactly once, here, before it reaches the domain.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use calculator_sdk::Number;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Required fields absent or not convertible to the expected numeric type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0}")]
    Missing(&'static str),

    #[error("Invalid value for '{field}': expected {expected}")]
    Malformed {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid request body: {0}")]
    Body(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),
}

impl From<JsonRejection> for InputError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(rejection.body_text())
        } else {
            Self::Body(rejection.body_text())
        }
    }
}

/// Reads a request DTO from a JSON body that must be an object.
///
/// Any other JSON value (array, scalar) carries none of the named fields and
/// is reported with the endpoint's `missing` message.
///
/// # Errors
/// Returns `InputError::Body`/`PayloadTooLarge` for rejected bodies and
/// `InputError::Missing` for non-object bodies.
pub fn object_body<T: DeserializeOwned>(
    body: Result<Json<Value>, JsonRejection>,
    missing: &'static str,
) -> Result<T, InputError> {
    let Json(value) = body?;
    if !value.is_object() {
        return Err(InputError::Missing(missing));
    }
    serde_json::from_value(value).map_err(|e| InputError::Body(e.to_string()))
}

fn malformed(field: &str, expected: &'static str) -> InputError {
    InputError::Malformed {
        field: field.to_owned(),
        expected,
    }
}

/// Unwraps a required field, treating JSON `null` as absent.
///
/// # Errors
/// Returns `InputError::Missing` with `message` when the field is absent.
pub fn require(value: Option<Value>, message: &'static str) -> Result<Value, InputError> {
    match value {
        None | Some(Value::Null) => Err(InputError::Missing(message)),
        Some(v) => Ok(v),
    }
}

/// JSON integers become `Number::Int`, other JSON numbers `Number::Float`.
/// Numeric strings are parsed the same way.
///
/// # Errors
/// Returns `InputError::Malformed` for booleans, arrays, objects and
/// non-numeric strings.
pub fn parse_number(field: &str, value: &Value) -> Result<Number, InputError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Number::Int)
            .or_else(|| n.as_f64().map(Number::Float))
            .ok_or_else(|| malformed(field, "a number")),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .map(Number::Int)
                .or_else(|_| s.parse::<f64>().map(Number::Float))
                .map_err(|_| malformed(field, "a number"))
        }
        _ => Err(malformed(field, "a number")),
    }
}

/// Accepts JSON integers, integral floats and integer strings.
///
/// # Errors
/// Returns `InputError::Malformed` for anything that is not a whole number
/// within `i64`.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_integer(field: &str, value: &Value) -> Result<i64, InputError> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(v) if v.fract() == 0.0 && (-LIMIT..LIMIT).contains(&v) => Ok(v as i64),
                _ => Err(malformed(field, "an integer")),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(field, "an integer")),
        _ => Err(malformed(field, "an integer")),
    }
}

/// # Errors
/// Returns `InputError::Malformed` when `value` is not an array, or names
/// the first element that is not a number.
pub fn parse_numbers(field: &str, value: &Value) -> Result<Vec<Number>, InputError> {
    let Value::Array(items) = value else {
        return Err(malformed(field, "an array of numbers"));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_number(&format!("{field}[{i}]"), item))
        .collect()
}
