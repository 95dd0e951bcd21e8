//! REST DTOs for calculator module
//!
//! Request fields are raw JSON values so that missing and malformed operands
//! can be told apart and reported with their own messages.

use calculator_sdk::Number;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Two-operand request for add, subtract, multiply and divide.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BinaryOperationRequest {
    /// First operand (number or numeric string)
    #[schema(value_type = f64)]
    pub a: Option<Value>,
    /// Second operand (number or numeric string)
    #[schema(value_type = f64)]
    pub b: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PowerRequest {
    #[schema(value_type = f64)]
    pub base: Option<Value>,
    #[schema(value_type = f64)]
    pub exponent: Option<Value>,
}

/// Single-operand request for square root and factorial.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UnaryOperationRequest {
    #[schema(value_type = f64)]
    pub number: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AverageRequest {
    #[schema(value_type = Vec<f64>)]
    pub numbers: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BinaryOperationResponse {
    /// `add`, `subtract`, `multiply` or `divide`
    pub operation: String,
    pub a: Number,
    pub b: Number,
    pub result: Number,
}

impl BinaryOperationResponse {
    pub fn new(operation: &str, a: Number, b: Number, result: Number) -> Self {
        Self {
            operation: operation.to_owned(),
            a,
            b,
            result,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PowerResponse {
    pub operation: String,
    pub base: Number,
    pub exponent: Number,
    pub result: Number,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SquareRootResponse {
    pub operation: String,
    pub number: Number,
    pub result: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactorialResponse {
    pub operation: String,
    pub number: i64,
    /// Exact factorial, up to `34!`
    #[schema(value_type = u64)]
    pub result: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AverageResponse {
    pub operation: String,
    pub numbers: Vec<Number>,
    pub result: f64,
}

/// Formatted records, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    pub history: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
