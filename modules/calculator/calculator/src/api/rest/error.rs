//! REST error mapping for the calculator module.

use axum::http::StatusCode;

use super::input::InputError;
use super::problem::{Problem, bad_request};
use crate::domain::DomainError;

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        bad_request(e.to_string()).with_code("CALCULATOR_INVALID_OPERATION")
    }
}

impl From<InputError> for Problem {
    fn from(e: InputError) -> Self {
        match e {
            InputError::PayloadTooLarge(_) => Problem::new(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload Too Large",
                e.to_string(),
            )
            .with_code("CALCULATOR_PAYLOAD_TOO_LARGE"),
            _ => bad_request(e.to_string()).with_code("CALCULATOR_INVALID_INPUT"),
        }
    }
}
