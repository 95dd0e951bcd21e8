//! Calculator SDK
//!
//! This crate provides the public contract of the calculator module:
//! - `CalculatorClientV1` trait
//! - Numeric and history models (`Number`, `CalculationRecord`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, Number};
//!
//! let client: Arc<dyn CalculatorClientV1> = module.client();
//! let sum = client.add(Number::Int(5), Number::Int(3)).await?;
//! assert_eq!(sum, Number::Int(8));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::CalculatorClientV1;
pub use errors::CalculatorError;
pub use models::{CalculationRecord, Number};
