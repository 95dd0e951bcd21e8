//! Calculator Module
//!
//! Arithmetic operations with an in-memory, per-module history: every route
//! and client obtained from one `CalculatorModule` shares it.
//!
//! ## Architecture
//!
//! - `domain` holds the numeric rules, the history log and the lock-guarded `Service`
//! - REST handlers convert JSON operands at the boundary and call `Service`
//! - In-process consumers use `CalculatorLocalClient` through the
//!   `CalculatorClientV1` trait from `calculator-sdk`

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::{DomainError, Service};

pub mod local_client;
pub use local_client::CalculatorLocalClient;

#[doc(hidden)]
pub mod api;
pub use api::rest::context::{RequestContext, extract_trace_id};
pub use api::rest::problem::{APPLICATION_PROBLEM_JSON, Problem, internal_error};
