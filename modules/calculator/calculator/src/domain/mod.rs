//! Domain layer for calculator module
//!
//! - `ops`: pure arithmetic
//! - `history`: append-only record log
//! - `engine`: validated operations that record their outcome
//! - `service`: lock-guarded engine shared across callers

pub mod engine;
pub mod error;
pub mod history;
pub mod ops;
pub mod service;

pub use engine::Calculator;
pub use error::DomainError;
pub use history::HistoryLog;
pub use service::Service;
