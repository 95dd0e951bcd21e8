//! Calculator server: configuration, logging and HTTP hosting for the
//! calculator module.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod logging;
pub mod server;
mod signals;

pub use config::{AppConfig, CliOverrides};
