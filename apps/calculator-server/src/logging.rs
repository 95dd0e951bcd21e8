//! Process-wide `tracing` subscriber.
//!
//! `RUST_LOG` takes precedence over config:
//! ```bash
//! RUST_LOG=debug calculator-server
//! RUST_LOG=calculator=trace,tower_http=debug calculator-server run
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Build the filter from `RUST_LOG` when set, otherwise from `config`.
#[must_use]
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(config.directives())
    }
}

/// Initialize logging once. Later calls are no-ops.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);

        let fmt_layer = if config.json {
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .boxed()
        };

        // A subscriber installed by an embedding test harness stays in place.
        let _ = tracing_subscriber::registry()
            .with(fmt_layer.with_filter(filter))
            .try_init();
    });
}
