//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the colomine tracing/logging system with compiled defaults.
///
/// Reads the `COLOMINE_LOG` environment variable for per-module log levels.
/// Format: `COLOMINE_LOG=colomine_mining::generation=debug,colomine_mining=info`
///
/// Falls back to `colomine=info` if `COLOMINE_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Same as [`init_tracing`], with the fallback filter taken from config.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// `COLOMINE_LOG` if set and valid, otherwise the configured filter.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env("COLOMINE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_filter()))
}
