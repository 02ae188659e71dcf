//! Tracing setup: `EnvFilter` plus a plain or JSON formatter.

pub mod spans;

use std::sync::Once;

use brandrec_core::config::ObservabilityConfig;
use brandrec_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Build the log filter.
///
/// `BRANDREC_LOG` wins when set and valid; otherwise the configured level is
/// used, falling back to `info` if it does not parse.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Idempotent: only the first call has any effect.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr);

        // try_init so a subscriber installed by an embedding host is left alone.
        let _ = if config.json_logs {
            builder
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .try_init()
        } else {
            builder.try_init()
        };
    });
}
