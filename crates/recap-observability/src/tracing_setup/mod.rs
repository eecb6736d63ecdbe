//! Tracing setup — structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use recap_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `recap=debug`.
pub const LOG_ENV_VAR: &str = "RECAP_LOG";

static INIT: Once = Once::new();

/// Install the global subscriber once per process.
///
/// `RECAP_LOG` wins over `config.log_level`. A subscriber installed by
/// someone else first is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

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

/// Install a subscriber with an explicit filter string (tests, embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .with_test_writer()
            .try_init();
    });
}
