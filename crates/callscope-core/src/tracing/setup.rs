//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "CALLSCOPE_LOG";

/// Filter applied when `CALLSCOPE_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "callscope=info";

/// Initialize the Callscope tracing/logging system.
///
/// Reads `CALLSCOPE_LOG` for per-crate log levels, e.g.
/// `CALLSCOPE_LOG=callscope_analysis=debug,callscope_io=warn`.
/// Falls back to `callscope=info`. Logs go to stderr so CLI output on
/// stdout stays clean.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
