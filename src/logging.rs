//! Diagnostic logging
//!
//! User-facing output is printed directly by the operations; `tracing` events
//! are diagnostics written to stderr. `DEVSTUDIO_LOG` takes an `EnvFilter`
//! directive and overrides `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "DEVSTUDIO_LOG";

/// Filter directive used when `DEVSTUDIO_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
