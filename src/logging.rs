//! Diagnostic logging
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer. The filter
//! comes from `RUST_LOG` and defaults to errors only, so the interactive
//! screen stays clean unless diagnostics are requested.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "mini_atm=error";

/// Install the global subscriber
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
