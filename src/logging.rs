//! Tracing setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to this
//! crate and to request tracing. Logs go to stderr so command output on stdout
//! stays machine-readable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter used when `RUST_LOG` is unset
pub fn default_directives(level: &str) -> String {
    format!("bible_api={level},tower_http={level},warn", level = level)
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
