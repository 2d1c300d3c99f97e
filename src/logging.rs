//! Logging setup
//!
//! Optional tracing-subscriber initialization for embedders that do not
//! bring their own subscriber. Filtering follows `RUST_LOG` with a quiet
//! default.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a formatted subscriber filtered by `RUST_LOG`
///
/// Defaults to `warn` plus `info` for this crate when `RUST_LOG` is unset.
/// Calling this twice is an error from the global subscriber; embedders that
/// already install one should skip this.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,chat_widget_sdk=info"));

    fmt().with_env_filter(filter).init();
}

/// Initialize a JSON-formatted subscriber filtered by `RUST_LOG`
///
/// Same filtering as [`init`], for hosts that collect structured logs.
pub fn init_json() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,chat_widget_sdk=info"));

    fmt().json().with_env_filter(filter).init();
}
