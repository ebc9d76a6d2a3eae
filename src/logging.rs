//! Diagnostic logging.
//!
//! User-facing output goes through `ui::messages`; this only wires the
//! `tracing` subscriber used for debug/warn diagnostics. Logs go to stderr so
//! stdout stays clean for exported data.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// `RUST_LOG` wins over the configured level. Calling twice is harmless.
pub fn init(level: &str) {
    let default_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::WARN);

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
