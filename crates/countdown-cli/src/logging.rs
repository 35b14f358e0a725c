//! Logging setup.
//!
//! Logs go to stderr by default. While the clock owns the screen anything
//! written to stderr lands on top of it, so `--log-file` is the way to get
//! debug output from a live session.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::LogConfig;

/// Install the global subscriber. A second call is a no-op.
pub fn init(config: &LogConfig) -> Result<()> {
    let directive = config.level.as_directive();
    let filter = EnvFilter::new(directive);

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let file_layer = fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_span_events(FmtSpan::NONE);

            let _ = tracing_subscriber::registry()
                .with(file_layer)
                .with(filter)
                .try_init();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_span_events(FmtSpan::NONE);

            let _ = tracing_subscriber::registry()
                .with(stderr_layer)
                .with(filter)
                .try_init();
        }
    }

    tracing::debug!(level = directive, file = ?config.file, "logging initialized");
    Ok(())
}
