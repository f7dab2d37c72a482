//! Console output through `tracing`

use crate::LogSink;
use sdpack_core::LogLevel;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Target attached to every event emitted by [`TracingSink`]
pub const LOG_TARGET: &str = "sdpack";

/// Sink that forwards messages to the active `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: LOG_TARGET, "{message}"),
            LogLevel::Debug => tracing::debug!(target: LOG_TARGET, "{message}"),
            LogLevel::Info => tracing::info!(target: LOG_TARGET, "{message}"),
            LogLevel::Warn => tracing::warn!(target: LOG_TARGET, "{message}"),
            LogLevel::Error => tracing::error!(target: LOG_TARGET, "{message}"),
            LogLevel::Off => {}
        }
    }
}

/// Install a console subscriber printing events at `level` and above
///
/// `RUST_LOG`-style directives are not read; the filter comes from `level`
/// alone. Safe to call more than once, later calls are ignored.
pub fn init_logging(level: LogLevel) {
    let filter = EnvFilter::new(level.as_filter_str());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
