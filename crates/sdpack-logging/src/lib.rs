//! sdpack-logging - Injected logging for the pack pipeline
//!
//! This crate provides:
//! - [`LogSink`] trait that every pipeline component receives instead of a global logger
//! - [`TracingSink`] that forwards to `tracing` (used by the binary)
//! - [`MemorySink`] that records messages so tests can assert on diagnostics
//! - [`init_logging`] to install the console subscriber

mod console;
mod sink;

pub use console::{LOG_TARGET, TracingSink, init_logging};
pub use sdpack_core::LogLevel;
pub use sink::{LogSink, MemorySink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, LogSink, MemorySink, TracingSink, init_logging};
}
