//! Generation of a single pack.

use sdpack_bundle::{BundleError, Generator};
use sdpack_core::PackConfig;
use sdpack_logging::LogSink;

/// Run the generate command.
///
/// Failures are reported through `log` only; the process exit status does
/// not change.
pub fn run(config: &PackConfig, log: &dyn LogSink, name: &str) {
    match Generator::new(config, log).generate(name) {
        Ok(_) => {}
        // already reported by the generator
        Err(BundleError::InvalidPack { .. }) => {}
        Err(e) => log.error(&format!("Failed to generate {name}: {e}")),
    }
}
