//! Listing of the available packs.

use sdpack_bundle::Generator;
use sdpack_core::PackConfig;
use sdpack_logging::LogSink;

/// Run the list command.
pub fn run(config: &PackConfig, log: &dyn LogSink) {
    match Generator::new(config, log).list() {
        Ok(packs) => {
            log.info("Available iconpacks:");
            for pack in packs {
                log.info(&format!("- {pack}"));
            }
        }
        Err(e) => log.error(&format!("Unable to list iconpacks: {e}")),
    }
}
