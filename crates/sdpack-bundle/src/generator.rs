//! Turns a validated source pack into its output bundle.

use crate::{
    BundleBuilder, BundleError, BundleResult, BundleSummary, ICONS_DIR, INSTALL_HINT, Validator,
    discover,
};
use sdpack_core::PackConfig;
use sdpack_logging::LogSink;
use std::path::{Component, Path};

/// Pipeline entry point bound to one configuration and one log sink.
pub struct Generator<'a> {
    config: &'a PackConfig,
    log: &'a dyn LogSink,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a PackConfig, log: &'a dyn LogSink) -> Self {
        Self { config, log }
    }

    /// Names of the valid packs under the configured source root.
    pub fn list(&self) -> BundleResult<Vec<String>> {
        discover(&self.config.source_root, self.log)
    }

    /// Validate `name` and regenerate its bundle from scratch.
    ///
    /// Nothing under the output root is touched unless validation passes.
    pub fn generate(&self, name: &str) -> BundleResult<BundleSummary> {
        let validator = Validator::new(&self.config.source_root, self.log);
        let descriptor = validator.check(name).map_err(|reason| {
            self.log.error(&format!("Invalid iconpack: {name}"));
            BundleError::InvalidPack {
                name: name.to_string(),
                reason,
            }
        })?;

        let pack_dir = self.config.pack_dir(name);
        let bundle_name = self.config.bundle_name(&descriptor.id);
        let bundle_dir = self.config.bundle_dir(&descriptor.id);
        let icon = descriptor.icon().map(str::to_owned);

        let mut builder = BundleBuilder::new(descriptor);

        match icon {
            Some(icon) if !is_inside_pack(&icon) => {
                self.log.warn(&format!(
                    "Ignoring Icon {icon:?} in {name}: path leaves the pack folder"
                ));
            }
            Some(icon) => {
                let icon_path = pack_dir.join(&icon);
                if icon_path.is_file() {
                    builder = builder.with_icon(icon_path);
                } else {
                    self.log.warn(&format!(
                        "Icon file {icon} not found in {}, {bundle_name} will have no icon.png",
                        pack_dir.display()
                    ));
                }
            }
            None => {
                self.log.warn(&format!(
                    "No Icon set in the manifest of {name}, {bundle_name} will have no icon.png"
                ));
            }
        }

        builder = builder.add_icons_from(pack_dir.join(ICONS_DIR))?;
        for skipped in builder.skipped() {
            self.log.warn(&format!(
                "Skipping icon with a non UTF-8 name: {}",
                skipped.display()
            ));
        }

        let summary = builder.write(&bundle_dir, self.log)?;

        self.log.info(&format!(
            "Generated pack: {bundle_name} with {} icons",
            summary.icon_count
        ));
        self.log.info(INSTALL_HINT);

        Ok(summary)
    }
}

fn is_inside_pack(icon: &str) -> bool {
    !icon.is_empty()
        && Path::new(icon)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
