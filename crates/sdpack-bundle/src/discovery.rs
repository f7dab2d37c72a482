//! Enumeration of the packs available under a source root.

use crate::error::at;
use crate::{BundleResult, Validator};
use sdpack_logging::LogSink;
use std::fs;
use std::path::Path;

/// List the names of all valid packs under `source_root`.
///
/// Names come back in `read_dir` order. A missing root is created empty so
/// that a first run has somewhere to put packs.
pub fn discover(source_root: &Path, log: &dyn LogSink) -> BundleResult<Vec<String>> {
    if !source_root.exists() {
        fs::create_dir_all(source_root).map_err(at(source_root))?;
        log.debug(&format!(
            "Created source directory: {}",
            source_root.display()
        ));
        return Ok(Vec::new());
    }

    let validator = Validator::new(source_root, log);
    let mut packs = Vec::new();

    for entry in fs::read_dir(source_root).map_err(at(source_root))? {
        let entry = entry.map_err(at(source_root))?;

        let Ok(name) = entry.file_name().into_string() else {
            log.debug(&format!(
                "Skipping non UTF-8 entry: {}",
                entry.path().display()
            ));
            continue;
        };

        if validator.is_valid(&name) {
            packs.push(name);
        }
    }

    Ok(packs)
}
