//! Structural validation of source packs.

use crate::{DESCRIPTOR_FILE, Descriptor, Rejection};
use sdpack_logging::LogSink;
use std::fs;
use std::path::{Component, Path};

/// Decides whether a folder under the source root is an icon pack.
///
/// Every rejection except [`Rejection::NotADirectory`] is reported to the
/// sink at warn level. Stray files in the source root are expected and stay
/// silent.
pub struct Validator<'a> {
    source_root: &'a Path,
    log: &'a dyn LogSink,
}

impl<'a> Validator<'a> {
    pub fn new(source_root: &'a Path, log: &'a dyn LogSink) -> Self {
        Self { source_root, log }
    }

    /// Validate the pack called `name` and return its parsed descriptor.
    pub fn check(&self, name: &str) -> Result<Descriptor, Rejection> {
        if !is_single_component(name) {
            return Err(Rejection::NotADirectory);
        }

        let pack_dir = self.source_root.join(name);
        if !pack_dir.is_dir() {
            return Err(Rejection::NotADirectory);
        }

        let descriptor_path = pack_dir.join(DESCRIPTOR_FILE);
        let shown = descriptor_path.display();

        if !descriptor_path.is_file() {
            self.log.warn(&format!(
                "No {DESCRIPTOR_FILE} found in {}",
                pack_dir.display()
            ));
            return Err(Rejection::MissingDescriptor);
        }

        let content = fs::read(&descriptor_path).map_err(|e| {
            self.log.warn(&format!("Unable to read {shown}: {e}"));
            Rejection::Unreadable(e.to_string())
        })?;

        Descriptor::parse(&content).inspect_err(|rejection| match rejection {
            Rejection::InvalidJson(detail) => {
                self.log.warn(&format!("Invalid JSON in {shown}: {detail}"));
            }
            Rejection::MissingField(field) => {
                self.log.warn(&format!("Missing {field} in {shown}"));
            }
            Rejection::InvalidField { field, reason } => {
                self.log.warn(&format!("Invalid {field} in {shown}: {reason}"));
            }
            _ => {}
        })
    }

    /// Whether `name` passes [`Validator::check`].
    pub fn is_valid(&self, name: &str) -> bool {
        self.check(name).is_ok()
    }
}

/// Pack names must not climb out of the source root.
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
