//! The `icons.json` index listing every icon in a bundle.

use crate::BundleResult;
use serde::{Deserialize, Serialize};
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

/// One icon, addressed relative to the bundle's `icons/` folder.
///
/// Paths use forward slashes and carry no leading slash, e.g. `sub/b.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconEntry {
    pub path: String,
}

/// Ordered list of icons, in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconIndex {
    entries: Vec<IconEntry>,
}

impl IconIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.push(IconEntry { path: path.into() });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconEntry> {
        self.entries.iter()
    }

    /// Serialize as a JSON array indented with four spaces.
    pub fn to_json_vec(&self) -> BundleResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Parse an index previously written by [`IconIndex::to_json_vec`].
    pub fn from_slice(bytes: &[u8]) -> BundleResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<'a> IntoIterator for &'a IconIndex {
    type Item = &'a IconEntry;
    type IntoIter = std::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Whether `file_name` is an icon asset (case-sensitive `.png` or `.jpg`).
pub fn is_icon_file(file_name: &str) -> bool {
    file_name.ends_with(".png") || file_name.ends_with(".jpg")
}
