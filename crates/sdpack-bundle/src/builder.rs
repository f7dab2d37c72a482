//! Bundle creation utilities.
//!
//! The [`BundleBuilder`] provides a fluent API for creating `.sdIconPack`
//! bundle directories.

use crate::error::at;
use crate::{
    BundleError, BundleResult, Descriptor, ICON_FILE, ICONS_DIR, INDEX_FILE, IconIndex,
    MANIFEST_FILE, is_icon_file,
};
use sdpack_logging::LogSink;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Builder for icon pack bundles.
///
/// # Example
///
/// ```no_run
/// use sdpack_bundle::{BundleBuilder, Descriptor};
/// use sdpack_logging::TracingSink;
///
/// let descriptor = Descriptor::parse(br#"{"id": "demo", "manifest": {"Icon": "logo.png"}}"#)?;
/// let summary = BundleBuilder::new(descriptor)
///     .with_icon("iconpacks/demo/logo.png")
///     .add_icons_from("iconpacks/demo/icons")?
///     .write("packs/demo.sdIconPack", &TracingSink::new())?;
///
/// println!("{} icons", summary.icon_count);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct BundleBuilder {
    descriptor: Descriptor,
    icon: Option<PathBuf>,
    index: IconIndex,
    files: Vec<BundleFile>,
    skipped: Vec<PathBuf>,
}

/// An icon asset to copy into the bundle.
struct BundleFile {
    /// Path relative to the bundle's `icons/` folder, `/`-separated.
    relative_path: String,
    /// Source file on disk.
    source: PathBuf,
}

/// Outcome of a successful [`BundleBuilder::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    pub id: String,
    pub bundle_dir: PathBuf,
    pub icon_count: usize,
    pub has_icon: bool,
    pub replaced_existing: bool,
}

impl BundleBuilder {
    /// Create a new bundle builder for the given descriptor.
    #[must_use]
    pub fn new(descriptor: Descriptor) -> Self {
        Self {
            descriptor,
            icon: None,
            index: IconIndex::new(),
            files: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Use `path` as the bundle's `icon.png`.
    #[must_use]
    pub fn with_icon(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon = Some(path.into());
        self
    }

    /// Add a single icon stored at `relative_path` inside `icons/`.
    pub fn add_icon(
        mut self,
        source: impl Into<PathBuf>,
        relative_path: &str,
    ) -> BundleResult<Self> {
        validate_relative_path(relative_path)?;

        self.index.push(relative_path);
        self.files.push(BundleFile {
            relative_path: relative_path.to_string(),
            source: source.into(),
        });

        Ok(self)
    }

    /// Add every `.png`/`.jpg` file found below `icons_dir`.
    ///
    /// The files of a folder are visited before its sub-folders, each in
    /// `read_dir` order. A missing folder adds nothing.
    pub fn add_icons_from(mut self, icons_dir: impl AsRef<Path>) -> BundleResult<Self> {
        let icons_dir = icons_dir.as_ref();
        if icons_dir.is_dir() {
            self.walk(icons_dir, "")?;
        }
        Ok(self)
    }

    fn walk(&mut self, dir: &Path, relative_dir: &str) -> BundleResult<()> {
        let mut sub_dirs = Vec::new();

        for entry in fs::read_dir(dir).map_err(at(dir))? {
            let entry = entry.map_err(at(dir))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(at(&path))?;

            let Ok(name) = entry.file_name().into_string() else {
                self.skipped.push(path);
                continue;
            };
            let relative = join_relative(relative_dir, &name);

            if file_type.is_dir() {
                sub_dirs.push((path, relative));
            } else if is_icon_file(&name) && path.is_file() {
                self.index.push(relative.clone());
                self.files.push(BundleFile {
                    relative_path: relative,
                    source: path,
                });
            }
        }

        for (path, relative) in sub_dirs {
            self.walk(&path, &relative)?;
        }

        Ok(())
    }

    /// Write the bundle to `bundle_dir`, replacing whatever is there.
    ///
    /// Not atomic: a failure after the old bundle is removed leaves a
    /// partially written directory behind.
    pub fn write(
        self,
        bundle_dir: impl AsRef<Path>,
        log: &dyn LogSink,
    ) -> BundleResult<BundleSummary> {
        let bundle_dir = bundle_dir.as_ref();
        let bundle_name = bundle_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| bundle_dir.display().to_string());

        let replaced_existing = remove_existing(bundle_dir)?;
        if replaced_existing {
            log.debug(&format!("Deleted existing pack: {bundle_name}"));
        }

        log.debug(&format!("Creating pack directory: {bundle_name}"));
        fs::create_dir_all(bundle_dir).map_err(at(bundle_dir))?;

        log.debug("Saving manifest");
        let manifest_path = bundle_dir.join(MANIFEST_FILE);
        fs::write(&manifest_path, self.descriptor.manifest_json()?).map_err(at(&manifest_path))?;

        if let Some(icon) = &self.icon {
            log.debug("Copying icon file");
            fs::copy(icon, bundle_dir.join(ICON_FILE)).map_err(at(icon))?;
        }

        let icons_root = bundle_dir.join(ICONS_DIR);
        fs::create_dir_all(&icons_root).map_err(at(&icons_root))?;

        for file in &self.files {
            let dest = file
                .relative_path
                .split('/')
                .fold(icons_root.clone(), |acc, part| acc.join(part));

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(at(parent))?;
            }
            fs::copy(&file.source, &dest).map_err(at(&file.source))?;
            log.debug(&format!("Found icon: {}", file.relative_path));
        }

        log.debug(&format!("Saving {INDEX_FILE}"));
        let index_path = bundle_dir.join(INDEX_FILE);
        fs::write(&index_path, self.index.to_json_vec()?).map_err(at(&index_path))?;

        Ok(BundleSummary {
            id: self.descriptor.id,
            bundle_dir: bundle_dir.to_path_buf(),
            icon_count: self.index.len(),
            has_icon: self.icon.is_some(),
            replaced_existing,
        })
    }

    /// The descriptor this bundle is built from.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Icons collected so far.
    #[must_use]
    pub fn index(&self) -> &IconIndex {
        &self.index
    }

    /// Entries under the icons folder whose names are not valid UTF-8.
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

fn join_relative(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// Index paths must stay inside `icons/`.
fn validate_relative_path(path: &str) -> BundleResult<()> {
    let bad = path.is_empty()
        || path.starts_with('/')
        || path.contains('\\')
        || path.split('/').any(|part| part.is_empty() || part == "." || part == "..");

    if bad {
        return Err(BundleError::InvalidIconPath(path.to_string()));
    }
    Ok(())
}

/// Remove a previous bundle (or a stray file with its name).
///
/// Returns whether anything was removed.
fn remove_existing(bundle_dir: &Path) -> BundleResult<bool> {
    match fs::symlink_metadata(bundle_dir) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(bundle_dir).map_err(at(bundle_dir))?;
            Ok(true)
        }
        Ok(_) => {
            fs::remove_file(bundle_dir).map_err(at(bundle_dir))?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(BundleError::io(bundle_dir, e)),
    }
}
