//! Pack generator configuration

use crate::{ConfigError, ConfigResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default folder scanned for source packs.
pub const DEFAULT_SOURCE_ROOT: &str = "./iconpacks";

/// Default folder receiving generated bundles.
pub const DEFAULT_OUTPUT_ROOT: &str = "./packs";

/// Suffix the Stream Deck application expects on icon pack folders.
pub const DEFAULT_BUNDLE_EXTENSION: &str = "sdIconPack";

/// Where packs are read from and written to
///
/// Every field has a default, so an empty config file (or none at all)
/// reproduces the standard `./iconpacks` -> `./packs` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
    /// Root folder holding one sub-folder per source pack
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Root folder receiving `<id>.<bundle_extension>` bundles
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Suffix appended to a pack id to name its bundle directory
    #[serde(default = "default_bundle_extension")]
    pub bundle_extension: String,

    /// Minimum level printed to the console
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_source_root() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_ROOT)
}

fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

fn default_bundle_extension() -> String {
    DEFAULT_BUNDLE_EXTENSION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_root: default_output_root(),
            bundle_extension: default_bundle_extension(),
            log_level: default_log_level(),
        }
    }
}

impl PackConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Set the source root
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    /// Set the output root
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Set the console log level
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level.as_filter_str().to_string();
        self
    }

    /// Check that the configuration can be used to name bundle directories
    pub fn validate(&self) -> ConfigResult<()> {
        let ext = &self.bundle_extension;
        let invalid = |reason: &str| ConfigError::InvalidExtension {
            extension: ext.clone(),
            reason: reason.to_string(),
        };

        if ext.is_empty() {
            return Err(invalid("must not be empty"));
        }
        if ext.starts_with('.') {
            return Err(invalid("must not start with a dot"));
        }
        if ext.contains('/') || ext.contains('\\') {
            return Err(invalid("must not contain a path separator"));
        }

        self.level()?;
        Ok(())
    }

    /// The configured console log level
    pub fn level(&self) -> ConfigResult<LogLevel> {
        self.log_level.parse()
    }

    /// Folder of the source pack called `name`
    pub fn pack_dir(&self, name: &str) -> PathBuf {
        self.source_root.join(name)
    }

    /// Name of the bundle directory for pack id `id`
    pub fn bundle_name(&self, id: &str) -> String {
        format!("{id}.{}", self.bundle_extension)
    }

    /// Output bundle directory for pack id `id`
    pub fn bundle_dir(&self, id: &str) -> PathBuf {
        self.output_root.join(self.bundle_name(id))
    }
}
