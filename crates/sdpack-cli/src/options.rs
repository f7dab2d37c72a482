//! Configuration flags shared by every invocation

use anyhow::{Context, Result};
use clap::Args;
use sdpack_core::{LogLevel, PackConfig};
use std::path::PathBuf;

/// Flags override the config file, which overrides the defaults.
#[derive(Debug, Default, Args)]
pub struct Options {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Folder containing source packs (default: ./iconpacks)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Folder receiving generated bundles (default: ./packs)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Options {
    /// Build the effective configuration.
    pub fn resolve(&self) -> Result<PackConfig> {
        let mut config = match &self.config {
            Some(path) => PackConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => PackConfig::default(),
        };

        if let Some(root) = &self.source_root {
            config = config.with_source_root(root);
        }
        if let Some(root) = &self.output_root {
            config = config.with_output_root(root);
        }
        if self.verbose {
            config = config.with_log_level(LogLevel::Debug);
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}
