//! Shared configuration loader for antisync.
//!
//! `defaults/antisync.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`AntisyncConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/antisync.default.toml");

/// Top-level configuration consumed by antisync applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AntisyncConfig {
    pub scan: ScanConfig,
    pub report: ReportConfig,
    #[serde(default)]
    pub targets: HashMap<String, TargetConfig>,
}

impl AntisyncConfig {
    /// Settings for the deployment target called `name`.
    pub fn target(&self, name: &str) -> Result<&TargetConfig, ConfigError> {
        self.targets
            .get(name)
            .ok_or_else(|| ConfigError::Message(format!("Configuration for {name} not found")))
    }
}

/// Source file discovery.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub skip_hidden: bool,
}

/// Console reporting.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub verbose: bool,
}

/// One deployment destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetConfig {
    /// Base URL of the blog, without trailing slash
    pub url: String,
}

impl TargetConfig {
    /// Public URL of the entry with `id`.
    pub fn entry_url(&self, id: i64) -> String {
        format!("{}/entry/{id}", self.url.trim_end_matches('/'))
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AntisyncConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AntisyncConfig, ConfigError> {
    Loader::new().build()
}
