//! Generator configuration.
//!
//! Library locations and file naming conventions come from the TOML embedded
//! at compile time (`config/presets.toml`). A `presets.toml` placed in the
//! repository root overrides individual keys; anything it omits keeps the
//! embedded value.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::PresetError;

/// Default configuration embedded in the binary at compile time.
const DEFAULT_CONFIG: &str = include_str!("../config/presets.toml");

/// Name of the optional override file looked up in the repository root.
pub const OVERRIDE_FILE: &str = "presets.toml";

/// Where the libraries live and where the table is written.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Vendor profile root, relative to the repository root.
    pub filament_dir: PathBuf,
    /// Base material directory, relative to `filament_dir`. Also the name of
    /// the subdirectory excluded from the vendor profile walk.
    pub base_subdir: String,
    /// Output file, relative to the repository root.
    pub output: PathBuf,
    pub conventions: Conventions,
}

/// File naming conventions of the filament library.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Conventions {
    /// Suffix identifying vendor-provided ("system") profiles.
    pub system_suffix: String,
    /// Prefix of base material file names.
    pub base_prefix: String,
    /// Base file holding shared defaults; never treated as a material.
    pub common_file: String,
}

impl Default for Conventions {
    fn default() -> Self {
        default_config().conventions
    }
}

/// Get the configuration embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_config() -> GeneratorConfig {
    toml::from_str(DEFAULT_CONFIG).expect("embedded presets.toml must be valid TOML")
}

/// Load the configuration for a repository root.
///
/// Returns the embedded defaults when `<repo_root>/presets.toml` does not
/// exist. A present but unreadable or malformed override is an error.
pub fn load_config(repo_root: &Path) -> Result<GeneratorConfig> {
    let override_path = repo_root.join(OVERRIDE_FILE);
    if !override_path.is_file() {
        debug!("No {} in {:?}, using embedded defaults", OVERRIDE_FILE, repo_root);
        return Ok(default_config());
    }

    let content = std::fs::read_to_string(&override_path)?;
    let config = merge_override(&content)
        .map_err(|e| PresetError::Config(format!("{}: {}", override_path.display(), e)))?;

    info!("Loaded configuration overrides from {:?}", override_path);
    Ok(config)
}

/// Apply an override document on top of the embedded defaults.
pub fn merge_override(content: &str) -> Result<GeneratorConfig, toml::de::Error> {
    let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
    let overrides: toml::Table = toml::from_str(content)?;
    merge_tables(&mut base, overrides);
    toml::Value::Table(base).try_into()
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
