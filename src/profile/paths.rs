use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::PresetError;

/// Resolved locations of the filament library and the generated table.
#[derive(Debug, Clone)]
pub struct LibraryPaths {
    /// Vendor profile root (e.g., .../OrcaFilamentLibrary/filament/)
    pub filament_dir: PathBuf,
    /// Base material definitions (e.g., .../filament/base/)
    pub base_dir: PathBuf,
    /// Where the preset table is written
    pub output: PathBuf,
}

impl LibraryPaths {
    /// Resolve configured paths against `repo_root`.
    ///
    /// Fails with [`PresetError::MissingFilamentDir`] if the vendor profile
    /// root is not a directory. The base directory may be absent.
    pub fn resolve(config: &GeneratorConfig, repo_root: &Path) -> Result<Self> {
        let filament_dir = repo_root.join(&config.filament_dir);
        if !filament_dir.is_dir() {
            return Err(PresetError::MissingFilamentDir(filament_dir).into());
        }

        let base_dir = filament_dir.join(&config.base_subdir);
        let output = repo_root.join(&config.output);

        debug!(
            "Resolved filament library at {:?}, base materials at {:?}, output {:?}",
            filament_dir, base_dir, output
        );

        Ok(Self {
            filament_dir,
            base_dir,
            output,
        })
    }
}
