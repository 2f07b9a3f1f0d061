use std::path::PathBuf;

use thiserror::Error;

/// Conditions that abort a generation run.
///
/// Individual unreadable or incomplete profile files are never reported
/// here; they are skipped where they are read.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("Missing filament library directory: {}", .0.display())]
    MissingFilamentDir(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}
