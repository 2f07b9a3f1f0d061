use anyhow::{Context, Result};
use std::path::Path;
use tracing::trace;

use super::types::FilamentProfile;

/// Read a filament profile from a JSON file on disk.
///
/// The error carries the file path so callers that skip bad files can log
/// a useful message.
pub fn read_profile(path: &Path) -> Result<FilamentProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let profile = FilamentProfile::from_json(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    trace!(
        "Read profile {:?} with {} fields from {:?}",
        profile.name().unwrap_or("<unnamed>"),
        profile.field_count(),
        path
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_profile_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fdm_filament_pla.json");
        std::fs::write(&path, r#"{"name": "fdm_filament_pla", "filament_type": ["PLA"]}"#).unwrap();

        let profile = read_profile(&path).unwrap();
        assert_eq!(profile.name(), Some("fdm_filament_pla"));
    }

    #[test]
    fn test_read_profile_errors_mention_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let err = read_profile(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));

        let missing = dir.path().join("missing.json");
        assert!(read_profile(&missing).is_err());
    }
}
