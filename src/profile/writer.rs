use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::presets::PresetEntry;

/// Serialize a preset table the way it is shipped: a 2-space indented JSON
/// array, non-ASCII kept as-is, with a trailing newline.
pub fn presets_to_json(presets: &[PresetEntry]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(presets)?;
    json.push('\n');
    Ok(json)
}

/// Write the preset table to disk atomically.
///
/// Uses a temporary file in the same directory as `target_path`, writes
/// the JSON content, then renames the temp file over the target. Readers
/// see either the previous table or the complete new one.
pub fn write_presets_atomic(presets: &[PresetEntry], target_path: &Path) -> Result<()> {
    let json = presets_to_json(presets)?;

    let parent = target_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Target path has no parent directory: {:?}", target_path))?;

    std::fs::create_dir_all(parent)?;

    // Same filesystem as the target so the rename is atomic
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(json.as_bytes())?;
    temp.flush()?;
    temp.persist(target_path)?;

    debug!("Wrote {} presets to {:?}", presets.len(), target_path);
    Ok(())
}
