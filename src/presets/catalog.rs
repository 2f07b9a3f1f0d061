//! Vendor profile discovery and preset table assembly.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::naming::parse_profile_name;
use super::normalize::resolve;
use super::temps::BaseMaterialMap;
use super::types::PresetEntry;

/// A vendor-provided profile file found in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemProfile {
    pub path: PathBuf,
    pub file_name: String,
    /// Name of the enclosing directory, or `None` directly under the root.
    pub brand_dir: Option<String>,
}

/// Find every system profile under `root`.
///
/// Matches files whose name ends with `system_suffix`, at any depth, except
/// those with an `excluded_dir` component below `root` (the base material
/// directory). Sorted by path so runs are reproducible.
pub fn find_system_profiles(
    root: &Path,
    system_suffix: &str,
    excluded_dir: &str,
) -> Vec<SystemProfile> {
    let mut profiles: Vec<SystemProfile> = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == excluded_dir))
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            debug!("Skipping non-UTF-8 file name {:?}", entry.path());
            continue;
        };
        if !file_name.ends_with(system_suffix) {
            continue;
        }

        let brand_dir = if entry.depth() > 1 {
            entry
                .path()
                .parent()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
        } else {
            None
        };

        profiles.push(SystemProfile {
            path: entry.path().to_path_buf(),
            file_name: file_name.to_string(),
            brand_dir,
        });
    }

    profiles.sort_by(|a, b| a.path.to_string_lossy().cmp(&b.path.to_string_lossy()));

    debug!("Found {} system profiles under {:?}", profiles.len(), root);
    profiles
}

/// Turn system profiles into preset rows, sorted by case-insensitive
/// display name.
///
/// Profiles whose file name does not parse are left out. The sort is
/// stable, so rows with equal keys keep their path order.
pub fn build_presets(
    profiles: &[SystemProfile],
    base_map: &BaseMaterialMap,
    system_suffix: &str,
) -> Vec<PresetEntry> {
    let mut presets = Vec::with_capacity(profiles.len());
    let mut unresolved: BTreeSet<String> = BTreeSet::new();

    for profile in profiles {
        let Some(name) =
            parse_profile_name(&profile.file_name, profile.brand_dir.as_deref(), system_suffix)
        else {
            debug!("Skipping {:?}: no brand and material in name", profile.path);
            continue;
        };

        let temps = match resolve(&name.material_type, base_map) {
            Some(resolution) => {
                debug!(
                    "{} -> {} (rule {})",
                    name.material_type, resolution.key, resolution.rule
                );
                base_map.get(&resolution.key).copied()
            }
            None => {
                unresolved.insert(name.material_type.clone());
                None
            }
        };

        presets.push(PresetEntry::new(
            name.brand,
            name.material_type,
            name.subtype,
            temps,
        ));
    }

    if !unresolved.is_empty() {
        warn!(
            "No base material for {} type(s): {}",
            unresolved.len(),
            unresolved.into_iter().collect::<Vec<_>>().join(", ")
        );
    }

    presets.sort_by_cached_key(PresetEntry::sort_key);
    presets
}

/// Read a previously generated preset table.
///
/// Lenient: string fields are trimmed, temperatures are read when they are
/// integers, and rows with a blank brand or type are dropped. An unreadable
/// file, a document that is not an array, or any row that is not an object
/// gives an empty table.
pub fn read_presets(path: &Path) -> Vec<PresetEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Could not read preset table {:?}: {}", path, e);
            return Vec::new();
        }
    };
    let rows: Vec<Value> = match serde_json::from_str(&content) {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Could not parse preset table {:?}: {}", path, e);
            return Vec::new();
        }
    };

    let Some(objects) = rows.iter().map(Value::as_object).collect::<Option<Vec<_>>>() else {
        warn!("Preset table {:?} has a row that is not an object", path);
        return Vec::new();
    };

    let presets: Vec<PresetEntry> = objects
        .into_iter()
        .map(|obj| {
            let text = |key: &str| {
                obj.get(key)
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .trim()
                    .to_string()
            };
            let int = |key: &str| {
                obj.get(key)
                    .and_then(Value::as_i64)
                    .and_then(|n| i32::try_from(n).ok())
            };
            PresetEntry {
                brand: text("brand"),
                material_type: text("type"),
                subtype: text("subtype"),
                display_name: text("display_name"),
                min_temp: int("min_temp"),
                max_temp: int("max_temp"),
                bed_min_temp: int("bed_min_temp"),
                bed_max_temp: int("bed_max_temp"),
            }
        })
        .filter(|p| !p.brand.is_empty() && !p.material_type.is_empty())
        .collect();

    info!("Read {} presets from {:?}", presets.len(), path);
    presets
}
