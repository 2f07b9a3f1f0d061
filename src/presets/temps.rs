//! Base material temperature table.
//!
//! Each `fdm_filament_<material>.json` in the library's `base` directory
//! declares the recommended temperatures for one polymer. This module reads
//! them into a [`BaseMaterialMap`] keyed by canonical material name.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Conventions;
use crate::profile::reader::read_profile;
use crate::profile::types::FilamentProfile;

/// Recommended temperatures for one base material, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureRange {
    nozzle_low: i32,
    nozzle_high: i32,
    bed_min: i32,
    bed_max: i32,
}

impl TemperatureRange {
    /// Build a range from the declared values.
    ///
    /// The two bed temperatures (steady-state and first layer) may be given in
    /// either order; the smaller becomes `bed_min`. Nozzle bounds are kept
    /// exactly as declared, even when low > high.
    pub fn new(nozzle_low: i32, nozzle_high: i32, bed: i32, bed_initial_layer: i32) -> Self {
        Self {
            nozzle_low,
            nozzle_high,
            bed_min: bed.min(bed_initial_layer),
            bed_max: bed.max(bed_initial_layer),
        }
    }

    /// Extract the range from a base material profile.
    ///
    /// Returns `None` unless all four temperature fields are present and
    /// numeric; partial data is never defaulted.
    pub fn from_profile(profile: &FilamentProfile) -> Option<Self> {
        Some(Self::new(
            profile.nozzle_temperature_range_low()?,
            profile.nozzle_temperature_range_high()?,
            profile.hot_plate_temp()?,
            profile.hot_plate_temp_initial_layer()?,
        ))
    }

    pub fn nozzle_low(&self) -> i32 {
        self.nozzle_low
    }

    pub fn nozzle_high(&self) -> i32 {
        self.nozzle_high
    }

    pub fn bed_min(&self) -> i32 {
        self.bed_min
    }

    pub fn bed_max(&self) -> i32 {
        self.bed_max
    }
}

/// Canonical material key (e.g. "PLA", "PPA-CF") to temperature range.
///
/// Keys are uppercase. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseMaterialMap {
    entries: BTreeMap<String, TemperatureRange>,
}

impl BaseMaterialMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the range for `key`. Later inserts win.
    pub fn insert(&mut self, key: impl Into<String>, range: TemperatureRange) {
        self.entries.insert(key.into(), range);
    }

    pub fn get(&self, key: &str) -> Option<&TemperatureRange> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether `file_name` names a concrete base material definition.
fn is_material_file(file_name: &str, conventions: &Conventions) -> bool {
    file_name.starts_with(&conventions.base_prefix)
        && file_name.ends_with(".json")
        && file_name != conventions.common_file
}

/// Key used when a base file declares no `filament_type` list:
/// `fdm_filament_pla.json` -> `PLA`.
pub fn key_from_file_name(file_name: &str, conventions: &Conventions) -> String {
    let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
    stem.strip_prefix(&conventions.base_prefix)
        .unwrap_or(stem)
        .to_uppercase()
}

/// Load the base material table from `base_dir`.
///
/// Files are visited in file name order, so when two files claim the same
/// key the later one wins, reproducibly. Unreadable files and files missing
/// any temperature field are skipped. A missing directory gives an empty map,
/// so every preset is written without temperatures.
pub fn load_base_temp_map(base_dir: &Path, conventions: &Conventions) -> Result<BaseMaterialMap> {
    let mut map = BaseMaterialMap::new();

    if !base_dir.is_dir() {
        warn!("No base material directory at {:?}; presets will have no temperatures", base_dir);
        return Ok(map);
    }

    for entry in WalkDir::new(base_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !path.is_file() || !is_material_file(file_name, conventions) {
            continue;
        }

        let profile = match read_profile(path) {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping unreadable base material: {:#}", e);
                continue;
            }
        };

        let Some(range) = TemperatureRange::from_profile(&profile) else {
            debug!("Skipping {:?}: incomplete temperature fields", path);
            continue;
        };

        match profile.filament_types() {
            Some(aliases) => {
                for alias in aliases {
                    debug!("Base material {} from {:?}", alias, file_name);
                    map.insert(alias, range);
                }
            }
            None => {
                let key = key_from_file_name(file_name, conventions);
                if key.is_empty() {
                    continue;
                }
                debug!("Base material {} from file name {:?}", key, file_name);
                map.insert(key, range);
            }
        }
    }

    info!("Loaded {} base materials from {:?}", map.len(), base_dir);
    Ok(map)
}
