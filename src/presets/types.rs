use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::naming::display_name;
use super::temps::TemperatureRange;

/// One row of the generated preset table.
///
/// Temperatures are present only when the material type resolved to a base
/// material; otherwise all four are omitted from the JSON rather than
/// written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    pub brand: String,
    #[serde(rename = "type")]
    pub material_type: String,
    pub subtype: String,
    pub display_name: String,
    /// Nozzle low bound (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_temp: Option<i32>,
    /// Nozzle high bound (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_temp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_min_temp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bed_max_temp: Option<i32>,
}

impl PresetEntry {
    pub fn new(
        brand: impl Into<String>,
        material_type: impl Into<String>,
        subtype: impl Into<String>,
        temps: Option<TemperatureRange>,
    ) -> Self {
        let brand = brand.into();
        let material_type = material_type.into();
        let subtype = subtype.into();
        let display_name = display_name(&brand, &material_type, &subtype);

        Self {
            brand,
            material_type,
            subtype,
            display_name,
            min_temp: temps.map(|t| t.nozzle_low()),
            max_temp: temps.map(|t| t.nozzle_high()),
            bed_min_temp: temps.map(|t| t.bed_min()),
            bed_max_temp: temps.map(|t| t.bed_max()),
        }
    }

    /// The temperature range, if all four values are present.
    pub fn temperatures(&self) -> Option<TemperatureRange> {
        Some(TemperatureRange::new(
            self.min_temp?,
            self.max_temp?,
            self.bed_min_temp?,
            self.bed_max_temp?,
        ))
    }

    /// Key the table is ordered by.
    pub fn sort_key(&self) -> String {
        self.display_name.to_lowercase()
    }
}

/// Outcome of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Presets written to the table
    pub written: usize,
    /// Presets with temperatures attached
    pub resolved: usize,
    /// Presets whose type matched no base material
    pub unresolved: usize,
    /// System profiles whose file name did not yield a preset
    pub skipped: usize,
    pub output: PathBuf,
}
