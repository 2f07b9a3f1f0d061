use anyhow::Result;
use serde_json::{Map, Value};

/// An Orca/Bambu filament profile.
///
/// Wraps the raw JSON `Map<String, Value>` so profiles with any field set can
/// be read. Only the handful of fields the preset table needs get typed
/// accessors, and all of them are lenient: a field with an unexpected shape
/// reads as `None` instead of failing the whole file.
#[derive(Debug, Clone)]
pub struct FilamentProfile {
    data: Map<String, Value>,
}

impl FilamentProfile {
    /// Parse a filament profile from a JSON string. The document must be an
    /// object.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self { data })
    }

    // --- Typed accessors (all return Option) ---

    /// Profile display name (bare string field).
    pub fn name(&self) -> Option<&str> {
        self.data.get("name")?.as_str()
    }

    /// Declared material type aliases (e.g. `["PLA"]`, `["PA", "PA6"]`).
    ///
    /// Returns `None` when the field is missing, not an array, or empty.
    /// Elements are stringified, trimmed and uppercased; blank ones are
    /// dropped, so a declared list can still come back empty.
    pub fn filament_types(&self) -> Option<Vec<String>> {
        let values = self.data.get("filament_type")?.as_array()?;
        if values.is_empty() {
            return None;
        }
        Some(
            values
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.trim().to_uppercase(),
                    other => other.to_string().trim().to_uppercase(),
                })
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    /// Lower bound of the recommended nozzle temperature.
    pub fn nozzle_temperature_range_low(&self) -> Option<i32> {
        self.first_int("nozzle_temperature_range_low")
    }

    /// Upper bound of the recommended nozzle temperature.
    pub fn nozzle_temperature_range_high(&self) -> Option<i32> {
        self.first_int("nozzle_temperature_range_high")
    }

    /// Steady-state bed temperature on the hot plate.
    pub fn hot_plate_temp(&self) -> Option<i32> {
        self.first_int("hot_plate_temp")
    }

    /// First-layer bed temperature on the hot plate.
    pub fn hot_plate_temp_initial_layer(&self) -> Option<i32> {
        self.first_int("hot_plate_temp_initial_layer")
    }

    // --- Helpers ---

    /// Coerce the first element of an array field to an integer.
    ///
    /// Profiles store numbers as strings (`["220"]`), but plain JSON integers
    /// are accepted too. Fractions, booleans and non-numeric strings read as
    /// `None`, as do missing, non-array and empty fields.
    pub fn first_int(&self, key: &str) -> Option<i32> {
        match self.data.get(key)?.as_array()?.first()? {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            _ => None,
        }
    }

    /// Number of fields in the profile.
    pub fn field_count(&self) -> usize {
        self.data.len()
    }
}
