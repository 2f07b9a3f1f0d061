//! Preset table generation.
//!
//! Base material profiles give canonical temperature ranges per polymer.
//! Vendor system profiles are named "Brand Type Subtype @System.json"; each
//! becomes one preset row, with temperatures taken from the base material
//! its type resolves to.
//!
//! # Example
//!
//! ```ignore
//! use openspool_presets::presets::{build_presets, find_system_profiles, load_base_temp_map};
//!
//! let base = load_base_temp_map(&paths.base_dir, &config.conventions)?;
//! let profiles = find_system_profiles(&paths.filament_dir, " @System.json", "base");
//! let presets = build_presets(&profiles, &base, " @System.json");
//! ```

mod catalog;
mod naming;
pub mod normalize;
mod temps;
mod types;

pub use catalog::{build_presets, find_system_profiles, read_presets, SystemProfile};
pub use naming::{parse_profile_name, PresetName};
pub use normalize::{normalize, resolve, KnownKeys, Resolution};
pub use temps::{key_from_file_name, load_base_temp_map, BaseMaterialMap, TemperatureRange};
pub use types::{GenerationSummary, PresetEntry};
