pub mod config;
mod error;
pub mod presets;
pub mod profile;

use std::path::Path;

use anyhow::Result;
use tracing::info;

pub use config::{default_config, load_config, GeneratorConfig};
pub use error::PresetError;
pub use presets::{GenerationSummary, PresetEntry};

use presets::{build_presets, find_system_profiles, load_base_temp_map};
use profile::writer::write_presets_atomic;
use profile::LibraryPaths;

/// Generate the preset table for the repository at `repo_root`.
///
/// Fails if the filament library is missing or the table cannot be written.
/// A missing base directory only leaves every preset without temperatures,
/// and individual unusable profile files are skipped.
pub fn generate(config: &GeneratorConfig, repo_root: &Path) -> Result<GenerationSummary> {
    let paths = LibraryPaths::resolve(config, repo_root)?;
    let suffix = &config.conventions.system_suffix;

    let base_map = load_base_temp_map(&paths.base_dir, &config.conventions)?;
    let profiles = find_system_profiles(&paths.filament_dir, suffix, &config.base_subdir);
    let presets = build_presets(&profiles, &base_map, suffix);

    write_presets_atomic(&presets, &paths.output)?;

    let resolved = presets.iter().filter(|p| p.temperatures().is_some()).count();
    Ok(GenerationSummary {
        written: presets.len(),
        resolved,
        unresolved: presets.len() - resolved,
        skipped: profiles.len() - presets.len(),
        output: paths.output,
    })
}

/// Entry point of the `generate-presets` binary.
///
/// Logs at `info` unless `RUST_LOG` says otherwise, and treats the current
/// directory as the repository root.
pub fn run() -> Result<GenerationSummary> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let repo_root = std::env::current_dir()?;
    let config = load_config(&repo_root)?;
    let summary = generate(&config, &repo_root)?;

    info!(
        "Wrote {} presets to {:?} ({} with temperatures, {} unresolved, {} skipped)",
        summary.written, summary.output, summary.resolved, summary.unresolved, summary.skipped
    );
    Ok(summary)
}
