use std::path::{Path, PathBuf};

use openspool_presets::presets::{load_base_temp_map, read_presets, TemperatureRange};
use openspool_presets::{default_config, generate, load_config, GeneratorConfig, PresetError};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Config reading the checked-in library and writing into `out_dir`.
fn fixture_config(out_dir: &Path) -> GeneratorConfig {
    let mut config = default_config();
    config.filament_dir = fixture_path("filament");
    config.output = out_dir.join("assets").join("presets.json");
    config
}

fn write(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_fixture_library_matches_expected_table() {
    let out = tempfile::tempdir().expect("Failed to create temp dir");
    let config = fixture_config(out.path());

    let summary = generate(&config, out.path()).expect("Generation failed");

    let written = std::fs::read_to_string(&config.output).expect("Output not written");
    let expected = std::fs::read_to_string(fixture_path("expected_presets.json"))
        .expect("Failed to read expected table");
    assert_eq!(
        written, expected,
        "Generated table differs from fixture.\nGot:\n{}",
        written
    );

    assert_eq!(summary.written, 6);
    assert_eq!(summary.resolved, 5);
    assert_eq!(summary.unresolved, 1);
    // "Generic @System.json" has no material word
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.output, config.output);
}

#[test]
fn test_fixture_base_map() {
    let config = default_config();
    let map = load_base_temp_map(&fixture_path("filament").join("base"), &config.conventions)
        .expect("Failed to load base map");

    // common is excluded, asa lacks hot_plate_temp, tpu is malformed
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["PA", "PETG", "PLA", "PPA-CF"]);
    assert_eq!(map.get("PLA"), Some(&TemperatureRange::new(190, 220, 55, 60)));
    assert_eq!(map.get("PETG"), Some(&TemperatureRange::new(230, 260, 70, 80)));
    assert_eq!(map.get("PPA-CF"), Some(&TemperatureRange::new(280, 310, 100, 100)));
}

#[test]
fn test_generated_table_reads_back() {
    let out = tempfile::tempdir().unwrap();
    let config = fixture_config(out.path());
    generate(&config, out.path()).unwrap();

    let presets = read_presets(&config.output);
    assert_eq!(presets.len(), 6);

    let acme = &presets[0];
    assert_eq!(acme.brand, "Acme");
    assert_eq!(acme.material_type, "PLA");
    assert_eq!(acme.subtype, "Matte");
    assert_eq!(acme.display_name, "Acme PLA Matte");
    assert_eq!(acme.temperatures(), Some(TemperatureRange::new(190, 220, 55, 60)));

    let names: Vec<String> = presets.iter().map(|p| p.display_name.to_lowercase()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "Table must be ordered by lowercase display name");
}

#[test]
fn test_missing_filament_dir_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let config = default_config();

    let err = generate(&config, root.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PresetError>(),
        Some(PresetError::MissingFilamentDir(_))
    ));
    assert!(!root.path().join(&config.output).exists(), "No output on failure");
}

#[test]
fn test_missing_base_dir_writes_table_without_temperatures() {
    let root = tempfile::tempdir().unwrap();
    let config = default_config();
    write(
        &root.path().join(&config.filament_dir).join("Acme PLA @System.json"),
        "{}",
    );

    let summary = generate(&config, root.path()).expect("Missing base dir must not be fatal");
    assert_eq!(summary.written, 1);
    assert_eq!(summary.resolved, 0);
    assert_eq!(summary.unresolved, 1);

    let json = std::fs::read_to_string(&summary.output).expect("Output not written");
    assert!(!json.contains("min_temp"), "Unresolved rows carry no temperatures");

    let presets = read_presets(&summary.output);
    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0].display_name, "Acme PLA");
    assert_eq!(presets[0].temperatures(), None);
}

#[test]
fn test_default_layout_end_to_end() {
    let root = tempfile::tempdir().unwrap();
    let config = default_config();
    let library = root.path().join(&config.filament_dir);

    write(
        &library.join("base").join("fdm_filament_pla.json"),
        r#"{
            "filament_type": ["PLA"],
            "nozzle_temperature_range_low": ["190"],
            "nozzle_temperature_range_high": ["220"],
            "hot_plate_temp": ["55"],
            "hot_plate_temp_initial_layer": ["60"]
        }"#,
    );
    write(&library.join("Acme PLA Matte @System.json"), "{}");

    let summary = generate(&config, root.path()).unwrap();
    assert_eq!(summary.written, 1);

    let output = root.path().join(&config.output);
    assert!(output.ends_with("android/openspool-tag-writer/app/src/main/assets/presets.json"));

    let json = std::fs::read_to_string(&output).unwrap();
    assert!(json.ends_with("}\n]\n"));

    let presets = read_presets(&output);
    assert_eq!(presets[0].display_name, "Acme PLA Matte");
    assert_eq!(presets[0].min_temp, Some(190));
    assert_eq!(presets[0].max_temp, Some(220));
    assert_eq!(presets[0].bed_min_temp, Some(55));
    assert_eq!(presets[0].bed_max_temp, Some(60));
}

#[test]
fn test_override_file_relocates_library() {
    let root = tempfile::tempdir().unwrap();
    write(
        &root.path().join("presets.toml"),
        r#"
        filament_dir = "lib/filament"
        output = "out/table.json"
        "#,
    );
    write(
        &root.path().join("lib/filament/base/fdm_filament_abs.json"),
        r#"{
            "nozzle_temperature_range_low": ["240"],
            "nozzle_temperature_range_high": ["280"],
            "hot_plate_temp": ["100"],
            "hot_plate_temp_initial_layer": ["90"]
        }"#,
    );
    write(&root.path().join("lib/filament/Acme/Acme ABS+ @System.json"), "{}");

    let config = load_config(root.path()).unwrap();
    let summary = generate(&config, root.path()).unwrap();
    assert_eq!(summary.output, root.path().join("out/table.json"));

    let presets = read_presets(&summary.output);
    assert_eq!(presets.len(), 1);
    assert_eq!(presets[0].display_name, "Acme ABS+");
    // Key came from the file name; the type resolved through the fuzzy ABS rule
    assert_eq!(presets[0].temperatures(), Some(TemperatureRange::new(240, 280, 90, 100)));
}
