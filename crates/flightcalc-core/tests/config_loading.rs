//! Tests for loading the catalog and calculator config from disk

use flightcalc_core::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a file into the temp dir and return its path
fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = create_temp_file(
        &dir,
        "catalog.json",
        r#"{
            "payload_items": [
                { "id": "thermal", "name": "Thermal Camera", "mass_grams": 410.0 },
                { "id": "lidar_rev6", "name": "Lidar Rev 6", "mass_grams": 590.0, "exclusive_group": "lidar" },
                { "id": "lidar_rev7", "name": "Lidar Rev 7", "mass_grams": 830.0, "exclusive_group": "lidar" }
            ],
            "battery_options": [
                { "id": "long_range", "name": "Long Range", "capacity_wh": 222.0, "mass_grams": 1500.0 }
            ]
        }"#,
    );

    let catalog = Catalog::load(&path).expect("Should load catalog");
    assert_eq!(catalog.payload_items.len(), 3);
    assert_eq!(
        catalog.payload_item("thermal"),
        Some(&PayloadItem::new("thermal", "Thermal Camera", 410.0))
    );
    assert_eq!(
        catalog.battery_option("long_range").map(|b| b.capacity_wh),
        Some(222.0)
    );
}

#[test]
fn test_catalog_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");

    let catalog = Catalog::default();
    catalog.save(&path).unwrap();
    let reloaded = Catalog::load(&path).unwrap();

    assert_eq!(reloaded, catalog);
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(dir.path().join("nope.json"));
    assert!(matches!(result, Err(CalcError::IoError(_))));
}

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = create_temp_file(
        &dir,
        "config.json",
        r#"{
            "base_mass_grams": 2400,
            "lighting": "high",
            "preset_weights": [ { "label": "Demo", "grams": 999 } ]
        }"#,
    );

    let config = CalculatorConfig::load(&path).unwrap();
    assert_eq!(config.base_mass_grams, 2400.0);
    assert_eq!(config.lighting, LightingLevel::High);
    assert_eq!(config.aux_power_w, 5.0);
    assert_eq!(config.preset_weights.len(), 1);
}

#[test]
fn test_calculator_from_files() {
    let dir = TempDir::new().unwrap();
    let catalog_path = create_temp_file(
        &dir,
        "catalog.json",
        r#"{ "payload_items": [ { "id": "box", "name": "Box", "mass_grams": 80.0 } ] }"#,
    );
    let config_path = create_temp_file(
        &dir,
        "config.json",
        r#"{ "base_mass_grams": 1000, "aux_power_w": 0, "lighting": "off" }"#,
    );

    let mut calc = Calculator::from_files(&catalog_path, &config_path).unwrap();
    assert_eq!(calc.result().total_mass_grams, 1000.0);

    let update = calc.toggle_payload_item("box").unwrap();
    assert_eq!(update.result.total_mass_grams, 1080.0);
    assert!(calc.select_battery("dual_pack").is_err());
}

#[test]
fn test_invalid_catalog_rejected_by_from_files() {
    let dir = TempDir::new().unwrap();
    let catalog_path = create_temp_file(
        &dir,
        "catalog.json",
        r#"{ "payload_items": [
            { "id": "x", "name": "X", "mass_grams": 1.0 },
            { "id": "x", "name": "Y", "mass_grams": 2.0 }
        ] }"#,
    );
    let config_path = create_temp_file(&dir, "config.json", "{}");

    let result = Calculator::from_files(&catalog_path, &config_path);
    assert!(matches!(result, Err(CalcError::DuplicateId(_))));
}
