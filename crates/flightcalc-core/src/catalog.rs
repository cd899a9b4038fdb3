//! Payload and Battery Catalog
//!
//! Static definitions of the add-ons and battery presets a user can pick.
//! The catalog is loaded once at startup, either from the built-in defaults
//! or from a JSON file, and items are referenced by stable id afterwards.
//!
//! ```json
//! {
//!   "payload_items": [
//!     { "id": "lidar_rev6", "name": "Lidar Rev 6", "mass_grams": 590.0, "exclusive_group": "lidar" }
//!   ],
//!   "battery_options": [
//!     { "id": "dual_pack", "name": "Dual 98.8 Wh pack", "capacity_wh": 197.6, "mass_grams": 1300.0 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// An optional add-on module with a fixed mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadItem {
    /// Stable identifier
    pub id: String,
    /// Display label
    pub name: String,
    pub mass_grams: f64,
    /// Items sharing a group are mutually exclusive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_group: Option<String>,
}

impl PayloadItem {
    /// Create an item with no exclusivity group
    pub fn new(id: impl Into<String>, name: impl Into<String>, mass_grams: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mass_grams,
            exclusive_group: None,
        }
    }

    /// Put the item into a mutually exclusive group
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.exclusive_group = Some(group.into());
        self
    }
}

/// A battery preset with capacity and its own mass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryOption {
    /// Stable identifier
    pub id: String,
    /// Display label
    pub name: String,
    pub capacity_wh: f64,
    pub mass_grams: f64,
}

impl BatteryOption {
    /// Create a battery preset
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity_wh: f64,
        mass_grams: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity_wh,
            mass_grams,
        }
    }
}

/// Every payload item and battery preset available to the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub payload_items: Vec<PayloadItem>,
    #[serde(default)]
    pub battery_options: Vec<BatteryOption>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            payload_items: vec![
                PayloadItem::new("camera_gimbal", "Camera Gimbal", 350.0),
                PayloadItem::new("lidar_rev6", "Lidar Rev 6", 590.0).in_group("lidar"),
                PayloadItem::new("lidar_rev7", "Lidar Rev 7", 830.0).in_group("lidar"),
                PayloadItem::new("rtk_gps", "RTK GPS", 120.0),
                PayloadItem::new("spotlight", "Spotlight", 210.0),
                PayloadItem::new("parachute", "Parachute", 280.0),
            ],
            battery_options: vec![
                BatteryOption::new("single_pack", "Single 98.8 Wh pack", 98.8, 650.0),
                BatteryOption::new("dual_pack", "Dual 98.8 Wh pack", 197.6, 1300.0),
                BatteryOption::new("high_density", "High density 150 Wh", 150.0, 820.0),
            ],
        }
    }
}

impl Catalog {
    /// An empty catalog
    pub fn empty() -> Self {
        Self {
            payload_items: Vec::new(),
            battery_options: Vec::new(),
        }
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(
            "Loaded catalog from {}: {} payload items, {} battery options",
            path.display(),
            catalog.payload_items.len(),
            catalog.battery_options.len()
        );
        Ok(catalog)
    }

    /// Write the catalog as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check id uniqueness and that masses and capacities are usable
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.payload_items {
            if !seen.insert(item.id.as_str()) {
                return Err(CalcError::DuplicateId(item.id.clone()));
            }
            check_non_negative(&item.id, "mass_grams", item.mass_grams)?;
        }

        let mut seen = HashSet::new();
        for option in &self.battery_options {
            if !seen.insert(option.id.as_str()) {
                return Err(CalcError::DuplicateId(option.id.clone()));
            }
            check_non_negative(&option.id, "mass_grams", option.mass_grams)?;
            check_non_negative(&option.id, "capacity_wh", option.capacity_wh)?;
        }
        Ok(())
    }

    /// Look up a payload item by id
    pub fn payload_item(&self, id: &str) -> Option<&PayloadItem> {
        self.payload_items.iter().find(|item| item.id == id)
    }

    /// Look up a battery preset by id
    pub fn battery_option(&self, id: &str) -> Option<&BatteryOption> {
        self.battery_options.iter().find(|option| option.id == id)
    }
}

fn check_non_negative(id: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CalcError::InvalidValue {
            field: format!("{id}.{field}"),
            message: format!("expected a non-negative number, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.payload_item("lidar_rev7").unwrap().exclusive_group.as_deref(),
            Some("lidar")
        );
        assert!(catalog.battery_option("dual_pack").is_some());
        assert!(catalog.payload_item("missing").is_none());
    }

    #[test]
    fn test_duplicate_payload_id() {
        let json = r#"{
            "payload_items": [
                { "id": "a", "name": "A", "mass_grams": 1.0 },
                { "id": "a", "name": "A again", "mass_grams": 2.0 }
            ]
        }"#;
        match Catalog::from_json_str(json) {
            Err(CalcError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("Expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_mass_rejected() {
        let json = r#"{ "battery_options": [
            { "id": "b", "name": "B", "capacity_wh": 50.0, "mass_grams": -1.0 }
        ] }"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CalcError::InvalidValue { .. })
        ));
    }
}
