//! Calculator Configuration
//!
//! Initial field values and the preset weights offered by the "Use" buttons.
//! Missing keys in a JSON config fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battery::DEFAULT_CAPACITY_WH;
use crate::error::{CalcError, Result};
use crate::power::LightingLevel;
use crate::unit_conversion::MassUnit;

/// A reference airframe weight that can be copied into the mass field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetWeight {
    pub label: String,
    pub grams: f64,
}

/// Initial session values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub base_mass_grams: f64,
    pub aux_power_w: f64,
    pub battery_capacity_wh: f64,
    pub battery_margin_percent: f64,
    pub lighting: LightingLevel,
    pub display_unit: MassUnit,
    pub preset_weights: Vec<PresetWeight>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_mass_grams: 1920.0,
            aux_power_w: 5.0,
            battery_capacity_wh: DEFAULT_CAPACITY_WH,
            battery_margin_percent: 20.0,
            lighting: LightingLevel::Low,
            display_unit: MassUnit::Grams,
            preset_weights: vec![
                PresetWeight {
                    label: "Bare frame".to_string(),
                    grams: 1450.0,
                },
                PresetWeight {
                    label: "Survey build".to_string(),
                    grams: 1920.0,
                },
                PresetWeight {
                    label: "Heavy lift".to_string(),
                    grams: 3200.0,
                },
            ],
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::info!("Loaded calculator config from {}", path.display());
        Ok(config)
    }

    /// Write the config as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Initial values must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base_mass_grams", self.base_mass_grams),
            ("aux_power_w", self.aux_power_w),
            ("battery_capacity_wh", self.battery_capacity_wh),
            ("battery_margin_percent", self.battery_margin_percent),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::InvalidValue {
                    field: field.to_string(),
                    message: format!("expected a non-negative number, got {value}"),
                });
            }
        }
        for preset in &self.preset_weights {
            if !preset.grams.is_finite() || preset.grams < 0.0 {
                return Err(CalcError::InvalidValue {
                    field: format!("preset_weights.{}", preset.label),
                    message: format!("expected a non-negative number, got {}", preset.grams),
                });
            }
        }
        Ok(())
    }
}
