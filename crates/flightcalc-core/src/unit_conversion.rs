//! Unit Conversion Functions
//!
//! Mass conversion for the calculator:
//! - Grams ↔ Kilograms
//!
//! Grams are the canonical unit. Conversion never clamps; negative values
//! pass through unchanged and are handled by input validation instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Mass unit used for input and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    /// Grams (canonical)
    #[default]
    Grams,
    /// Kilograms
    Kilograms,
}

impl MassUnit {
    /// Short symbol shown next to values
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Grams => "g",
            MassUnit::Kilograms => "kg",
        }
    }

    /// Number of decimal places used when writing a mass into an input field
    pub fn field_decimals(self) -> usize {
        match self {
            MassUnit::Grams => 0,
            MassUnit::Kilograms => 3,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MassUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(MassUnit::Grams),
            "kg" | "kilogram" | "kilograms" => Ok(MassUnit::Kilograms),
            _ => Err(CalcError::UnknownUnit(s.to_string())),
        }
    }
}

/// Convert a value expressed in `unit` to grams
pub fn to_grams(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Grams => value,
        MassUnit::Kilograms => value * GRAMS_PER_KILOGRAM,
    }
}

/// Convert grams to a value expressed in `unit`
pub fn from_grams(grams: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Grams => grams,
        MassUnit::Kilograms => grams / GRAMS_PER_KILOGRAM,
    }
}

/// Round a value in `unit` to the precision shown in input fields
///
/// Kilograms keep 3 decimals, grams are whole numbers.
pub fn round_for_display(value: f64, unit: MassUnit) -> f64 {
    let scale = 10f64.powi(unit.field_decimals() as i32);
    (value * scale).round() / scale
}

/// Convert grams to `unit` and round for the input field
pub fn grams_to_field(grams: f64, unit: MassUnit) -> f64 {
    round_for_display(from_grams(grams, unit), unit)
}
