//! Power Model
//!
//! Empirical hover power draw as a function of all-up mass. The model is a
//! linear term plus a quadratic drag/induced-power term, both in units of
//! hundreds of grams, plus auxiliary electronics and lighting.

use serde::{Deserialize, Serialize};

/// Linear power coefficient (W per 100 g)
pub const LINEAR_COEFFICIENT: f64 = 6.3;

/// Quadratic power coefficient (W per (100 g)²)
pub const QUADRATIC_COEFFICIENT: f64 = 0.66;

/// Navigation/illumination lighting setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightingLevel {
    /// Lights off
    #[default]
    Off,
    /// Low intensity
    Low,
    /// High intensity
    High,
}

impl LightingLevel {
    /// Fixed power draw of this setting in watts
    pub fn power_watts(self) -> f64 {
        match self {
            LightingLevel::Off => 0.0,
            LightingLevel::Low => 20.0,
            LightingLevel::High => 50.0,
        }
    }

    /// Slider position (0, 1, 2)
    pub fn ordinal(self) -> u8 {
        match self {
            LightingLevel::Off => 0,
            LightingLevel::Low => 1,
            LightingLevel::High => 2,
        }
    }

    /// Map a slider position to a level
    ///
    /// 0 is off, 1 is low, anything else is high.
    pub fn from_ordinal(ordinal: i64) -> Self {
        match ordinal {
            0 => LightingLevel::Off,
            1 => LightingLevel::Low,
            _ => LightingLevel::High,
        }
    }
}

/// Power draw split into the terms shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerBreakdown {
    pub mass_over_100: f64,
    pub term1: f64,
    pub term2: f64,
    pub aux_power_w: f64,
    pub lighting_power_w: f64,
    pub total_power_w: f64,
}

/// Compute instantaneous power draw
///
/// # Arguments
/// * `total_mass_grams` - All-up mass including payload and battery
/// * `aux_power_w` - Auxiliary electronics draw
/// * `lighting` - Lighting setting
///
/// Inputs are not validated here; clamping is the caller's job.
pub fn compute_power(
    total_mass_grams: f64,
    aux_power_w: f64,
    lighting: LightingLevel,
) -> PowerBreakdown {
    let mass_over_100 = total_mass_grams / 100.0;
    let term1 = LINEAR_COEFFICIENT * mass_over_100;
    let term2 = QUADRATIC_COEFFICIENT * mass_over_100.powi(2);
    let lighting_power_w = lighting.power_watts();
    let total_power_w = term1 + term2 + aux_power_w + lighting_power_w;

    PowerBreakdown {
        mass_over_100,
        term1,
        term2,
        aux_power_w,
        lighting_power_w,
        total_power_w,
    }
}
