//! Flight Time Estimation
//!
//! Usable battery energy after the safety margin, divided by power draw.

use serde::{Deserialize, Serialize};

/// Estimated flight duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "minutes", rename_all = "snake_case")]
pub enum FlightTime {
    /// Finite duration in minutes (negative when the margin exceeds 100%)
    Minutes(f64),
    /// Power draw is zero, so no finite duration exists
    Undefined,
}

impl FlightTime {
    /// Minutes if defined
    pub fn minutes(self) -> Option<f64> {
        match self {
            FlightTime::Minutes(m) => Some(m),
            FlightTime::Undefined => None,
        }
    }

    /// True for the zero-power sentinel
    pub fn is_undefined(self) -> bool {
        matches!(self, FlightTime::Undefined)
    }
}

/// Result of a flight estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightEstimate {
    pub effective_capacity_wh: f64,
    pub flight_time: FlightTime,
}

/// Estimate flight time from power draw and battery
///
/// # Arguments
/// * `total_power_w` - Instantaneous power draw
/// * `battery_capacity_wh` - Nominal battery capacity
/// * `margin_percent` - Share of capacity held in reserve
///
/// Zero power (or any other input giving a non-finite quotient) produces
/// [`FlightTime::Undefined`].
pub fn estimate_flight(
    total_power_w: f64,
    battery_capacity_wh: f64,
    margin_percent: f64,
) -> FlightEstimate {
    let effective_capacity_wh = battery_capacity_wh * (1.0 - margin_percent / 100.0);

    let flight_time = if total_power_w == 0.0 {
        FlightTime::Undefined
    } else {
        let minutes = effective_capacity_wh / total_power_w * 60.0;
        if minutes.is_finite() {
            FlightTime::Minutes(minutes)
        } else {
            FlightTime::Undefined
        }
    };

    FlightEstimate {
        effective_capacity_wh,
        flight_time,
    }
}
