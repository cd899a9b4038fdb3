//! Calculation Result
//!
//! The immutable output of one recomputation, plus the formatted strings the
//! presentation layer shows.

use serde::{Deserialize, Serialize};

use crate::flight::{FlightEstimate, FlightTime};
use crate::power::PowerBreakdown;
use crate::unit_conversion::{from_grams, MassUnit};

/// Text shown when flight time has no finite value
pub const UNDEFINED_FLIGHT_TIME: &str = "—";

/// Accepted inputs that produce a questionable result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    /// Margin above 100% leaves negative usable capacity
    MarginAboveHundred,
    /// Auxiliary power is negative (possible while a field is being edited)
    NegativeAuxPower,
    /// Estimated flight time came out negative
    NegativeFlightTime,
    /// Total power is zero so flight time has no value
    FlightTimeUndefined,
}

/// Everything derived from one session snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total mass in hundreds of grams (equal to kg / 0.1 in kilogram mode)
    pub mass_over_100: f64,
    pub term1: f64,
    pub term2: f64,
    pub aux_power_w: f64,
    pub lighting_power_w: f64,
    pub total_power_w: f64,
    pub effective_capacity_wh: f64,
    pub flight_time: FlightTime,
    /// Base mass plus payload plus battery
    pub total_mass_grams: f64,
    /// `total_mass_grams` in the display unit
    pub display_total_mass: f64,
    pub display_unit: MassUnit,
    pub advisories: Vec<Advisory>,
}

impl CalculationResult {
    /// Assemble a result from the model outputs
    pub fn new(
        power: PowerBreakdown,
        flight: FlightEstimate,
        total_mass_grams: f64,
        display_unit: MassUnit,
        margin_percent: f64,
    ) -> Self {
        let mut advisories = Vec::new();
        if margin_percent > 100.0 {
            advisories.push(Advisory::MarginAboveHundred);
        }
        if power.aux_power_w < 0.0 {
            advisories.push(Advisory::NegativeAuxPower);
        }
        match flight.flight_time {
            FlightTime::Minutes(m) if m < 0.0 => advisories.push(Advisory::NegativeFlightTime),
            FlightTime::Undefined => advisories.push(Advisory::FlightTimeUndefined),
            FlightTime::Minutes(_) => {}
        }

        Self {
            mass_over_100: power.mass_over_100,
            term1: power.term1,
            term2: power.term2,
            aux_power_w: power.aux_power_w,
            lighting_power_w: power.lighting_power_w,
            total_power_w: power.total_power_w,
            effective_capacity_wh: flight.effective_capacity_wh,
            flight_time: flight.flight_time,
            total_mass_grams,
            display_total_mass: from_grams(total_mass_grams, display_unit),
            display_unit,
            advisories,
        }
    }

    /// Whether the result carries the given advisory
    pub fn has_advisory(&self, advisory: Advisory) -> bool {
        self.advisories.contains(&advisory)
    }

    /// Format every value for display
    pub fn display(&self) -> DisplayValues {
        let flight_time = match self.flight_time {
            FlightTime::Minutes(m) => format!("{:.1} min", m),
            FlightTime::Undefined => UNDEFINED_FLIGHT_TIME.to_string(),
        };

        DisplayValues {
            mass_over_100: format!("{:.2}", self.mass_over_100),
            term1: format!("{:.2}", self.term1),
            term2: format!("{:.2}", self.term2),
            aux_power: format!("{:.1}", self.aux_power_w),
            lighting_power: format!("{:.1}", self.lighting_power_w),
            total_power: format!("{:.2} W", self.total_power_w),
            effective_capacity: format!("{:.1} Wh", self.effective_capacity_wh),
            flight_time,
            total_mass: format!(
                "{:.*} {}",
                self.display_unit.field_decimals(),
                self.display_total_mass,
                self.display_unit
            ),
        }
    }
}

/// Display strings for each result value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValues {
    pub mass_over_100: String,
    pub term1: String,
    pub term2: String,
    pub aux_power: String,
    pub lighting_power: String,
    pub total_power: String,
    pub effective_capacity: String,
    pub flight_time: String,
    pub total_mass: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::estimate_flight;
    use crate::power::{compute_power, LightingLevel};

    #[test]
    fn test_display_formatting() {
        let power = compute_power(1920.0, 5.0, LightingLevel::Low);
        let flight = estimate_flight(power.total_power_w, 98.8, 20.0);
        let result = CalculationResult::new(power, flight, 1920.0, MassUnit::Kilograms, 20.0);
        let display = result.display();

        assert_eq!(display.mass_over_100, "19.20");
        assert_eq!(display.term1, "120.96");
        assert_eq!(display.term2, "243.30");
        assert_eq!(display.aux_power, "5.0");
        assert_eq!(display.lighting_power, "20.0");
        assert_eq!(display.total_power, "389.26 W");
        assert_eq!(display.effective_capacity, "79.0 Wh");
        assert_eq!(display.flight_time, "12.2 min");
        assert_eq!(display.total_mass, "1.920 kg");
        assert!(result.advisories.is_empty());
    }

    #[test]
    fn test_undefined_flight_time_display() {
        let power = compute_power(0.0, 0.0, LightingLevel::Off);
        let flight = estimate_flight(power.total_power_w, 98.8, 20.0);
        let result = CalculationResult::new(power, flight, 0.0, MassUnit::Grams, 20.0);
        assert_eq!(result.display().flight_time, UNDEFINED_FLIGHT_TIME);
        assert!(result.has_advisory(Advisory::FlightTimeUndefined));
    }

    #[test]
    fn test_margin_advisories() {
        let power = compute_power(1000.0, 0.0, LightingLevel::Off);
        let flight = estimate_flight(power.total_power_w, 98.8, 120.0);
        let result = CalculationResult::new(power, flight, 1000.0, MassUnit::Grams, 120.0);
        assert!(result.has_advisory(Advisory::MarginAboveHundred));
        assert!(result.has_advisory(Advisory::NegativeFlightTime));
    }
}
