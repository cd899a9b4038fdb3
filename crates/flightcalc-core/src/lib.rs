//! # FlightCalc Core Library
//!
//! Computational core for the FlightCalc drone power and flight time calculator.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Mass unit conversion (grams ↔ kilograms)
//! - Payload add-on tracking with mutually exclusive groups
//! - Battery preset selection
//! - The empirical mass-to-power model and flight time estimation
//! - A session-owning calculator that recomputes on every input change
//!
//! ## Example
//!
//! ```rust
//! use flightcalc_core::prelude::*;
//!
//! let mut calc = Calculator::new(Catalog::default(), CalculatorConfig::default());
//! calc.toggle_payload_item("lidar_rev7")?;
//! let result = calc.set_lighting_level(LightingLevel::High);
//! println!("Total power: {}", result.display().total_power);
//! println!("Flight time: {}", result.display().flight_time);
//! # Ok::<(), flightcalc_core::CalcError>(())
//! ```

pub mod battery;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod flight;
pub mod input;
pub mod payload;
pub mod power;
pub mod result;
pub mod unit_conversion;

pub use error::{CalcError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::battery::{BatterySelection, BatterySelector};
    pub use crate::calculator::{Calculator, SelectionUpdate, Session};
    pub use crate::catalog::{BatteryOption, Catalog, PayloadItem};
    pub use crate::config::CalculatorConfig;
    pub use crate::error::CalcError;
    pub use crate::flight::{estimate_flight, FlightEstimate, FlightTime};
    pub use crate::input::NumericField;
    pub use crate::payload::PayloadLedger;
    pub use crate::power::{compute_power, LightingLevel, PowerBreakdown};
    pub use crate::result::{Advisory, CalculationResult, DisplayValues};
    pub use crate::unit_conversion::MassUnit;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
