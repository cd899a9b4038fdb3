//! Calculator
//!
//! Owns the session state and recomputes the full result after every
//! mutation. There is a single "ready" state: each public call mutates the
//! session, recomputes from the whole snapshot, stores the result, and
//! returns it. No partially updated result is ever observable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::battery::{BatterySelection, BatterySelector};
use crate::catalog::Catalog;
use crate::config::{CalculatorConfig, PresetWeight};
use crate::error::{CalcError, Result};
use crate::flight::estimate_flight;
use crate::input::{clamp_non_negative, parse_lighting, parse_numeric, NumericField};
use crate::payload::PayloadLedger;
use crate::power::{compute_power, LightingLevel};
use crate::result::CalculationResult;
use crate::unit_conversion::{from_grams, grams_to_field, to_grams, MassUnit};

/// All mutable calculator state
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Airframe mass without payload or battery, always grams
    pub base_mass_grams: f64,
    pub aux_power_w: f64,
    pub battery_margin_percent: f64,
    pub lighting: LightingLevel,
    pub display_unit: MassUnit,
    pub payload: PayloadLedger,
    pub battery: BatterySelector,
}

impl Session {
    /// Initial session from config values
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            base_mass_grams: config.base_mass_grams,
            aux_power_w: config.aux_power_w,
            battery_margin_percent: config.battery_margin_percent,
            lighting: config.lighting,
            display_unit: config.display_unit,
            payload: PayloadLedger::new(),
            battery: BatterySelector::new(config.battery_capacity_wh),
        }
    }

    /// Base mass plus fitted payload plus battery mass, in grams
    pub fn total_mass_grams(&self) -> f64 {
        self.base_mass_grams + self.payload.total_mass() + self.battery.mass_grams()
    }

    /// Derive the result from this snapshot
    ///
    /// Pure: the same session always yields the same result.
    pub fn recalculate(&self) -> CalculationResult {
        let total_mass_grams = self.total_mass_grams();
        let power = compute_power(total_mass_grams, self.aux_power_w, self.lighting);
        let flight = estimate_flight(
            power.total_power_w,
            self.battery.capacity_wh(),
            self.battery_margin_percent,
        );
        CalculationResult::new(
            power,
            flight,
            total_mass_grams,
            self.display_unit,
            self.battery_margin_percent,
        )
    }

    /// Stored value of a field in the unit shown to the user (unrounded)
    fn field_value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::BaseMass => from_grams(self.base_mass_grams, self.display_unit),
            NumericField::AuxPower => self.aux_power_w,
            NumericField::BatteryCapacity => self.battery.capacity_wh(),
            NumericField::BatteryMargin => self.battery_margin_percent,
        }
    }

    /// Store a field value given in the unit shown to the user
    fn set_field_value(&mut self, field: NumericField, value: f64) {
        match field {
            NumericField::BaseMass => {
                self.base_mass_grams = to_grams(value, self.display_unit);
            }
            NumericField::AuxPower => self.aux_power_w = value,
            NumericField::BatteryCapacity => self.battery.set_manual_capacity(value),
            NumericField::BatteryMargin => self.battery_margin_percent = value,
        }
    }
}

/// Result of a payload or battery change, with the state needed to redraw
/// the toggle buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionUpdate {
    pub result: CalculationResult,
    /// Fitted payload ids, sorted
    pub active_payload: Vec<String>,
    pub battery: BatterySelection,
}

/// Session-owning calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: Catalog,
    session: Session,
    preset_weights: Vec<PresetWeight>,
    result: CalculationResult,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Catalog::default(), CalculatorConfig::default())
    }
}

impl Calculator {
    /// Create a calculator and compute the initial result
    pub fn new(catalog: Catalog, config: CalculatorConfig) -> Self {
        let session = Session::from_config(&config);
        let result = session.recalculate();
        Self {
            catalog,
            session,
            preset_weights: config.preset_weights,
            result,
        }
    }

    /// Load catalog and config JSON files, validating both
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        catalog_path: P,
        config_path: Q,
    ) -> Result<Self> {
        let catalog = Catalog::load(catalog_path)?;
        let config = CalculatorConfig::load(config_path)?;
        Ok(Self::new(catalog, config))
    }

    /// Current session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Catalog supplied at startup
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Weights offered by the "Use" buttons
    pub fn preset_weights(&self) -> &[PresetWeight] {
        &self.preset_weights
    }

    /// Most recently published result
    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    /// Recompute from the current session and publish
    pub fn recalculate(&mut self) -> CalculationResult {
        let result = self.session.recalculate();
        tracing::debug!(
            total_mass_g = result.total_mass_grams,
            total_power_w = result.total_power_w,
            flight_time = ?result.flight_time,
            "Recalculated"
        );
        if !result.advisories.is_empty() {
            tracing::warn!("Calculation advisories: {:?}", result.advisories);
        }
        self.result = result.clone();
        result
    }

    /// Set the airframe mass, given in `unit`
    pub fn set_base_mass(&mut self, value: f64, unit: MassUnit) -> CalculationResult {
        self.session.base_mass_grams = to_grams(finite_or_zero(value), unit);
        self.recalculate()
    }

    /// Set auxiliary power draw (W)
    pub fn set_aux_power(&mut self, watts: f64) -> CalculationResult {
        self.session.aux_power_w = finite_or_zero(watts);
        self.recalculate()
    }

    /// Set the reserved battery share (%)
    pub fn set_battery_margin(&mut self, percent: f64) -> CalculationResult {
        self.session.battery_margin_percent = finite_or_zero(percent);
        self.recalculate()
    }

    /// Set the battery capacity field directly (Wh)
    pub fn set_battery_capacity(&mut self, capacity_wh: f64) -> CalculationResult {
        self.session
            .battery
            .set_manual_capacity(finite_or_zero(capacity_wh));
        self.recalculate()
    }

    /// Set the lighting level
    pub fn set_lighting_level(&mut self, level: LightingLevel) -> CalculationResult {
        self.session.lighting = level;
        self.recalculate()
    }

    /// Set the lighting level from the slider's text value
    pub fn set_lighting_slider(&mut self, text: &str) -> CalculationResult {
        self.set_lighting_level(parse_lighting(text))
    }

    /// Switch the unit used for mass input and display
    ///
    /// The stored mass is canonical grams and is not touched, so switching
    /// back and forth never accumulates rounding.
    pub fn set_display_unit(&mut self, unit: MassUnit) -> CalculationResult {
        self.session.display_unit = unit;
        self.recalculate()
    }

    /// Copy a preset weight (grams) into the mass field
    pub fn use_preset_weight(&mut self, grams: f64) -> CalculationResult {
        self.set_base_mass(grams, MassUnit::Grams)
    }

    /// Copy the named preset weight into the mass field
    pub fn use_preset(&mut self, label: &str) -> Result<CalculationResult> {
        let grams = self
            .preset_weights
            .iter()
            .find(|preset| preset.label == label)
            .map(|preset| preset.grams)
            .ok_or_else(|| CalcError::InvalidValue {
                field: "preset_weights".to_string(),
                message: format!("no preset named '{label}'"),
            })?;
        Ok(self.use_preset_weight(grams))
    }

    /// Live edit of a field's text
    ///
    /// Unparseable text counts as 0 and negative values are kept until the
    /// field is committed.
    pub fn edit_field(&mut self, field: NumericField, text: &str) -> CalculationResult {
        let value = parse_numeric(text);
        self.session.set_field_value(field, value);
        self.recalculate()
    }

    /// Field lost focus: clamp its stored value to be non-negative
    pub fn commit_field(&mut self, field: NumericField) -> CalculationResult {
        let value = self.session.field_value(field);
        let clamped = clamp_non_negative(value);
        if clamped != value {
            tracing::debug!("Clamped {:?} from {} to {}", field, value, clamped);
            self.session.set_field_value(field, clamped);
        }
        self.recalculate()
    }

    /// Value shown in a field, rounded the way the input displays it
    pub fn field_display_value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::BaseMass => self.base_mass_field(),
            other => self.session.field_value(other),
        }
    }

    /// Base mass in the display unit, rounded for the input field
    pub fn base_mass_field(&self) -> f64 {
        grams_to_field(self.session.base_mass_grams, self.session.display_unit)
    }

    /// Fit or remove a payload item by id
    pub fn toggle_payload_item(&mut self, id: &str) -> Result<SelectionUpdate> {
        let item = self.catalog.payload_item(id).ok_or_else(|| {
            tracing::warn!("Toggle requested for unknown payload item '{}'", id);
            CalcError::UnknownPayloadItem(id.to_string())
        })?;
        self.session.payload.toggle(item);
        Ok(self.selection_update())
    }

    /// Remove all payload items
    pub fn clear_payload(&mut self) -> SelectionUpdate {
        self.session.payload.clear();
        self.selection_update()
    }

    /// Make a battery preset current by id
    pub fn select_battery(&mut self, id: &str) -> Result<SelectionUpdate> {
        let option = self.catalog.battery_option(id).ok_or_else(|| {
            tracing::warn!("Selection requested for unknown battery '{}'", id);
            CalcError::UnknownBattery(id.to_string())
        })?;
        self.session.battery.select(option);
        Ok(self.selection_update())
    }

    /// Return to the manual battery at its default capacity
    pub fn reset_battery(&mut self) -> SelectionUpdate {
        self.session.battery.reset();
        self.selection_update()
    }

    fn selection_update(&mut self) -> SelectionUpdate {
        let result = self.recalculate();
        SelectionUpdate {
            result,
            active_payload: self.session.payload.active_ids(),
            battery: self.session.battery.current().clone(),
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::trace!("Non-finite input {} treated as 0", value);
        0.0
    }
}
