//! Battery Selection
//!
//! Exactly one battery is current at a time. The zero-th option is the
//! manual capacity field with no extra mass; choosing a preset overwrites
//! capacity and battery mass together.

use serde::{Deserialize, Serialize};

use crate::catalog::BatteryOption;

/// Capacity used before anything is selected (Wh)
pub const DEFAULT_CAPACITY_WH: f64 = 98.8;

/// Snapshot of the current battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySelection {
    /// Preset id, or `None` for the manual capacity field
    pub option_id: Option<String>,
    pub capacity_wh: f64,
    pub mass_grams: f64,
}

impl BatterySelection {
    /// Manual selection with the given capacity and no battery mass
    pub fn manual(capacity_wh: f64) -> Self {
        Self {
            option_id: None,
            capacity_wh,
            mass_grams: 0.0,
        }
    }
}

impl Default for BatterySelection {
    fn default() -> Self {
        Self::manual(DEFAULT_CAPACITY_WH)
    }
}

/// Holds the current battery selection
#[derive(Debug, Clone, PartialEq)]
pub struct BatterySelector {
    current: BatterySelection,
    default_capacity_wh: f64,
}

impl Default for BatterySelector {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY_WH)
    }
}

impl BatterySelector {
    /// Start on the manual option with `default_capacity_wh`
    pub fn new(default_capacity_wh: f64) -> Self {
        Self {
            current: BatterySelection::manual(default_capacity_wh),
            default_capacity_wh,
        }
    }

    /// Make `option` current, returning its capacity and mass
    ///
    /// Reselecting the same option leaves the state unchanged.
    pub fn select(&mut self, option: &BatteryOption) -> (f64, f64) {
        self.current = BatterySelection {
            option_id: Some(option.id.clone()),
            capacity_wh: option.capacity_wh,
            mass_grams: option.mass_grams,
        };
        (option.capacity_wh, option.mass_grams)
    }

    /// Edit the capacity field directly; battery mass is kept
    pub fn set_manual_capacity(&mut self, capacity_wh: f64) {
        self.current.capacity_wh = capacity_wh;
    }

    /// Back to the manual option at the default capacity
    pub fn reset(&mut self) {
        self.current = BatterySelection::manual(self.default_capacity_wh);
    }

    /// Current selection
    pub fn current(&self) -> &BatterySelection {
        &self.current
    }

    pub fn capacity_wh(&self) -> f64 {
        self.current.capacity_wh
    }

    pub fn mass_grams(&self) -> f64 {
        self.current.mass_grams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_manual() {
        let selector = BatterySelector::default();
        assert_eq!(selector.current().option_id, None);
        assert_eq!(selector.capacity_wh(), 98.8);
        assert_eq!(selector.mass_grams(), 0.0);
    }

    #[test]
    fn test_select_is_idempotent() {
        let pack = BatteryOption::new("pack", "Pack", 150.0, 820.0);
        let mut selector = BatterySelector::default();
        assert_eq!(selector.select(&pack), (150.0, 820.0));
        let first = selector.current().clone();
        selector.select(&pack);
        assert_eq!(selector.current(), &first);
    }

    #[test]
    fn test_manual_capacity_keeps_mass() {
        let pack = BatteryOption::new("pack", "Pack", 150.0, 820.0);
        let mut selector = BatterySelector::default();
        selector.select(&pack);
        selector.set_manual_capacity(120.0);
        assert_eq!(selector.capacity_wh(), 120.0);
        assert_eq!(selector.mass_grams(), 820.0);
        selector.reset();
        assert_eq!(selector.current(), &BatterySelection::manual(98.8));
    }
}
