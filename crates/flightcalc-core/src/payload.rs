//! Payload Ledger
//!
//! Tracks which payload add-ons are fitted. Items that share an exclusive
//! group replace each other; the total mass is always summed from the active
//! set rather than kept as a running total.

use std::collections::BTreeMap;

use crate::catalog::PayloadItem;

/// Active payload items keyed by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadLedger {
    active: BTreeMap<String, PayloadItem>,
}

impl PayloadLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip an item on or off
    ///
    /// Activating an item first removes any active item in the same exclusive
    /// group. Returns the ids active afterwards.
    pub fn toggle(&mut self, item: &PayloadItem) -> Vec<String> {
        if self.active.remove(&item.id).is_none() {
            if let Some(group) = item.exclusive_group.as_deref() {
                self.active
                    .retain(|_, other| other.exclusive_group.as_deref() != Some(group));
            }
            self.active.insert(item.id.clone(), item.clone());
        }
        self.active_ids()
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Sum of the active items' masses in grams
    pub fn total_mass(&self) -> f64 {
        self.active.values().map(|item| item.mass_grams).sum()
    }

    /// Whether the item with this id is fitted
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Active ids, sorted
    pub fn active_ids(&self) -> Vec<String> {
        self.active.keys().cloned().collect()
    }

    /// Active items, sorted by id
    pub fn active_items(&self) -> impl Iterator<Item = &PayloadItem> {
        self.active.values()
    }

    /// Number of fitted items
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True when nothing is fitted
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gimbal() -> PayloadItem {
        PayloadItem::new("gimbal", "Gimbal", 350.0)
    }

    #[test]
    fn test_toggle_on_and_off() {
        let mut ledger = PayloadLedger::new();
        assert_eq!(ledger.toggle(&gimbal()), vec!["gimbal".to_string()]);
        assert_eq!(ledger.total_mass(), 350.0);
        assert!(ledger.toggle(&gimbal()).is_empty());
        assert_eq!(ledger.total_mass(), 0.0);
    }

    #[test]
    fn test_exclusive_group_swaps() {
        let rev6 = PayloadItem::new("rev6", "Rev 6", 590.0).in_group("lidar");
        let rev7 = PayloadItem::new("rev7", "Rev 7", 830.0).in_group("lidar");
        let mut ledger = PayloadLedger::new();
        ledger.toggle(&gimbal());
        ledger.toggle(&rev6);
        ledger.toggle(&rev7);
        assert!(!ledger.is_active("rev6"));
        assert!(ledger.is_active("rev7"));
        assert_eq!(ledger.total_mass(), 350.0 + 830.0);
    }

    #[test]
    fn test_clear() {
        let mut ledger = PayloadLedger::new();
        ledger.toggle(&gimbal());
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_mass(), 0.0);
    }
}
