//! Host-supplied snapshot of records.
//!
//! The engine never loads data itself. A host hands over everything it
//! knows in one [`Snapshot`], usually parsed from JSON, and the engine
//! validates it before computing any view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dose::{DoseRecord, Medicine, schedule_for_day};
use crate::item::{RawItem, TrackedItem, ValidationError};
use crate::shopping::{PriceOffer, ShoppingListEntry};
use crate::{Error, Result};

/// Records supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Tracked items, not yet validated.
    pub items: Vec<RawItem>,
    /// Medicine plans.
    pub medicines: Vec<Medicine>,
    /// Today's doses. Generated from `medicines` when empty.
    pub doses: Vec<DoseRecord>,
    /// Price comparison entries keyed by product name.
    pub offers: BTreeMap<String, Vec<PriceOffer>>,
    /// Current shopping list.
    pub shopping_list: Vec<ShoppingListEntry>,
}

impl Snapshot {
    /// Parse a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the snapshot layout.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every item.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` with the errors of all invalid items.
    pub fn tracked_items(&self) -> Result<Vec<TrackedItem>> {
        let (items, errors) = self.partition_items();
        if errors.is_empty() {
            Ok(items)
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Split items into valid records and the validation errors of the
    /// rest, for hosts that show partial data alongside the errors.
    #[must_use]
    pub fn partition_items(&self) -> (Vec<TrackedItem>, Vec<ValidationError>) {
        let mut items = Vec::with_capacity(self.items.len());
        let mut errors = Vec::new();
        for raw in &self.items {
            match TrackedItem::try_from(raw.clone()) {
                Ok(item) => items.push(item),
                Err(mut item_errors) => errors.append(&mut item_errors),
            }
        }
        (items, errors)
    }

    /// Today's doses: the supplied list, or a fresh schedule from the
    /// medicine plans when none was supplied.
    #[must_use]
    pub fn todays_doses(&self) -> Vec<DoseRecord> {
        if self.doses.is_empty() {
            schedule_for_day(&self.medicines)
        } else {
            self.doses.clone()
        }
    }

    /// Offers known for a product, empty if there are none.
    #[must_use]
    pub fn offers_for(&self, name: &str) -> Vec<PriceOffer> {
        self.offers.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    const JSON: &str = r#"{
        "items": [
            {"id": 1, "name": "Vitamin D3 Tablets", "category": "Medicine",
             "open_date": "2024-01-01", "expiry_date": "2024-02-01"},
            {"id": 2, "name": "Face Moisturizer", "category": "Cosmetics"},
            {"id": 3, "name": "", "category": "Cleaning", "expiry_date": "2024-13-01"}
        ],
        "medicines": [
            {"id": 1, "name": "Omega-3", "dosage": "500mg", "times": ["20:00", "08:00"]}
        ],
        "offers": {
            "Vitamin D3 Tablets": [
                {"platform": "1mg", "price": "₹450", "recommended": true}
            ]
        }
    }"#;

    #[test]
    fn test_partition_items() {
        let snapshot = Snapshot::from_json(JSON).unwrap();
        let (items, errors) = snapshot.partition_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, ItemId::new(1));
        assert_eq!(
            errors.iter().map(|e| (e.item_id().0, e.field())).collect::<Vec<_>>(),
            vec![(2, "expiry_date"), (3, "expiry_date"), (3, "name")]
        );
    }

    #[test]
    fn test_tracked_items_is_strict() {
        let snapshot = Snapshot::from_json(JSON).unwrap();
        match snapshot.tracked_items() {
            Err(Error::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_doses_generated_from_medicines() {
        let snapshot = Snapshot::from_json(JSON).unwrap();
        let doses = snapshot.todays_doses();
        assert_eq!(doses.len(), 2);
        assert_eq!(doses[0].scheduled_time.format("%H:%M").to_string(), "08:00");
    }

    #[test]
    fn test_offers_for() {
        let snapshot = Snapshot::from_json(JSON).unwrap();
        assert_eq!(snapshot.offers_for("Vitamin D3 Tablets")[0].platform, "1mg");
        assert!(snapshot.offers_for("Sunscreen").is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
        assert!(snapshot.tracked_items().unwrap().is_empty());
    }
}
