//! Built-in sample data, used when no snapshot file is given.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveTime};
use pantrywise_core::dose::{DoseCondition, Medicine};
use pantrywise_core::item::{DATE_FORMAT, RawItem};
use pantrywise_core::shopping::{PriceOffer, ShoppingListEntry};
use pantrywise_core::Snapshot;

/// Sample household, dated relative to `today`.
pub fn sample_snapshot(today: NaiveDate) -> Snapshot {
    // (id, name, category, days left, shelf life once opened)
    let products = [
        (1, "Vitamin D3 Tablets", "medicine", 5, 31),
        (2, "Face Moisturizer", "cosmetics", 45, 60),
        (3, "All-Purpose Cleaner", "cleaning", -2, 31),
        (4, "Sunscreen SPF 50", "cosmetics", 120, 121),
    ];

    let items = products
        .into_iter()
        .map(|(id, name, category, days_left, shelf_life)| {
            let expiry = shift(today, days_left);
            RawItem {
                id,
                name: name.to_string(),
                category: category.to_string(),
                open_date: Some(shift(expiry, -shelf_life).format(DATE_FORMAT).to_string()),
                expiry_date: Some(expiry.format(DATE_FORMAT).to_string()),
            }
        })
        .collect();

    let medicines = vec![
        medicine(1, "Vitamin D3", "1000 IU", &[(9, 0)], DoseCondition::WithFood),
        medicine(2, "Omega-3", "500mg", &[(8, 0), (20, 0)], DoseCondition::WithFood),
        medicine(3, "Multivitamin", "1 tablet", &[(8, 30)], DoseCondition::EmptyStomach),
    ];

    let mut offers = BTreeMap::new();
    offers.insert(
        "All-Purpose Cleaner".to_string(),
        vec![
            PriceOffer::new("Blinkit", "₹299", "10 min").recommended(),
            PriceOffer::new("Zepto", "₹320", "15 min"),
            PriceOffer::new("Amazon", "₹280", "1 day"),
        ],
    );
    offers.insert(
        "Vitamin D3 Tablets".to_string(),
        vec![
            PriceOffer::new("1mg", "₹450", "2 hours").recommended(),
            PriceOffer::new("Pharmeasy", "₹480", "3 hours"),
            PriceOffer::new("Amazon", "₹420", "1 day"),
        ],
    );

    Snapshot {
        items,
        medicines,
        doses: Vec::new(),
        offers,
        shopping_list: vec![ShoppingListEntry {
            id: 1,
            name: "Dish Soap".to_string(),
            quantity: 2,
            best_price: Some("₹120".to_string()),
            platform: Some("Blinkit".to_string()),
        }],
    }
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    let delta = Days::new(days.unsigned_abs());
    let shifted = if days < 0 {
        date.checked_sub_days(delta)
    } else {
        date.checked_add_days(delta)
    };
    shifted.unwrap_or(date)
}

fn medicine(
    id: u64,
    name: &str,
    dosage: &str,
    times: &[(u32, u32)],
    condition: DoseCondition,
) -> Medicine {
    Medicine {
        id,
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: match times.len() {
            1 => "Once daily".to_string(),
            2 => "Twice daily".to_string(),
            n => format!("{n} times daily"),
        },
        times: times
            .iter()
            .filter_map(|&(h, m)| NaiveTime::from_hms_opt(h, m, 0))
            .collect(),
        condition,
        instructions: match condition {
            DoseCondition::WithFood => "Take with food".to_string(),
            DoseCondition::EmptyStomach => "Take on empty stomach".to_string(),
        },
    }
}
