//! End-to-end tests of the engine's public API.
//!
//! These drive the engine the way a host would: parse a snapshot, run the
//! home-screen pipeline, take doses and build the shopping list.

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use pantrywise_core::dose::{DoseCondition, DoseId, DoseRecord};
use pantrywise_core::item::{CategorySelection, ItemQuery, StatusKind};
use pantrywise_core::notification::{self, NotificationTab};
use pantrywise_core::shopping::{self, PriceOffer};
use pantrywise_core::{
    Category, ComplianceSummary, ItemId, Settings, Snapshot, TrackedItem, best_offer,
    filter_by_categories, filter_by_search, filter_by_tab, summarize, take_dose,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn item_with_days(id: u64, days: i64) -> TrackedItem {
    TrackedItem {
        id: ItemId::new(id),
        name: format!("Item {id}"),
        category: Category::Other,
        open_date: None,
        expiry_date: today() + chrono::Duration::days(days),
    }
}

fn dose(id: u64, taken: bool) -> DoseRecord {
    DoseRecord {
        taken,
        ..DoseRecord::new(
            DoseId::new(id),
            "Omega-3",
            "500mg",
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            DoseCondition::WithFood,
        )
    }
}

#[test]
fn fresh_tab_keeps_relative_order() {
    let items = vec![
        item_with_days(1, 5),
        item_with_days(2, 45),
        item_with_days(3, -2),
        item_with_days(4, 120),
    ];
    let fresh = filter_by_tab(&items, StatusKind::Fresh, today());
    assert_eq!(fresh, vec![items[1].clone(), items[3].clone()]);
}

#[test]
fn identity_filters() {
    let items = vec![item_with_days(1, 5), item_with_days(2, 45)];
    assert_eq!(filter_by_search(&items, ""), items);
    assert_eq!(filter_by_categories(&items, &CategorySelection::All), items);
}

#[test]
fn compliance_examples() {
    assert_eq!(
        summarize(&[]),
        ComplianceSummary {
            taken_count: 0,
            remaining_count: 0,
            compliance_percent: 0,
        }
    );
    let doses = [dose(1, true), dose(2, true), dose(3, false), dose(4, false)];
    let summary = summarize(&doses);
    assert_eq!(summary.taken_count, 2);
    assert_eq!(summary.remaining_count, 2);
    assert_eq!(summary.compliance_percent, 50);
}

#[test]
fn taking_a_dose_twice_matches_taking_it_once() {
    let doses = vec![dose(1, false), dose(2, false)];
    let once = take_dose(&doses, DoseId::new(2));
    assert_eq!(take_dose(&once, DoseId::new(2)), once);
    assert_eq!(summarize(&once).compliance_percent, 50);
}

#[test]
fn recommended_offer_wins() {
    let offers = vec![
        PriceOffer::new("Blinkit", "₹299", "10 min").recommended(),
        PriceOffer::new("Zepto", "₹320", "15 min"),
    ];
    assert_eq!(best_offer(&offers).unwrap().platform, "Blinkit");
}

#[test]
fn snapshot_to_views() {
    let snapshot = Snapshot::from_json(
        r#"{
            "items": [
                {"id": 1, "name": "Vitamin D3 Tablets", "category": "medicine",
                 "expiry_date": "2024-01-20"},
                {"id": 2, "name": "Face Moisturizer", "category": "cosmetics",
                 "open_date": "2023-12-01", "expiry_date": "2024-06-01"},
                {"id": 3, "name": "All-Purpose Cleaner", "category": "cleaning",
                 "expiry_date": "2024-01-13"},
                {"id": 4, "name": "Sunscreen SPF 50", "category": "cosmetics",
                 "expiry_date": "2024-01-18"}
            ],
            "doses": [
                {"id": 1, "medicine_name": "Omega-3", "dosage": "500mg",
                 "scheduled_time": "08:00", "taken": true},
                {"id": 2, "medicine_name": "Multivitamin", "dosage": "1 tablet",
                 "scheduled_time": "08:30", "condition": "empty_stomach"}
            ],
            "offers": {
                "All-Purpose Cleaner": [
                    {"platform": "Blinkit", "price": "₹299", "delivery_estimate": "10 min",
                     "in_stock": true, "recommended": true},
                    {"platform": "Amazon", "price": "₹280", "delivery_estimate": "1 day",
                     "in_stock": true}
                ]
            }
        }"#,
    )
    .unwrap();
    let items = snapshot.tracked_items().unwrap();

    let query = ItemQuery {
        tab: StatusKind::Expiring,
        search: String::new(),
        categories: CategorySelection::All.toggle(Category::Cosmetics),
    };
    let expiring: Vec<_> = query.apply(&items, today()).iter().map(|i| i.id.0).collect();
    assert_eq!(expiring, vec![4]);

    // Multivitamin is pending
    let doses = take_dose(&snapshot.todays_doses(), DoseId::new(2));
    assert_eq!(summarize(&doses).compliance_percent, 100);

    let suggestions: Vec<_> = shopping::suggest_replacements(&items, today())
        .into_iter()
        .map(|s| {
            let offers = snapshot.offers_for(&s.name);
            s.with_offers(offers)
        })
        .collect();
    assert_eq!(suggestions[0].name, "All-Purpose Cleaner");
    let list = shopping::add_selected(&[], &suggestions, &[ItemId::new(3)]);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].platform.as_deref(), Some("Blinkit"));

    let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let settings = Settings::default();
    let feed = notification::expiry_notifications(
        &items,
        today(),
        now,
        settings.expiry_alert_days,
        1,
    );
    let feed = notification::apply_preferences(&feed, &settings);
    let expiry_tab = notification::filter_notifications(&feed, NotificationTab::Expiry);
    // Cleaner expired, Sunscreen and Vitamin D3 within the 7-day window
    assert_eq!(expiry_tab.len(), 3);
}
