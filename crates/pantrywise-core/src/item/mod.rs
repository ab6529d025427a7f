//! Household item tracking.
//!
//! This module provides:
//! - **Model**: [`TrackedItem`] and its unvalidated host form [`RawItem`]
//! - **Status**: expiry classification (`fresh` / `expiring` / `expired`),
//!   remaining-time labels and the life-consumed progress ratio
//! - **Filtering**: the home-screen pipeline (tab, search, category chips)
//! - **Inventory**: add / edit / mark-used reducers
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pantrywise_core::item::{Category, ItemId, ItemQuery, StatusKind, TrackedItem};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let items = vec![
//!     TrackedItem::new(
//!         ItemId::new(1),
//!         "Sunscreen SPF 50",
//!         Category::Cosmetics,
//!         None,
//!         NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
//!     )
//!     .unwrap(),
//! ];
//!
//! let expiring = ItemQuery::for_tab(StatusKind::Expiring).apply(&items, today);
//! assert_eq!(expiring.len(), 1);
//! ```

mod filter;
mod inventory;
mod model;
mod status;
mod validation;

pub use filter::{
    CategorySelection, ItemQuery, TabCounts, filter_by_categories, filter_by_search,
    filter_by_tab, sort_by_urgency, tab_counts,
};
pub use inventory::{add_item, mark_used, next_item_id, update_item};
pub use model::{Category, ItemId, RawItem, TrackedItem};
pub use status::{
    DEFAULT_LOOKBACK_DAYS, DerivedStatus, EXPIRING_WINDOW_DAYS, StatusKind, classify,
    days_left, derive_status, progress, status_label,
};
pub use validation::{DATE_FORMAT, ValidationError, ValidationResult, parse_date, validate_item};
