//! # pantrywise-core
//!
//! Core business logic for the `PantryWise` household inventory and
//! medicine reminder app.
//!
//! This crate provides:
//! - **Expiry Tracking** - fresh / expiring / expired classification,
//!   labels and the home-screen filter pipeline
//! - **Dose Compliance** - daily schedules, taking doses, compliance
//!   percentages
//! - **Shopping** - restock suggestions and recommended offers
//! - **Notifications** - expiry alerts, dose reminders, dismiss and snooze
//! - **Settings** - persisted reminder preferences
//!
//! Every operation is a pure function over a snapshot supplied by the
//! caller. Nothing here performs I/O or keeps state between calls, so all
//! functions are safe to call from any thread.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod display;
pub mod dose;
mod error;
pub mod item;
pub mod notification;
pub mod settings;
pub mod shopping;
pub mod snapshot;

pub use display::{ColorToken, Palette, ThemeMode};
pub use dose::{
    ComplianceSummary, DoseCondition, DoseId, DoseRecord, Medicine, summarize, take_dose,
};
pub use error::{Error, Result};
pub use item::{
    Category, CategorySelection, ItemId, ItemQuery, RawItem, StatusKind, TrackedItem,
    ValidationError, classify, days_left, filter_by_categories, filter_by_search, filter_by_tab,
    status_label,
};
pub use notification::{Notification, NotificationKind, NotificationTab};
pub use settings::Settings;
pub use shopping::{PriceOffer, Priority, ShoppingListEntry, ShoppingSuggestion, best_offer};
pub use snapshot::Snapshot;
