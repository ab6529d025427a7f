//! Expiry status classification.
//!
//! Everything here is a pure function of its arguments. Status is derived
//! on every query and never stored, so it cannot go stale.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::model::TrackedItem;

/// Items with at most this many days left are "expiring".
pub const EXPIRING_WINDOW_DAYS: i64 = 30;

/// Default life window for items without an open date.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 90;

/// Remaining-life state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// More than [`EXPIRING_WINDOW_DAYS`] days left.
    #[default]
    Fresh,
    /// Between zero and [`EXPIRING_WINDOW_DAYS`] days left, inclusive.
    Expiring,
    /// Past the expiry date.
    Expired,
}

impl StatusKind {
    /// All statuses, in home-screen tab order.
    pub const ALL: [Self; 3] = [Self::Fresh, Self::Expiring, Self::Expired];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Expiring => "expiring",
            Self::Expired => "expired",
        }
    }

    /// Tab title for this status.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fresh => "Fresh",
            Self::Expiring => "Expiring Soon",
            Self::Expired => "Expired",
        }
    }
}

/// Classify a day count.
///
/// Zero days left is still `Expiring`: the item expires today and is
/// usable until the day is over.
#[must_use]
pub const fn classify(days_left: i64) -> StatusKind {
    if days_left < 0 {
        StatusKind::Expired
    } else if days_left <= EXPIRING_WINDOW_DAYS {
        StatusKind::Expiring
    } else {
        StatusKind::Fresh
    }
}

/// Whole calendar days from `today` to `expiry_date`.
#[must_use]
pub fn days_left(today: NaiveDate, expiry_date: NaiveDate) -> i64 {
    (expiry_date - today).num_days()
}

/// Human-readable remaining-time label.
#[must_use]
pub fn status_label(days_left: i64) -> String {
    match days_left {
        d if d < 0 => format!("Expired {} days ago", d.unsigned_abs()),
        0 => "Expires today".to_string(),
        1 => "Expires tomorrow".to_string(),
        d => format!("{d} days left"),
    }
}

/// Fraction of the item's life already consumed, in `[0, 1]`.
///
/// The life window starts at the open date when there is one, otherwise
/// `lookback_days` before expiry.
#[must_use]
#[allow(clippy::cast_precision_loss)] // day counts are far below 2^52
pub fn progress(
    today: NaiveDate,
    open_date: Option<NaiveDate>,
    expiry_date: NaiveDate,
    lookback_days: u32,
) -> f64 {
    let start = open_date.unwrap_or_else(|| {
        expiry_date
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN)
    });

    let total = (expiry_date - start).num_days();
    if total <= 0 {
        return if today >= expiry_date { 1.0 } else { 0.0 };
    }

    let elapsed = (today - start).num_days();
    (elapsed as f64 / total as f64).clamp(0.0, 1.0)
}

/// Status attached to an item at query time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedStatus {
    /// Whole days until expiry, negative once expired.
    pub days_left: i64,
    /// Classification of `days_left`.
    pub status: StatusKind,
    /// Life-consumed ratio for the progress bar.
    pub progress: f64,
}

impl DerivedStatus {
    /// Label for `days_left`.
    #[must_use]
    pub fn label(&self) -> String {
        status_label(self.days_left)
    }
}

/// Compute the derived status of an item.
#[must_use]
pub fn derive_status(today: NaiveDate, item: &TrackedItem, lookback_days: u32) -> DerivedStatus {
    let days_left = days_left(today, item.expiry_date);
    DerivedStatus {
        days_left,
        status: classify(days_left),
        progress: progress(today, item.open_date, item.expiry_date, lookback_days),
    }
}
