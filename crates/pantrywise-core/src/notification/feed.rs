//! Building and curating the notification feed.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use super::model::{Notification, NotificationKind, NotificationTab, SnoozedNotification};
use crate::dose::DoseRecord;
use crate::item::{TrackedItem, days_left, status_label};
use crate::settings::Settings;
use crate::shopping::{Priority, restock_priority};

/// Notifications listed under `tab`, in feed order.
#[must_use]
pub fn filter_notifications(list: &[Notification], tab: NotificationTab) -> Vec<Notification> {
    list.iter()
        .filter(|n| tab.includes(n.kind))
        .cloned()
        .collect()
}

/// Expiry alerts for items that have expired or expire within
/// `window_days`.
///
/// IDs are assigned from `first_id` upwards in item order.
#[must_use]
pub fn expiry_notifications(
    items: &[TrackedItem],
    today: NaiveDate,
    now: DateTime<Utc>,
    window_days: u32,
    first_id: u64,
) -> Vec<Notification> {
    let window = i64::from(window_days);
    items
        .iter()
        .filter_map(|item| {
            let days = days_left(today, item.expiry_date);
            let (kind, title) = if days < 0 {
                (NotificationKind::Expired, format!("{} expired", item.name))
            } else if days <= window {
                (NotificationKind::Expiry, format!("{} expires soon", item.name))
            } else {
                return None;
            };
            Some((kind, title, item, days))
        })
        .zip(first_id..)
        .map(|((kind, title, item, days), id)| Notification {
            id,
            kind,
            title,
            message: format!("{}: {}", item.name, status_label(days)),
            priority: restock_priority(days),
            created_at: now,
        })
        .collect()
}

/// Reminders for doses that are due and alerts for doses that were missed.
///
/// A pending dose is due once its time has come and missed once it is more
/// than `grace_minutes` late. Doses in the future raise nothing.
#[must_use]
pub fn dose_notifications(
    doses: &[DoseRecord],
    time_of_day: NaiveTime,
    now: DateTime<Utc>,
    grace_minutes: u32,
    first_id: u64,
) -> Vec<Notification> {
    let grace = Duration::minutes(i64::from(grace_minutes));
    doses
        .iter()
        .filter(|dose| dose.is_pending() && dose.scheduled_time <= time_of_day)
        .zip(first_id..)
        .map(|(dose, id)| {
            let (title, message) = if time_of_day - dose.scheduled_time > grace {
                (
                    "Missed dose".to_string(),
                    format!(
                        "You missed your {} {} dose",
                        dose.scheduled_time.format("%H:%M"),
                        dose.medicine_name
                    ),
                )
            } else {
                (
                    "Medicine reminder".to_string(),
                    format!("Time to take your {} ({})", dose.medicine_name, dose.dosage),
                )
            };
            Notification {
                id,
                kind: NotificationKind::Medicine,
                title,
                message,
                priority: Priority::Medium,
                created_at: now,
            }
        })
        .collect()
}

/// Remove a notification. Unknown IDs are ignored.
#[must_use]
pub fn dismiss(list: &[Notification], id: u64) -> Vec<Notification> {
    list.iter().filter(|n| n.id != id).cloned().collect()
}

/// Hide a notification for `minutes`.
///
/// Returns the visible feed without it and the snoozed entry. Unknown IDs
/// and kinds that cannot be snoozed leave the feed unchanged and return
/// `None`.
#[must_use]
pub fn snooze(
    list: &[Notification],
    id: u64,
    now: DateTime<Utc>,
    minutes: u32,
) -> (Vec<Notification>, Option<SnoozedNotification>) {
    let Some(target) = list.iter().find(|n| n.id == id) else {
        tracing::debug!(id, "snooze for unknown notification ignored");
        return (list.to_vec(), None);
    };
    if !target.kind.is_snoozable() {
        tracing::debug!(id, kind = target.kind.as_str(), "notification kind cannot be snoozed");
        return (list.to_vec(), None);
    }

    let snoozed = SnoozedNotification::new(target.clone(), now, minutes);
    (dismiss(list, id), Some(snoozed))
}

/// Move snoozed notifications whose time has come back into the feed.
///
/// Returns the new feed and the entries that are still snoozed.
#[must_use]
pub fn wake_snoozed(
    list: &[Notification],
    snoozed: &[SnoozedNotification],
    now: DateTime<Utc>,
) -> (Vec<Notification>, Vec<SnoozedNotification>) {
    let (due, waiting): (Vec<_>, Vec<_>) =
        snoozed.iter().cloned().partition(|s| s.is_expired(now));

    let mut feed: Vec<Notification> = due.into_iter().map(|s| s.notification).collect();
    feed.extend(list.iter().cloned());
    (feed, waiting)
}

/// Drop notifications the user has switched off.
#[must_use]
pub fn apply_preferences(list: &[Notification], settings: &Settings) -> Vec<Notification> {
    if !settings.notifications {
        return Vec::new();
    }

    list.iter()
        .filter(|n| match n.kind {
            NotificationKind::Expiry | NotificationKind::Expired => settings.expiry_reminders,
            NotificationKind::Medicine => settings.medicine_reminders,
            NotificationKind::Restock => true,
        })
        .cloned()
        .collect()
}
