//! Notification data models.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shopping::Priority;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An item is about to expire.
    Expiry,
    /// An item has expired.
    Expired,
    /// Dose reminder or missed dose.
    Medicine,
    /// Restock suggestion.
    Restock,
}

impl NotificationKind {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Expiry => "expiry",
            Self::Expired => "expired",
            Self::Medicine => "medicine",
            Self::Restock => "restock",
        }
    }

    /// Returns true if the notification can be snoozed.
    #[must_use]
    pub const fn is_snoozable(&self) -> bool {
        matches!(self, Self::Medicine)
    }
}

/// A notification shown in the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifier, unique within the feed.
    pub id: u64,
    /// Kind.
    pub kind: NotificationKind,
    /// Headline.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Urgency.
    pub priority: Priority,
    /// When the notification was raised.
    pub created_at: DateTime<Utc>,
}

/// Notification center tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationTab {
    /// Everything.
    #[default]
    All,
    /// Expiring and expired items.
    Expiry,
    /// Medicine reminders.
    Medicine,
    /// Restock suggestions.
    Shopping,
}

impl NotificationTab {
    /// All tabs, in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Expiry, Self::Medicine, Self::Shopping];

    /// Returns true if notifications of `kind` are listed under this tab.
    #[must_use]
    pub const fn includes(&self, kind: NotificationKind) -> bool {
        match self {
            Self::All => true,
            Self::Expiry => matches!(kind, NotificationKind::Expiry | NotificationKind::Expired),
            Self::Medicine => matches!(kind, NotificationKind::Medicine),
            Self::Shopping => matches!(kind, NotificationKind::Restock),
        }
    }

    /// Tab title.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Expiry => "Expiry",
            Self::Medicine => "Medicine",
            Self::Shopping => "Shopping",
        }
    }
}

/// A notification hidden until a later time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnoozedNotification {
    /// The hidden notification.
    pub notification: Notification,
    /// When the notification should reappear.
    pub snooze_until: DateTime<Utc>,
    /// When it was snoozed.
    pub snoozed_at: DateTime<Utc>,
}

impl SnoozedNotification {
    /// Snooze `notification` for `minutes` starting at `now`.
    #[must_use]
    pub fn new(notification: Notification, now: DateTime<Utc>, minutes: u32) -> Self {
        Self {
            notification,
            snooze_until: now + Duration::minutes(i64::from(minutes)),
            snoozed_at: now,
        }
    }

    /// Returns true if the snooze has expired.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.snooze_until
    }

    /// Returns the remaining time until the snooze expires.
    #[must_use]
    pub fn time_remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        if now >= self.snooze_until {
            None
        } else {
            Some(self.snooze_until - now)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn notification(kind: NotificationKind) -> Notification {
        Notification {
            id: 1,
            kind,
            title: "Medicine reminder".to_string(),
            message: "Time to take your Vitamin D3 (1000 IU)".to_string(),
            priority: Priority::Medium,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_tab_membership() {
        assert!(NotificationTab::Expiry.includes(NotificationKind::Expired));
        assert!(NotificationTab::Expiry.includes(NotificationKind::Expiry));
        assert!(!NotificationTab::Expiry.includes(NotificationKind::Medicine));
        assert!(NotificationTab::Shopping.includes(NotificationKind::Restock));
        for kind in [
            NotificationKind::Expiry,
            NotificationKind::Expired,
            NotificationKind::Medicine,
            NotificationKind::Restock,
        ] {
            assert!(NotificationTab::All.includes(kind));
        }
    }

    #[test]
    fn test_snoozed_notification_window() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let snoozed = SnoozedNotification::new(notification(NotificationKind::Medicine), now, 60);

        assert!(!snoozed.is_expired(now));
        assert_eq!(snoozed.time_remaining(now), Some(Duration::minutes(60)));

        let later = now + Duration::minutes(60);
        assert!(snoozed.is_expired(later));
        assert_eq!(snoozed.time_remaining(later), None);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_value(notification(NotificationKind::Restock)).unwrap();
        assert_eq!(json["kind"], "restock");
        assert_eq!(json["priority"], "medium");
    }
}
