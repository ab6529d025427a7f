//! Notification center.
//!
//! Expiry alerts and dose reminders are derived from the current snapshot;
//! dismissing and snoozing return the next feed. Delivering notifications
//! to the device is the host's job.

mod feed;
mod model;

pub use feed::{
    apply_preferences, dismiss, dose_notifications, expiry_notifications, filter_notifications,
    snooze, wake_snoozed,
};
pub use model::{Notification, NotificationKind, NotificationTab, SnoozedNotification};
