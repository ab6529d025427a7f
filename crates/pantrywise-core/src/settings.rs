//! User preferences that tune reminders and derived views.

use serde::{Deserialize, Serialize};

use crate::dose::DEFAULT_DOSE_SNOOZE_MINUTES;
use crate::item::DEFAULT_LOOKBACK_DAYS;
use crate::{Error, Result};

/// Application settings that persist across sessions.
///
/// Unknown or missing fields fall back to the defaults, so older settings
/// files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)] // One toggle per settings switch
pub struct Settings {
    /// Master switch for notifications.
    pub notifications: bool,
    /// Expiry and expired-item alerts.
    pub expiry_reminders: bool,
    /// Dose reminders and missed-dose alerts.
    pub medicine_reminders: bool,
    /// Play a sound with reminders.
    pub sound: bool,
    /// Vibrate with reminders.
    pub vibration: bool,
    /// Raise an expiry alert this many days ahead.
    pub expiry_alert_days: u32,
    /// Life window for the progress bar of unopened items.
    pub progress_lookback_days: u32,
    /// How long "snooze" delays a dose reminder.
    pub dose_snooze_minutes: u32,
    /// How long "snooze" hides a notification.
    pub notification_snooze_minutes: u32,
    /// How late a pending dose may be before it counts as missed.
    pub missed_dose_grace_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications: true,
            expiry_reminders: true,
            medicine_reminders: true,
            sound: true,
            vibration: true,
            expiry_alert_days: 7,
            progress_lookback_days: DEFAULT_LOOKBACK_DAYS,
            dose_snooze_minutes: DEFAULT_DOSE_SNOOZE_MINUTES,
            notification_snooze_minutes: 60,
            missed_dose_grace_minutes: 60,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the first field that is zero.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("progress_lookback_days", self.progress_lookback_days),
            ("dose_snooze_minutes", self.dose_snooze_minutes),
            ("notification_snooze_minutes", self.notification_snooze_minutes),
        ];
        if let Some((field, _)) = windows.iter().find(|(_, value)| *value == 0) {
            return Err(Error::Config(format!("{field} must be greater than zero")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.notifications);
        assert_eq!(settings.expiry_alert_days, 7);
        assert_eq!(settings.progress_lookback_days, 90);
        assert_eq!(settings.dose_snooze_minutes, 15);
        assert_eq!(settings.notification_snooze_minutes, 60);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"medicine_reminders": false}"#).unwrap();
        assert!(!settings.medicine_reminders);
        assert!(settings.expiry_reminders);
        assert_eq!(settings.missed_dose_grace_minutes, 60);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            sound: false,
            expiry_alert_days: 3,
            ..Settings::default()
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_zero_window_rejected() {
        let err = Settings::from_json(r#"{"dose_snooze_minutes": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("dose_snooze_minutes")));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(Error::Serde(_))
        ));
    }
}
