//! Dose and medicine data models.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Unique identifier for a scheduled dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoseId(pub u64);

impl DoseId {
    /// Create a new dose ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DoseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a dose should be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoseCondition {
    /// Take with a meal.
    #[default]
    WithFood,
    /// Take before eating.
    EmptyStomach,
}

impl DoseCondition {
    /// Parse from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "empty_stomach" | "empty stomach" => Self::EmptyStomach,
            _ => Self::WithFood,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WithFood => "with_food",
            Self::EmptyStomach => "empty_stomach",
        }
    }
}

/// One scheduled medicine administration for the current day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoseRecord {
    /// Identifier, unique within the day's schedule.
    pub id: DoseId,
    /// Medicine name for display.
    pub medicine_name: String,
    /// Dosage text, e.g. "500mg".
    pub dosage: String,
    /// Time of day the dose is due.
    #[serde(with = "hhmm")]
    pub scheduled_time: NaiveTime,
    /// Food condition.
    #[serde(default)]
    pub condition: DoseCondition,
    /// Whether the dose has been taken today. Never reset within a day.
    #[serde(default)]
    pub taken: bool,
}

impl DoseRecord {
    /// Creates a pending dose.
    #[must_use]
    pub fn new(
        id: DoseId,
        medicine_name: impl Into<String>,
        dosage: impl Into<String>,
        scheduled_time: NaiveTime,
        condition: DoseCondition,
    ) -> Self {
        Self {
            id,
            medicine_name: medicine_name.into(),
            dosage: dosage.into(),
            scheduled_time,
            condition,
            taken: false,
        }
    }

    /// Returns true if the dose is still pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.taken
    }
}

/// A medicine plan: what to take and at which times of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medicine {
    /// Identifier.
    pub id: u64,
    /// Medicine name.
    pub name: String,
    /// Dosage text.
    pub dosage: String,
    /// Frequency label, e.g. "Twice daily".
    #[serde(default)]
    pub frequency: String,
    /// Daily dose times.
    #[serde(with = "hhmm_list")]
    pub times: Vec<NaiveTime>,
    /// Food condition for every dose.
    #[serde(default)]
    pub condition: DoseCondition,
    /// Free-text instructions.
    #[serde(default)]
    pub instructions: String,
}

/// Serde helpers for `HH:MM` times (seconds are accepted on input).
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub(super) fn parse(s: &str) -> Option<NaiveTime> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .ok()
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid time of day: {s:?}")))
    }
}

/// Serde helpers for lists of `HH:MM` times.
mod hhmm_list {
    use chrono::NaiveTime;
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(times: &[NaiveTime], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(times.len()))?;
        for time in times {
            seq.serialize_element(&time.format("%H:%M").to_string())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| {
                super::hhmm::parse(s).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid time of day: {s:?}"))
                })
            })
            .collect()
    }
}
