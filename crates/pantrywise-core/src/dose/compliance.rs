//! Dose compliance arithmetic.

use serde::{Deserialize, Serialize};

use super::model::{DoseId, DoseRecord};

/// Per-day aggregate over dose records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Doses taken.
    pub taken_count: usize,
    /// Doses still pending.
    pub remaining_count: usize,
    /// Rounded share of doses taken, 0 when nothing is scheduled.
    pub compliance_percent: u8,
}

impl ComplianceSummary {
    /// Build a summary from raw counts.
    #[must_use]
    pub fn from_counts(taken_count: usize, remaining_count: usize) -> Self {
        Self {
            taken_count,
            remaining_count,
            compliance_percent: percent(taken_count, taken_count + remaining_count),
        }
    }

    /// Total scheduled doses.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.taken_count + self.remaining_count
    }

    /// Band used to colour the compliance bar.
    #[must_use]
    pub const fn band(&self) -> ComplianceBand {
        ComplianceBand::from_percent(self.compliance_percent)
    }
}

/// `round(100 * part / whole)` with halves rounded up; 0 for an empty whole.
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

/// Summarize a day's doses.
#[must_use]
pub fn summarize(doses: &[DoseRecord]) -> ComplianceSummary {
    let taken = doses.iter().filter(|dose| dose.taken).count();
    ComplianceSummary::from_counts(taken, doses.len() - taken)
}

/// Combine several days into one summary, weighting every dose equally.
#[must_use]
pub fn combine(days: &[ComplianceSummary]) -> ComplianceSummary {
    let (taken, remaining) = days.iter().fold((0, 0), |(taken, remaining), day| {
        (taken + day.taken_count, remaining + day.remaining_count)
    });
    ComplianceSummary::from_counts(taken, remaining)
}

/// Record a dose as taken.
///
/// Returns a new schedule in which the dose with `id` is taken. An unknown
/// ID is a no-op: the schedule comes back unchanged. Taking an already
/// taken dose changes nothing, so the operation is idempotent.
#[must_use]
pub fn take_dose(doses: &[DoseRecord], id: DoseId) -> Vec<DoseRecord> {
    if !doses.iter().any(|dose| dose.id == id) {
        tracing::debug!(%id, "take for unknown dose ignored");
        return doses.to_vec();
    }

    doses
        .iter()
        .map(|dose| {
            if dose.id == id {
                DoseRecord {
                    taken: true,
                    ..dose.clone()
                }
            } else {
                dose.clone()
            }
        })
        .collect()
}

/// Qualitative compliance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceBand {
    /// Every dose taken.
    Complete,
    /// At least 75%.
    Good,
    /// At least 50%.
    Partial,
    /// Below 50%.
    Poor,
}

impl ComplianceBand {
    /// Band for a percentage.
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        match percent {
            100.. => Self::Complete,
            75..=99 => Self::Good,
            50..=74 => Self::Partial,
            _ => Self::Poor,
        }
    }
}
