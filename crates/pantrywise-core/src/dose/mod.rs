//! Medicine dose tracking.
//!
//! A day's schedule is a list of [`DoseRecord`]s. The functions here never
//! mutate the schedule in place: [`take_dose`] returns the next snapshot,
//! [`summarize`] turns it into a [`ComplianceSummary`]. Delivering
//! reminders is left to the host.

mod compliance;
mod model;
mod schedule;

pub use compliance::{ComplianceBand, ComplianceSummary, combine, summarize, take_dose};
pub use model::{DoseCondition, DoseId, DoseRecord, Medicine};
pub use schedule::{
    DEFAULT_DOSE_SNOOZE_MINUTES, next_pending, overdue, schedule_for_day, snooze_reminder,
};
