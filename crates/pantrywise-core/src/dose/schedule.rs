//! Daily schedule helpers: expanding plans, finding the next dose, missed
//! doses and snooze times.

use chrono::{Duration, NaiveTime};

use super::model::{DoseId, DoseRecord, Medicine};

/// Default reminder snooze.
pub const DEFAULT_DOSE_SNOOZE_MINUTES: u32 = 15;

/// Expand medicine plans into one pending dose per scheduled time.
///
/// Doses are ordered by time (plan order breaks ties) and numbered from 1.
#[must_use]
pub fn schedule_for_day(medicines: &[Medicine]) -> Vec<DoseRecord> {
    let mut slots: Vec<(&Medicine, NaiveTime)> = medicines
        .iter()
        .flat_map(|medicine| medicine.times.iter().map(move |time| (medicine, *time)))
        .collect();
    slots.sort_by_key(|(_, time)| *time);

    slots
        .into_iter()
        .zip(1..)
        .map(|((medicine, time), id)| {
            DoseRecord::new(
                DoseId::new(id),
                medicine.name.clone(),
                medicine.dosage.clone(),
                time,
                medicine.condition,
            )
        })
        .collect()
}

/// Earliest pending dose due at or after `now`.
#[must_use]
pub fn next_pending(doses: &[DoseRecord], now: NaiveTime) -> Option<&DoseRecord> {
    doses
        .iter()
        .filter(|dose| dose.is_pending() && dose.scheduled_time >= now)
        .min_by_key(|dose| dose.scheduled_time)
}

/// Pending doses more than `grace_minutes` past their time.
#[must_use]
pub fn overdue(doses: &[DoseRecord], now: NaiveTime, grace_minutes: u32) -> Vec<&DoseRecord> {
    let grace = Duration::minutes(i64::from(grace_minutes));
    doses
        .iter()
        .filter(|dose| dose.is_pending() && now - dose.scheduled_time > grace)
        .collect()
}

/// When a snoozed reminder should fire again. Wraps past midnight.
#[must_use]
pub fn snooze_reminder(now: NaiveTime, minutes: u32) -> NaiveTime {
    now + Duration::minutes(i64::from(minutes))
}
