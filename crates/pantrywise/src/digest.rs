//! Daily digest: every screen's headline numbers in one report.

use std::fmt;

use chrono::NaiveDateTime;
use pantrywise_core::dose::{self, ComplianceSummary, DoseRecord};
use pantrywise_core::item::{self, DerivedStatus, StatusKind, TabCounts, TrackedItem};
use pantrywise_core::notification::{self, Notification};
use pantrywise_core::shopping::{self, ShoppingListEntry, ShoppingSuggestion};
use pantrywise_core::{Settings, Snapshot, ValidationError};

/// Everything the digest prints.
#[derive(Debug, Clone)]
pub struct Digest {
    /// Moment the digest was computed for.
    pub now: NaiveDateTime,
    /// Items per status tab.
    pub counts: TabCounts,
    /// Expiring and expired items, most urgent first.
    pub urgent: Vec<(TrackedItem, DerivedStatus)>,
    /// Records that failed validation and were left out.
    pub rejected: Vec<ValidationError>,
    /// Today's dose compliance.
    pub compliance: ComplianceSummary,
    /// Next dose still to take today.
    pub next_dose: Option<DoseRecord>,
    /// Restock suggestions with offers attached.
    pub suggestions: Vec<ShoppingSuggestion>,
    /// Current shopping list.
    pub shopping_list: Vec<ShoppingListEntry>,
    /// Notification feed after preferences are applied.
    pub notifications: Vec<Notification>,
}

impl Digest {
    /// Build the digest for `now` from a snapshot.
    pub fn build(snapshot: &Snapshot, settings: &Settings, now: NaiveDateTime) -> Self {
        let today = now.date();
        let time_of_day = now.time();

        let (items, rejected) = snapshot.partition_items();
        for error in &rejected {
            tracing::warn!(item = %error.item_id(), field = error.field(), "{}", error.message());
        }

        let urgent = item::sort_by_urgency(&items, today)
            .into_iter()
            .filter(|item| item.status(today) != StatusKind::Fresh)
            .map(|item| {
                let derived = item.derived(today, settings.progress_lookback_days);
                (item, derived)
            })
            .collect();

        let doses = snapshot.todays_doses();
        let compliance = dose::summarize(&doses);
        let next_dose = dose::next_pending(&doses, time_of_day).cloned();

        let suggestions = shopping::suggest_replacements(&items, today)
            .into_iter()
            .map(|s| {
                let offers = snapshot.offers_for(&s.name);
                s.with_offers(offers)
            })
            .collect();

        let created_at = now.and_utc();
        let mut feed = notification::expiry_notifications(
            &items,
            today,
            created_at,
            settings.expiry_alert_days,
            1,
        );
        let next_id = feed.len() as u64 + 1;
        feed.extend(notification::dose_notifications(
            &doses,
            time_of_day,
            created_at,
            settings.missed_dose_grace_minutes,
            next_id,
        ));
        let notifications = notification::apply_preferences(&feed, settings);

        tracing::debug!(
            items = items.len(),
            rejected = rejected.len(),
            doses = doses.len(),
            notifications = notifications.len(),
            "digest built"
        );

        Self {
            now,
            counts: item::tab_counts(&items, today),
            urgent,
            rejected,
            compliance,
            next_dose,
            suggestions,
            shopping_list: snapshot.shopping_list.clone(),
            notifications,
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PantryWise digest for {}", self.now.format("%a, %b %d %H:%M"))?;
        writeln!(f)?;

        writeln!(f, "Inventory")?;
        for tab in StatusKind::ALL {
            writeln!(f, "  {:<14} {}", tab.display_name(), self.counts.get(tab))?;
        }
        for (item, derived) in &self.urgent {
            writeln!(
                f,
                "  {} {} ({}) - {}, {:.0}% used",
                item.category.icon(),
                item.name,
                item.category.display_name(),
                derived.label(),
                derived.progress * 100.0
            )?;
        }
        if !self.rejected.is_empty() {
            writeln!(f, "  {} record(s) skipped:", self.rejected.len())?;
            for error in &self.rejected {
                writeln!(f, "    {error}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Medicine")?;
        writeln!(
            f,
            "  {}/{} doses taken ({}%)",
            self.compliance.taken_count,
            self.compliance.total(),
            self.compliance.compliance_percent
        )?;
        if let Some(dose) = &self.next_dose {
            writeln!(
                f,
                "  Next: {} {} {} - {} {}",
                dose.scheduled_time.format("%H:%M"),
                dose.medicine_name,
                dose.dosage,
                dose.condition.icon(),
                dose.condition.display_name()
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Shopping suggestions")?;
        for suggestion in &self.suggestions {
            let best = shopping::best_offer(&suggestion.offers).map_or_else(
                || "no offers".to_string(),
                |offer| format!("best {} on {}", offer.price, offer.platform),
            );
            writeln!(
                f,
                "  [{}] {} - {} ({best})",
                suggestion.priority.as_str().to_uppercase(),
                suggestion.name,
                suggestion.reason
            )?;
        }
        writeln!(f, "  {} item(s) on the list", self.shopping_list.len())?;
        writeln!(f)?;

        writeln!(f, "Notifications")?;
        if self.notifications.is_empty() {
            writeln!(f, "  none")?;
        }
        for notification in &self.notifications {
            writeln!(f, "  {}: {}", notification.title, notification.message)?;
        }
        Ok(())
    }
}
