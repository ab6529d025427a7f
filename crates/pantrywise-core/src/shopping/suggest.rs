//! Offer selection, restock suggestions and shopping list reducers.

use chrono::NaiveDate;

use super::model::{PriceOffer, Priority, ShoppingListEntry, ShoppingSuggestion};
use crate::item::{ItemId, StatusKind, TrackedItem, classify, days_left, status_label};

/// Expiring items with at most this many days left get `Medium` priority.
pub const MEDIUM_PRIORITY_DAYS: i64 = 7;

/// Pick the offer to show as "Best".
///
/// Trusts the pre-computed `recommended` flag: the first flagged offer
/// wins, otherwise the first offer. Prices are never compared. Returns
/// `None` only for an empty slice.
#[must_use]
pub fn best_offer(offers: &[PriceOffer]) -> Option<&PriceOffer> {
    offers
        .iter()
        .find(|offer| offer.recommended)
        .or_else(|| offers.first())
}

/// Priority for an item with `days_left` remaining.
#[must_use]
pub const fn restock_priority(days_left: i64) -> Priority {
    if days_left < 0 {
        Priority::High
    } else if days_left <= MEDIUM_PRIORITY_DAYS {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Suggest replacements for expired and expiring items.
///
/// Suggestions are ordered by priority, then by days left. Offers are
/// empty; attach them with [`ShoppingSuggestion::with_offers`].
#[must_use]
pub fn suggest_replacements(items: &[TrackedItem], today: NaiveDate) -> Vec<ShoppingSuggestion> {
    let mut suggestions: Vec<ShoppingSuggestion> = items
        .iter()
        .filter_map(|item| {
            let days = days_left(today, item.expiry_date);
            if classify(days) == StatusKind::Fresh {
                return None;
            }
            Some(ShoppingSuggestion {
                item_id: item.id,
                name: item.name.clone(),
                category: item.category.clone(),
                reason: status_label(days),
                priority: restock_priority(days),
                days_left: days,
                offers: Vec::new(),
            })
        })
        .collect();

    suggestions.sort_by_key(|s| (s.priority, s.days_left));
    suggestions
}

/// Toggle a suggestion's checkbox.
#[must_use]
pub fn toggle_selection(selected: &[ItemId], id: ItemId) -> Vec<ItemId> {
    if selected.contains(&id) {
        selected.iter().copied().filter(|s| *s != id).collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id);
        next
    }
}

/// Append the selected suggestions to the shopping list.
///
/// Each entry starts at quantity 1 and carries the suggestion's best
/// offer. New entries get IDs above every existing one, in suggestion
/// order.
#[must_use]
pub fn add_selected(
    list: &[ShoppingListEntry],
    suggestions: &[ShoppingSuggestion],
    selected: &[ItemId],
) -> Vec<ShoppingListEntry> {
    let mut next = list.to_vec();
    let mut next_id = list.iter().map(|entry| entry.id).max().unwrap_or(0) + 1;

    for suggestion in suggestions.iter().filter(|s| selected.contains(&s.item_id)) {
        let offer = best_offer(&suggestion.offers);
        next.push(ShoppingListEntry {
            id: next_id,
            name: suggestion.name.clone(),
            quantity: 1,
            best_price: offer.map(|o| o.price.clone()),
            platform: offer.map(|o| o.platform.clone()),
        });
        next_id += 1;
    }

    tracing::debug!(added = next.len() - list.len(), "suggestions added to shopping list");
    next
}

/// Remove an entry from the shopping list. Unknown IDs are ignored.
#[must_use]
pub fn remove_entry(list: &[ShoppingListEntry], id: u64) -> Vec<ShoppingListEntry> {
    let next: Vec<ShoppingListEntry> =
        list.iter().filter(|entry| entry.id != id).cloned().collect();
    if next.len() == list.len() {
        tracing::debug!(id, "remove for unknown shopping list entry ignored");
    }
    next
}
