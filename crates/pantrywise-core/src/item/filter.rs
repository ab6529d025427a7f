//! Home-screen filtering pipeline.
//!
//! The list view applies three independent filters in a fixed order:
//! status tab, then search text, then category chips. Every filter is
//! stable, so the relative order of the input is preserved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{Category, TrackedItem};
use super::status::{StatusKind, classify, days_left};

/// Keep items whose status on `today` matches `tab`.
#[must_use]
pub fn filter_by_tab(items: &[TrackedItem], tab: StatusKind, today: NaiveDate) -> Vec<TrackedItem> {
    items
        .iter()
        .filter(|item| classify(days_left(today, item.expiry_date)) == tab)
        .cloned()
        .collect()
}

/// Case-insensitive substring match on name or category.
///
/// A blank query returns the input unchanged.
#[must_use]
pub fn filter_by_search(items: &[TrackedItem], query: &str) -> Vec<TrackedItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.category.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Category chip selection.
///
/// A list that contains the "All" chip (any casing) selects everything,
/// the same as [`CategorySelection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    /// The "All" chip: no category filtering.
    #[default]
    All,
    /// Only the listed categories.
    Only(Vec<Category>),
}

impl CategorySelection {
    /// Returns true if this selection lets every item through.
    #[must_use]
    pub fn is_all(&self) -> bool {
        match self {
            Self::All => true,
            Self::Only(categories) => {
                categories.is_empty() || categories.iter().any(is_all_chip)
            }
        }
    }

    /// Returns true if `category` passes the selection.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(categories) => self.is_all() || categories.contains(category),
        }
    }

    /// Returns true if the chip for `category` is highlighted.
    #[must_use]
    pub fn is_selected(&self, category: &Category) -> bool {
        matches!(self, Self::Only(categories) if categories.contains(category))
    }

    /// Toggle a category chip.
    ///
    /// Selecting a category drops "All"; deselecting the last one falls
    /// back to "All". Toggling the "All" chip itself resets to "All".
    #[must_use]
    pub fn toggle(self, category: Category) -> Self {
        if is_all_chip(&category) {
            return Self::All;
        }

        let mut categories = match self {
            Self::All => Vec::new(),
            Self::Only(categories) => categories,
        };
        categories.retain(|c| !is_all_chip(c));

        if let Some(pos) = categories.iter().position(|c| *c == category) {
            categories.remove(pos);
        } else {
            categories.push(category);
        }

        if categories.is_empty() {
            Self::All
        } else {
            Self::Only(categories)
        }
    }
}

fn is_all_chip(category: &Category) -> bool {
    matches!(category, Category::Custom(name) if name.eq_ignore_ascii_case("all"))
}

/// Keep items whose category is selected.
#[must_use]
pub fn filter_by_categories(items: &[TrackedItem], selection: &CategorySelection) -> Vec<TrackedItem> {
    if selection.is_all() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| selection.matches(&item.category))
        .cloned()
        .collect()
}

/// Combined home-screen query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Active status tab.
    pub tab: StatusKind,
    /// Search text.
    #[serde(default)]
    pub search: String,
    /// Category chips.
    #[serde(default)]
    pub categories: CategorySelection,
}

impl ItemQuery {
    /// Creates a query for a status tab with no search or category filter.
    #[must_use]
    pub fn for_tab(tab: StatusKind) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    /// Run tab, search and category filters in that order.
    #[must_use]
    pub fn apply(&self, items: &[TrackedItem], today: NaiveDate) -> Vec<TrackedItem> {
        let by_tab = filter_by_tab(items, self.tab, today);
        let by_search = filter_by_search(&by_tab, &self.search);
        let result = filter_by_categories(&by_search, &self.categories);
        tracing::trace!(
            input = items.len(),
            tab = by_tab.len(),
            search = by_search.len(),
            output = result.len(),
            "item query applied"
        );
        result
    }
}

/// Stable sort by ascending days left: the most urgent items first.
#[must_use]
pub fn sort_by_urgency(items: &[TrackedItem], today: NaiveDate) -> Vec<TrackedItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| days_left(today, item.expiry_date));
    sorted
}

/// Per-tab item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabCounts {
    /// Fresh items.
    pub fresh: usize,
    /// Expiring items.
    pub expiring: usize,
    /// Expired items.
    pub expired: usize,
}

impl TabCounts {
    /// Count for one tab.
    #[must_use]
    pub const fn get(&self, tab: StatusKind) -> usize {
        match tab {
            StatusKind::Fresh => self.fresh,
            StatusKind::Expiring => self.expiring,
            StatusKind::Expired => self.expired,
        }
    }

    /// Total number of items counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.fresh + self.expiring + self.expired
    }
}

/// Count items per status tab.
#[must_use]
pub fn tab_counts(items: &[TrackedItem], today: NaiveDate) -> TabCounts {
    items
        .iter()
        .fold(TabCounts::default(), |mut counts, item| {
            match item.status(today) {
                StatusKind::Fresh => counts.fresh += 1,
                StatusKind::Expiring => counts.expiring += 1,
                StatusKind::Expired => counts.expired += 1,
            }
            counts
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn item(id: u64, name: &str, category: Category, days: i64) -> TrackedItem {
        TrackedItem {
            id: ItemId::new(id),
            name: name.to_string(),
            category,
            open_date: None,
            expiry_date: today() + chrono::Duration::days(days),
        }
    }

    fn sample() -> Vec<TrackedItem> {
        vec![
            item(1, "Vitamin D3 Tablets", Category::Medicine, 5),
            item(2, "Face Moisturizer", Category::Cosmetics, 45),
            item(3, "All-Purpose Cleaner", Category::Cleaning, -2),
            item(4, "Sunscreen SPF 50", Category::Cosmetics, 120),
        ]
    }

    fn ids(items: &[TrackedItem]) -> Vec<u64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn test_filter_by_tab_keeps_order() {
        let items = sample();
        assert_eq!(ids(&filter_by_tab(&items, StatusKind::Fresh, today())), vec![2, 4]);
        assert_eq!(ids(&filter_by_tab(&items, StatusKind::Expiring, today())), vec![1]);
        assert_eq!(ids(&filter_by_tab(&items, StatusKind::Expired, today())), vec![3]);
    }

    #[test]
    fn test_filter_by_search() {
        let items = sample();
        assert_eq!(filter_by_search(&items, ""), items);
        assert_eq!(filter_by_search(&items, "   "), items);
        assert_eq!(ids(&filter_by_search(&items, "VITAMIN")), vec![1]);
        // Matches the category, not the name
        assert_eq!(ids(&filter_by_search(&items, "cosmetic")), vec![2, 4]);
        assert!(filter_by_search(&items, "shampoo").is_empty());
    }

    #[test]
    fn test_filter_by_categories() {
        let items = sample();
        assert_eq!(filter_by_categories(&items, &CategorySelection::All), items);
        assert_eq!(filter_by_categories(&items, &CategorySelection::Only(vec![])), items);
        let selection = CategorySelection::Only(vec![Category::Cleaning, Category::Medicine]);
        assert_eq!(ids(&filter_by_categories(&items, &selection)), vec![1, 3]);
    }

    #[test]
    fn test_all_chip_inside_list_selects_everything() {
        let items = sample();
        let selection: CategorySelection = serde_json::from_str(r#"{"only":["All"]}"#).unwrap();
        assert!(selection.is_all());
        assert_eq!(filter_by_categories(&items, &selection), items);

        let selection: CategorySelection =
            serde_json::from_str(r#"{"only":["all","cleaning"]}"#).unwrap();
        assert_eq!(filter_by_categories(&items, &selection), items);
        assert!(selection.matches(&Category::Food));

        let reset = CategorySelection::Only(vec![Category::Food]).toggle(Category::parse("All"));
        assert_eq!(reset, CategorySelection::All);
    }

    #[test]
    fn test_toggle_category() {
        let selection = CategorySelection::All.toggle(Category::Food);
        assert_eq!(selection, CategorySelection::Only(vec![Category::Food]));
        assert!(selection.is_selected(&Category::Food));

        let selection = selection.toggle(Category::Medicine);
        assert_eq!(
            selection,
            CategorySelection::Only(vec![Category::Food, Category::Medicine])
        );

        let selection = selection.toggle(Category::Food).toggle(Category::Medicine);
        assert_eq!(selection, CategorySelection::All);
    }

    #[test]
    fn test_query_applies_all_three_filters() {
        let items = sample();
        let query = ItemQuery {
            tab: StatusKind::Fresh,
            search: "s".to_string(),
            categories: CategorySelection::Only(vec![Category::Cosmetics]),
        };
        // Both fresh items match "s" and are cosmetics
        assert_eq!(ids(&query.apply(&items, today())), vec![2, 4]);

        let query = ItemQuery {
            search: "sun".to_string(),
            ..query
        };
        assert_eq!(ids(&query.apply(&items, today())), vec![4]);

        let query = ItemQuery {
            categories: CategorySelection::Only(vec![Category::Food]),
            ..query
        };
        assert!(query.apply(&items, today()).is_empty());
    }

    #[test]
    fn test_sort_by_urgency_and_counts() {
        let items = sample();
        assert_eq!(ids(&sort_by_urgency(&items, today())), vec![3, 1, 2, 4]);

        let counts = tab_counts(&items, today());
        assert_eq!(counts.get(StatusKind::Fresh), 2);
        assert_eq!(counts.get(StatusKind::Expiring), 1);
        assert_eq!(counts.get(StatusKind::Expired), 1);
        assert_eq!(counts.total(), 4);
    }
}
