//! Inventory mutations as pure reducers.
//!
//! The item store owns the records. These helpers compute the next
//! snapshot for an edit, a new item, or a "mark used" action and leave
//! the input untouched.

use super::model::{ItemId, TrackedItem};
use super::validation::{ValidationError, validate_item};

/// Add a new item.
///
/// # Errors
///
/// Returns the item's validation errors, plus `DuplicateId` if the ID is
/// already taken.
pub fn add_item(
    items: &[TrackedItem],
    item: TrackedItem,
) -> Result<Vec<TrackedItem>, Vec<ValidationError>> {
    let mut errors = validate_item(&item).err().unwrap_or_default();
    if items.iter().any(|existing| existing.id == item.id) {
        errors.push(ValidationError::DuplicateId { id: item.id });
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut next = items.to_vec();
    next.push(item);
    Ok(next)
}

/// Replace the item with the same ID.
///
/// An unknown ID leaves the list unchanged.
///
/// # Errors
///
/// Returns the updated item's validation errors.
pub fn update_item(
    items: &[TrackedItem],
    updated: &TrackedItem,
) -> Result<Vec<TrackedItem>, Vec<ValidationError>> {
    validate_item(updated)?;

    if !items.iter().any(|item| item.id == updated.id) {
        tracing::debug!(id = %updated.id, "update for unknown item ignored");
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.id == updated.id {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect())
}

/// Remove an item that has been used up or thrown away.
///
/// An unknown ID leaves the list unchanged.
#[must_use]
pub fn mark_used(items: &[TrackedItem], id: ItemId) -> Vec<TrackedItem> {
    let next: Vec<TrackedItem> = items.iter().filter(|item| item.id != id).cloned().collect();
    if next.len() == items.len() {
        tracing::debug!(%id, "mark used for unknown item ignored");
    }
    next
}

/// Smallest ID greater than every ID in use.
#[must_use]
pub fn next_item_id(items: &[TrackedItem]) -> ItemId {
    ItemId::new(items.iter().map(|item| item.id.0).max().map_or(1, |max| max + 1))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::item::Category;

    fn item(id: u64, name: &str) -> TrackedItem {
        TrackedItem {
            id: ItemId::new(id),
            name: name.to_string(),
            category: Category::Food,
            open_date: None,
            expiry_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn test_add_item() {
        let items = vec![item(1, "Rice")];
        let next = add_item(&items, item(2, "Lentils")).unwrap();
        assert_eq!(next.len(), 2);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_add_item_rejects_duplicate_and_blank() {
        let items = vec![item(1, "Rice")];
        let errors = add_item(&items, item(1, " ")).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyName { id: ItemId::new(1) },
                ValidationError::DuplicateId { id: ItemId::new(1) },
            ]
        );
    }

    #[test]
    fn test_update_item() {
        let items = vec![item(1, "Rice"), item(2, "Lentils")];
        let mut edited = item(2, "Red Lentils");
        edited.category = Category::Other;
        let next = update_item(&items, &edited).unwrap();
        assert_eq!(next[1], edited);
        assert_eq!(next[0], items[0]);

        let unknown = update_item(&items, &item(9, "Flour")).unwrap();
        assert_eq!(unknown, items);
    }

    #[test]
    fn test_mark_used() {
        let items = vec![item(1, "Rice"), item(2, "Lentils")];
        assert_eq!(mark_used(&items, ItemId::new(1)), vec![item(2, "Lentils")]);
        assert_eq!(mark_used(&items, ItemId::new(5)), items);
    }

    #[test]
    fn test_next_item_id() {
        assert_eq!(next_item_id(&[]), ItemId::new(1));
        assert_eq!(next_item_id(&[item(4, "a"), item(2, "b")]), ItemId::new(5));
    }
}
