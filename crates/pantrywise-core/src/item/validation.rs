//! Item validation.

use chrono::NaiveDate;

use super::model::{ItemId, TrackedItem};

/// Date format accepted from host input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation error for a tracked item.
///
/// Every variant names the item it belongs to so a batch import can report
/// all offending records at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Item name is empty.
    EmptyName {
        /// Offending item.
        id: ItemId,
    },
    /// Expiry date is absent.
    MissingExpiryDate {
        /// Offending item.
        id: ItemId,
    },
    /// Expiry date could not be parsed.
    InvalidExpiryDate {
        /// Offending item.
        id: ItemId,
        /// Raw input.
        value: String,
    },
    /// Open date could not be parsed.
    InvalidOpenDate {
        /// Offending item.
        id: ItemId,
        /// Raw input.
        value: String,
    },
    /// Open date lies after the expiry date.
    OpenedAfterExpiry {
        /// Offending item.
        id: ItemId,
    },
    /// Another item already uses this ID.
    DuplicateId {
        /// Offending item.
        id: ItemId,
    },
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "Item name is required",
            Self::MissingExpiryDate { .. } => "Expiry date is required",
            Self::InvalidExpiryDate { .. } => "Expiry date must be a valid YYYY-MM-DD date",
            Self::InvalidOpenDate { .. } => "Open date must be a valid YYYY-MM-DD date",
            Self::OpenedAfterExpiry { .. } => "Open date cannot be after the expiry date",
            Self::DuplicateId { .. } => "Item ID is already in use",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName { .. } => "name",
            Self::MissingExpiryDate { .. } | Self::InvalidExpiryDate { .. } => "expiry_date",
            Self::InvalidOpenDate { .. } | Self::OpenedAfterExpiry { .. } => "open_date",
            Self::DuplicateId { .. } => "id",
        }
    }

    /// Get the item this error relates to.
    #[must_use]
    pub const fn item_id(&self) -> ItemId {
        match self {
            Self::EmptyName { id }
            | Self::MissingExpiryDate { id }
            | Self::InvalidExpiryDate { id, .. }
            | Self::InvalidOpenDate { id, .. }
            | Self::OpenedAfterExpiry { id }
            | Self::DuplicateId { id } => *id,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpiryDate { id, value } | Self::InvalidOpenDate { id, value } => {
                write!(f, "item {id}: {} (got {value:?})", self.message())
            }
            _ => write!(f, "item {}: {}", self.item_id(), self.message()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating an item.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a tracked item.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_item(item: &TrackedItem) -> ValidationResult {
    let mut errors = Vec::new();

    if item.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName { id: item.id });
    }

    if item.open_date.is_some_and(|opened| opened > item.expiry_date) {
        errors.push(ValidationError::OpenedAfterExpiry { id: item.id });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse an ISO calendar date, ignoring surrounding whitespace.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::item::Category;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-02-29 "),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_date("2023-02-29"), None);
        assert_eq!(parse_date("29/02/2024"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_validate_item_same_day_open_and_expiry() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let item = TrackedItem {
            id: ItemId::new(1),
            name: "Batteries AA".to_string(),
            category: Category::Batteries,
            open_date: Some(day),
            expiry_date: day,
        };
        assert!(validate_item(&item).is_ok());
    }

    #[test]
    fn test_display_includes_item_and_value() {
        let err = ValidationError::InvalidOpenDate {
            id: ItemId::new(9),
            value: "soon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "item 9: Open date must be a valid YYYY-MM-DD date (got \"soon\")"
        );
        assert_eq!(err.field(), "open_date");
    }
}
