//! Tracked item model types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::status::{self, DerivedStatus, StatusKind};
use super::validation::{ValidationError, parse_date};

/// Unique identifier for a tracked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category.
///
/// The set is open: anything that is not one of the built-in categories
/// is kept verbatim in [`Category::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Tablets, syrups, supplements.
    Medicine,
    /// Skin care and make-up.
    Cosmetics,
    /// Detergents and household cleaners.
    Cleaning,
    /// Packaged food.
    Food,
    /// Batteries of any kind.
    Batteries,
    /// Catch-all bucket offered by the add-product form.
    #[default]
    Other,
    /// User-defined category.
    Custom(String),
}

impl Category {
    /// Built-in categories, in the order the filter chips show them.
    pub const BUILT_IN: [Self; 6] = [
        Self::Medicine,
        Self::Cosmetics,
        Self::Cleaning,
        Self::Food,
        Self::Batteries,
        Self::Other,
    ];

    /// Parse from the stored string representation. Never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "medicine" => Self::Medicine,
            "cosmetics" => Self::Cosmetics,
            "cleaning" => Self::Cleaning,
            "food" => Self::Food,
            "batteries" => Self::Batteries,
            "other" | "" => Self::Other,
            _ => Self::Custom(s.trim().to_string()),
        }
    }

    /// Convert to the stored string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Medicine => "medicine",
            Self::Cosmetics => "cosmetics",
            Self::Cleaning => "cleaning",
            Self::Food => "food",
            Self::Batteries => "batteries",
            Self::Other => "other",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A household product being monitored for expiry.
///
/// Deserializing goes through [`RawItem`], so a decoded item has passed the
/// same validation as [`TrackedItem::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedItem {
    /// Stable identifier assigned at creation.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Product category.
    pub category: Category,
    /// Date the product was opened, if it has been.
    pub open_date: Option<NaiveDate>,
    /// Date after which the product counts as expired.
    pub expiry_date: NaiveDate,
}

impl TrackedItem {
    /// Creates a validated item.
    ///
    /// # Errors
    ///
    /// Returns every [`ValidationError`] found: an empty name, or an open
    /// date later than the expiry date.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: Category,
        open_date: Option<NaiveDate>,
        expiry_date: NaiveDate,
    ) -> Result<Self, Vec<ValidationError>> {
        let item = Self {
            id,
            name: name.into(),
            category,
            open_date,
            expiry_date,
        };
        super::validation::validate_item(&item)?;
        Ok(item)
    }

    /// Whole days until expiry, negative once expired.
    #[must_use]
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        status::days_left(today, self.expiry_date)
    }

    /// Expiry status as of `today`.
    #[must_use]
    pub fn status(&self, today: NaiveDate) -> StatusKind {
        status::classify(self.days_left(today))
    }

    /// Full derived status as of `today`.
    #[must_use]
    pub fn derived(&self, today: NaiveDate, lookback_days: u32) -> DerivedStatus {
        status::derive_status(today, self, lookback_days)
    }
}

/// Unvalidated item as handed over by the host application.
///
/// Dates are ISO `YYYY-MM-DD` strings. Use `TrackedItem::try_from` to
/// validate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    /// Identifier.
    pub id: u64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Category name.
    #[serde(default)]
    pub category: String,
    /// Open date string.
    #[serde(default)]
    pub open_date: Option<String>,
    /// Expiry date string.
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl TryFrom<RawItem> for TrackedItem {
    type Error = Vec<ValidationError>;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let id = ItemId::new(raw.id);
        let mut errors = Vec::new();

        let expiry_date = match raw.expiry_date.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(ValidationError::MissingExpiryDate { id });
                None
            }
            Some(value) => {
                let parsed = parse_date(value);
                if parsed.is_none() {
                    errors.push(ValidationError::InvalidExpiryDate {
                        id,
                        value: value.to_string(),
                    });
                }
                parsed
            }
        };

        let open_date = match raw.open_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => {
                let parsed = parse_date(value);
                if parsed.is_none() {
                    errors.push(ValidationError::InvalidOpenDate {
                        id,
                        value: value.to_string(),
                    });
                }
                parsed
            }
        };

        let Some(expiry_date) = expiry_date else {
            if raw.name.trim().is_empty() {
                errors.push(ValidationError::EmptyName { id });
            }
            return Err(errors);
        };

        match Self::new(
            id,
            raw.name.trim(),
            Category::parse(&raw.category),
            open_date,
            expiry_date,
        ) {
            Ok(item) if errors.is_empty() => Ok(item),
            Ok(_) => Err(errors),
            Err(invalid) => {
                errors.extend(invalid);
                Err(errors)
            }
        }
    }
}

impl<'de> Deserialize<'de> for TrackedItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawItem::deserialize(deserializer)?;
        Self::try_from(raw).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            serde::de::Error::custom(messages.join("; "))
        })
    }
}
