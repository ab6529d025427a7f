//! Shopping data models.

use serde::{Deserialize, Serialize};

use crate::item::{Category, ItemId};

/// Urgency of a suggestion or notification.
///
/// Ordered from most to least urgent, so sorting ascending puts `High`
/// first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Act now.
    High,
    /// Act soon.
    #[default]
    Medium,
    /// Informational.
    Low,
}

impl Priority {
    /// Parse from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "low" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One platform's offer for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOffer {
    /// Store or delivery platform.
    pub platform: String,
    /// Price as displayed, currency included. Never parsed.
    pub price: String,
    /// Delivery estimate, e.g. "10 min".
    #[serde(default)]
    pub delivery_estimate: String,
    /// Whether the platform has stock.
    #[serde(default)]
    pub in_stock: bool,
    /// Pre-computed "best offer" flag.
    #[serde(default)]
    pub recommended: bool,
}

impl PriceOffer {
    /// Creates an in-stock, unflagged offer.
    #[must_use]
    pub fn new(
        platform: impl Into<String>,
        price: impl Into<String>,
        delivery_estimate: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            price: price.into(),
            delivery_estimate: delivery_estimate.into(),
            in_stock: true,
            recommended: false,
        }
    }

    /// Marks this offer as the recommended one.
    #[must_use]
    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    /// Marks this offer as out of stock.
    #[must_use]
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }
}

/// A suggestion to restock a tracked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingSuggestion {
    /// Item being replaced.
    pub item_id: ItemId,
    /// Product name.
    pub name: String,
    /// Product category.
    pub category: Category,
    /// Why it is suggested, e.g. "Expired 2 days ago".
    pub reason: String,
    /// How urgent the replacement is.
    pub priority: Priority,
    /// Days left on the tracked item.
    pub days_left: i64,
    /// Price comparison entries, in platform order.
    #[serde(default)]
    pub offers: Vec<PriceOffer>,
}

impl ShoppingSuggestion {
    /// Attach price comparison entries.
    #[must_use]
    pub fn with_offers(mut self, offers: Vec<PriceOffer>) -> Self {
        self.offers = offers;
        self
    }
}

/// An entry on the user's shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    /// Identifier, unique within the list.
    pub id: u64,
    /// Product name.
    pub name: String,
    /// Units to buy.
    pub quantity: u32,
    /// Price of the chosen offer, if any offer was known.
    #[serde(default)]
    pub best_price: Option<String>,
    /// Platform of the chosen offer.
    #[serde(default)]
    pub platform: Option<String>,
}
