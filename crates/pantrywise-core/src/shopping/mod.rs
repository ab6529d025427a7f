//! Shopping suggestions and price comparison.
//!
//! Items that are expired or expiring turn into [`ShoppingSuggestion`]s.
//! Each suggestion can carry [`PriceOffer`]s from several platforms;
//! [`best_offer`] picks the one to highlight by trusting the
//! `recommended` flag in the data.

mod model;
mod suggest;

pub use model::{PriceOffer, Priority, ShoppingListEntry, ShoppingSuggestion};
pub use suggest::{
    MEDIUM_PRIORITY_DAYS, add_selected, best_offer, remove_entry, restock_priority,
    suggest_replacements, toggle_selection,
};
