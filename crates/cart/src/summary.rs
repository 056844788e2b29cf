//! Serializable cart snapshot for rendering layers.

use deliveboo_core::Dish;
use serde::Serialize;

use crate::line_item::CartLineItem;

/// Everything a cart view or badge needs, in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Line items in insertion order.
    pub items: Vec<CartLineItem>,
    /// Total units.
    pub cart_length: u32,
    /// Total price with two decimals.
    pub total_price: String,
    /// Whether the replace-or-cancel prompt should be shown.
    pub conflict_prompt_visible: bool,
    /// Dish awaiting that decision.
    pub pending_conflict_item: Option<Dish>,
}
