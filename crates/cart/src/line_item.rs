//! Cart line items.

use deliveboo_core::{Dish, DishId, Price, RestaurantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stored field names that opaque dish fields must not shadow.
const LINE_FIELDS: [&str; 4] = ["id", "restaurantId", "price", "quantity"];

/// One distinct dish in the cart and how many units of it.
///
/// This is also the stored shape: `{id, restaurantId, price, quantity, ...}`
/// with the dish's opaque fields flattened alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Dish identifier, unique within the cart.
    pub id: DishId,
    /// Restaurant the dish belongs to.
    pub restaurant_id: RestaurantId,
    /// Unit price.
    pub price: Price,
    /// Units ordered, at least 1.
    pub quantity: u32,
    /// Opaque descriptive fields copied from the dish.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CartLineItem {
    /// A new line holding a single unit of `dish`.
    ///
    /// Opaque fields named like a line field (a payload's own `quantity`,
    /// say) are dropped so the stored line has exactly one of each.
    #[must_use]
    pub fn from_dish(dish: Dish) -> Self {
        let Dish {
            id,
            restaurant_id,
            price,
            mut extra,
        } = dish;
        for field in LINE_FIELDS {
            extra.remove(field);
        }

        Self {
            id,
            restaurant_id,
            price,
            quantity: 1,
            extra,
        }
    }

    /// Price of the whole line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }

    /// Display name, if the dish carried one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}
