//! Dish records handed to the cart by menu pages.
//!
//! Menu pages send loosely shaped JSON: the restaurant may be a flat
//! `restaurantId` or a nested `restaurant: { id }`, and the price may be a
//! number or a string. [`DishInput`] accepts all of that, and
//! [`Dish::try_from`] normalizes it once so nothing downstream has to guess.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::{DishId, RestaurantId};
use super::price::{Price, PriceError};

/// Errors that can occur when normalizing a dish payload.
#[derive(thiserror::Error, Debug)]
pub enum DishError {
    /// The payload is not a JSON object with an `id`.
    #[error("malformed dish payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Neither `restaurantId` nor `restaurant.id` is present.
    #[error("dish {0} carries neither restaurantId nor restaurant.id")]
    MissingRestaurant(DishId),
    /// The payload has no `price`.
    #[error("dish {0} has no price")]
    MissingPrice(DishId),
    /// The `price` is not a valid amount.
    #[error("dish {id} has an invalid price: {source}")]
    InvalidPrice {
        /// Offending dish.
        id: DishId,
        /// Why the price was rejected.
        source: PriceError,
    },
}

/// Raw dish payload as sent by a menu page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishInput {
    /// Dish identifier.
    pub id: DishId,
    /// Flat restaurant reference.
    #[serde(default)]
    pub restaurant_id: Option<RestaurantId>,
    /// Nested restaurant object; only its `id` is interpreted.
    #[serde(default)]
    pub restaurant: Option<Value>,
    /// Unit price, number or numeric string.
    #[serde(default)]
    pub price: Option<Value>,
    /// Everything else (name, description, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A normalized dish, ready to go into a cart.
///
/// Fields other than `id`, `restaurantId` and `price` are opaque and passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Dish identifier.
    pub id: DishId,
    /// Owning restaurant.
    pub restaurant_id: RestaurantId,
    /// Unit price.
    pub price: Price,
    /// Opaque descriptive fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dish {
    /// Create a dish with no descriptive fields.
    #[must_use]
    pub fn new(id: impl Into<DishId>, restaurant_id: impl Into<RestaurantId>, price: Price) -> Self {
        Self {
            id: id.into(),
            restaurant_id: restaurant_id.into(),
            price,
            extra: Map::new(),
        }
    }

    /// Attach an opaque descriptive field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Display name, if the payload carried one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }

    /// Parse and normalize a JSON dish payload.
    ///
    /// # Errors
    ///
    /// Returns a [`DishError`] if the payload is malformed or misses the
    /// restaurant or price.
    pub fn from_json(value: Value) -> Result<Self, DishError> {
        let input: DishInput = serde_json::from_value(value)?;
        Self::try_from(input)
    }
}

fn nested_restaurant_id(restaurant: &Value) -> Option<RestaurantId> {
    let id = restaurant.get("id")?;
    serde_json::from_value(id.clone()).ok()
}

fn price_from_value(value: &Value) -> Result<Price, PriceError> {
    match value {
        Value::Number(n) => n.as_f64().map_or_else(
            || Err(PriceError::Invalid(n.to_string())),
            Price::from_f64,
        ),
        Value::String(s) => Price::parse(s),
        other => Err(PriceError::Invalid(other.to_string())),
    }
}

impl TryFrom<DishInput> for Dish {
    type Error = DishError;

    fn try_from(input: DishInput) -> Result<Self, Self::Error> {
        let DishInput {
            id,
            restaurant_id,
            restaurant,
            price,
            mut extra,
        } = input;

        // Flat reference wins when both shapes are present.
        let restaurant_id = match restaurant_id {
            Some(rid) => rid,
            None => restaurant
                .as_ref()
                .and_then(nested_restaurant_id)
                .ok_or_else(|| DishError::MissingRestaurant(id.clone()))?,
        };

        let price = match price {
            Some(Value::Null) | None => return Err(DishError::MissingPrice(id)),
            Some(raw) => price_from_value(&raw).map_err(|source| DishError::InvalidPrice {
                id: id.clone(),
                source,
            })?,
        };

        if let Some(restaurant) = restaurant {
            extra.insert("restaurant".to_owned(), restaurant);
        }

        Ok(Self {
            id,
            restaurant_id,
            price,
            extra,
        })
    }
}
