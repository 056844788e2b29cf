//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! deliveboo cart show
//!
//! # Add a dish from a JSON payload
//! deliveboo cart add --dish '{"id": 3, "restaurant": {"id": 1}, "price": "7.50", "name": "Pizza"}'
//!
//! # Add a dish from flags, starting a new cart if it is from another restaurant
//! deliveboo cart add --id 9 --restaurant-id 2 --price 12 --name Ramen --replace
//!
//! # Take one unit out, drop a whole line, empty the cart
//! deliveboo cart remove 3
//! deliveboo cart delete 3
//! deliveboo cart clear
//! ```

use deliveboo_cart::{AddOutcome, CartStore, CartSummary, KeyValueStorage, RemoveOutcome};
use deliveboo_core::{Dish, DishId, Price, RestaurantId};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::CommandError;

/// Dish description as given on the command line.
#[derive(Debug, Default)]
pub struct DishSpec {
    /// Full JSON payload; wins over the individual flags.
    pub json: Option<String>,
    /// Dish id; integer-looking values become numeric ids.
    pub id: Option<String>,
    /// Owning restaurant id, parsed like `id`.
    pub restaurant_id: Option<String>,
    /// Unit price, e.g. `"10.50"`.
    pub price: Option<String>,
    /// Display name stored with the line.
    pub name: Option<String>,
}

impl DishSpec {
    /// Build the dish, normalizing it the same way a menu page payload is.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or a required flag is missing.
    pub fn into_dish(self) -> Result<Dish, CommandError> {
        if let Some(json) = self.json {
            let payload = serde_json::from_str(&json)?;
            return Ok(Dish::from_json(payload)?);
        }

        let id: DishId = self
            .id
            .ok_or(CommandError::MissingArgument("--id"))?
            .parse()
            .unwrap_or_else(|never| match never {});
        let restaurant_id: RestaurantId = self
            .restaurant_id
            .ok_or(CommandError::MissingArgument("--restaurant-id"))?
            .parse()
            .unwrap_or_else(|never| match never {});
        let price = Price::parse(
            self.price
                .as_deref()
                .ok_or(CommandError::MissingArgument("--price"))?,
        )?;

        let dish = Dish::new(id, restaurant_id, price);
        Ok(match self.name {
            Some(name) => dish.with_field("name", name),
            None => dish,
        })
    }
}

/// Result of a mutating cart command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartReport {
    /// What happened, e.g. `added` or `removed`.
    pub status: &'static str,
    /// Cart after the command.
    pub cart: CartSummary,
}

impl CartReport {
    fn new<S: KeyValueStorage>(status: &'static str, cart: &CartStore<S>) -> Self {
        Self {
            status,
            cart: cart.summary(),
        }
    }
}

/// Fail if the last storage write did not go through.
fn ensure_synced<S: KeyValueStorage>(cart: &mut CartStore<S>) -> Result<(), CommandError> {
    if cart.is_synced() {
        return Ok(());
    }
    cart.try_persist()?;
    Ok(())
}

/// Current cart contents.
#[must_use]
pub fn show<S: KeyValueStorage>(cart: &CartStore<S>) -> CartSummary {
    cart.summary()
}

/// Add one unit of a dish.
///
/// A dish from another restaurant replaces the cart when `replace` is set;
/// otherwise the conflict is cancelled and reported as an error.
///
/// # Errors
///
/// Returns an error on a restaurant conflict without `replace`, or if the
/// cart cannot be saved.
#[instrument(skip(cart, dish), fields(dish_id = %dish.id))]
pub fn add<S: KeyValueStorage>(
    cart: &mut CartStore<S>,
    dish: Dish,
    replace: bool,
) -> Result<CartReport, CommandError> {
    let dish_restaurant = dish.restaurant_id.clone();

    let status = match cart.add_to_cart(dish) {
        AddOutcome::Added => "added",
        AddOutcome::Incremented { .. } => "incremented",
        AddOutcome::ConflictPending if replace => {
            cart.confirm_replace_cart();
            info!(restaurant_id = %dish_restaurant, "Started a new cart");
            "replaced"
        }
        AddOutcome::ConflictPending => {
            let cart_restaurant = cart.current_restaurant().cloned();
            cart.cancel_conflict();
            warn!("Dish rejected, cart belongs to another restaurant");
            return Err(CommandError::RestaurantConflict {
                cart: cart_restaurant.unwrap_or_else(|| dish_restaurant.clone()),
                dish: dish_restaurant,
            });
        }
    };

    ensure_synced(cart)?;
    Ok(CartReport::new(status, cart))
}

/// Take one unit of a dish out of the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
#[instrument(skip(cart))]
pub fn remove<S: KeyValueStorage>(
    cart: &mut CartStore<S>,
    id: &DishId,
) -> Result<CartReport, CommandError> {
    let status = match cart.remove_from_cart(id) {
        RemoveOutcome::Decremented { .. } => "decremented",
        RemoveOutcome::Removed => "removed",
        RemoveOutcome::NotFound => "not_found",
    };

    ensure_synced(cart)?;
    Ok(CartReport::new(status, cart))
}

/// Drop a dish's whole line.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
#[instrument(skip(cart))]
pub fn delete<S: KeyValueStorage>(
    cart: &mut CartStore<S>,
    id: &DishId,
) -> Result<CartReport, CommandError> {
    let status = if cart.delete_from_cart(id) {
        "deleted"
    } else {
        "not_found"
    };

    ensure_synced(cart)?;
    Ok(CartReport::new(status, cart))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
#[instrument(skip(cart))]
pub fn clear<S: KeyValueStorage>(cart: &mut CartStore<S>) -> Result<CartReport, CommandError> {
    cart.clear_cart();
    ensure_synced(cart)?;
    Ok(CartReport::new("cleared", cart))
}
