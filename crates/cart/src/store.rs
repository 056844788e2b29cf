//! The cart store.
//!
//! [`CartStore`] is the single source of truth for cart contents. It is an
//! owned value: the composition root builds one, restores it, and hands
//! `&mut` access to whatever drives the UI. Mutations therefore never
//! interleave.

use std::collections::HashSet;

use deliveboo_core::{Dish, DishError, DishId, RestaurantId, format_amount};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::PersistError;
use crate::line_item::CartLineItem;
use crate::storage::KeyValueStorage;
use crate::summary::CartSummary;

/// Storage key the cart is written under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// What [`CartStore::add_to_cart`] did with a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line was incremented to `quantity`.
    Incremented {
        /// Quantity after the increment.
        quantity: u32,
    },
    /// The dish belongs to another restaurant and awaits confirmation.
    ConflictPending,
}

/// What [`CartStore::remove_from_cart`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The line was decremented to `quantity`.
    Decremented {
        /// Quantity after the decrement.
        quantity: u32,
    },
    /// The last unit was removed along with its line.
    Removed,
    /// No line with that id.
    NotFound,
}

/// What [`CartStore::restore`] found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Stored items replaced the in-memory ones.
    Restored {
        /// Number of lines restored.
        lines: usize,
    },
    /// Nothing stored, or storage could not be read.
    Absent,
    /// The stored value was malformed and ignored.
    Discarded,
}

/// Shopping cart scoped to one restaurant at a time.
#[derive(Debug)]
pub struct CartStore<S> {
    items: Vec<CartLineItem>,
    pending_conflict_item: Option<Dish>,
    conflict_prompt_visible: bool,
    storage: S,
    storage_key: String,
    synced: bool,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Empty cart persisting under [`DEFAULT_STORAGE_KEY`].
    ///
    /// Nothing is read from `storage` until [`Self::restore`] is called.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Empty cart persisting under a custom key.
    #[must_use]
    pub fn with_key(storage: S, storage_key: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            pending_conflict_item: None,
            conflict_prompt_visible: false,
            storage,
            storage_key: storage_key.into(),
            synced: true,
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Line for `id`, if present.
    #[must_use]
    pub fn item(&self, id: &DishId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| &line.id == id)
    }

    /// Returns true if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dish waiting on a replace-or-cancel decision.
    #[must_use]
    pub const fn pending_conflict_item(&self) -> Option<&Dish> {
        self.pending_conflict_item.as_ref()
    }

    /// Returns true while the replace-or-cancel prompt should be shown.
    #[must_use]
    pub const fn conflict_prompt_visible(&self) -> bool {
        self.conflict_prompt_visible
    }

    /// Restaurant the cart is currently scoped to.
    #[must_use]
    pub fn current_restaurant(&self) -> Option<&RestaurantId> {
        self.items.first().map(|line| &line.restaurant_id)
    }

    /// Storage key the cart is written under.
    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Returns false if the last write to storage failed.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        self.synced
    }

    /// Backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the backing storage.
    ///
    /// Writes made through it are not reflected in the items until
    /// [`Self::restore`] is called.
    pub const fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store and hand back its storage.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Total units in the cart (not distinct lines).
    #[must_use]
    pub fn cart_length(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Exact cart total.
    #[must_use]
    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Cart total formatted with two decimals, e.g. `"24.00"`.
    #[must_use]
    pub fn total_price(&self) -> String {
        format_amount(self.total_amount())
    }

    /// Snapshot of everything a view needs.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            cart_length: self.cart_length(),
            total_price: self.total_price(),
            conflict_prompt_visible: self.conflict_prompt_visible,
            pending_conflict_item: self.pending_conflict_item.clone(),
        }
    }

    /// Returns true if `dish` can join the cart without a conflict.
    #[must_use]
    pub fn can_add_to_cart(&self, dish: &Dish) -> bool {
        self.current_restaurant()
            .is_none_or(|current| current == &dish.restaurant_id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of `dish`.
    ///
    /// A dish from another restaurant leaves the items untouched: it becomes
    /// the pending conflict item (replacing any earlier one) and the prompt
    /// flag is raised. Resolve with [`Self::confirm_replace_cart`] or
    /// [`Self::cancel_conflict`].
    pub fn add_to_cart(&mut self, dish: Dish) -> AddOutcome {
        if self.can_add_to_cart(&dish) {
            return self.insert_dish(dish);
        }

        info!(
            dish_id = %dish.id,
            dish_restaurant = %dish.restaurant_id,
            cart_restaurant = ?self.current_restaurant().map(ToString::to_string),
            "Dish from another restaurant, awaiting confirmation"
        );
        self.pending_conflict_item = Some(dish);
        self.conflict_prompt_visible = true;
        AddOutcome::ConflictPending
    }

    /// Normalize a raw JSON dish payload, then [`Self::add_to_cart`] it.
    ///
    /// # Errors
    ///
    /// Returns a [`DishError`] if the payload misses its id, restaurant or
    /// price. The cart is left untouched in that case.
    pub fn add_raw(&mut self, payload: Value) -> Result<AddOutcome, DishError> {
        let dish = Dish::from_json(payload)?;
        Ok(self.add_to_cart(dish))
    }

    /// Add one unit of `dish` without the restaurant check.
    ///
    /// Callers bypassing [`Self::add_to_cart`] are responsible for keeping the
    /// cart to one restaurant.
    pub fn insert_dish(&mut self, dish: Dish) -> AddOutcome {
        let outcome = if let Some(line) = self.items.iter_mut().find(|line| line.id == dish.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(dish_id = %line.id, quantity = line.quantity, "Incremented cart line");
            AddOutcome::Incremented {
                quantity: line.quantity,
            }
        } else {
            debug!(dish_id = %dish.id, restaurant_id = %dish.restaurant_id, "Added cart line");
            self.items.push(CartLineItem::from_dish(dish));
            AddOutcome::Added
        };

        self.persist();
        outcome
    }

    /// Take one unit of `id` out of the cart, dropping the line at zero.
    ///
    /// Unknown ids are a no-op and skip the storage write.
    pub fn remove_from_cart(&mut self, id: &DishId) -> RemoveOutcome {
        let Some(index) = self.items.iter().position(|line| &line.id == id) else {
            debug!(dish_id = %id, "Remove for dish not in cart");
            return RemoveOutcome::NotFound;
        };
        let Some(line) = self.items.get_mut(index) else {
            return RemoveOutcome::NotFound;
        };

        let outcome = if line.quantity > 1 {
            line.quantity -= 1;
            RemoveOutcome::Decremented {
                quantity: line.quantity,
            }
        } else {
            self.items.remove(index);
            RemoveOutcome::Removed
        };

        debug!(dish_id = %id, ?outcome, "Removed from cart");
        self.persist();
        outcome
    }

    /// Drop the whole line for `id`, whatever its quantity.
    ///
    /// Returns true if a line was removed.
    pub fn delete_from_cart(&mut self, id: &DishId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);
        let deleted = self.items.len() != before;

        debug!(dish_id = %id, deleted, "Deleted cart line");
        self.persist();
        deleted
    }

    /// Resolve a conflict by emptying the cart and adding the pending dish.
    ///
    /// Returns the insert outcome, or `None` if no dish was pending (the cart
    /// is emptied either way).
    pub fn confirm_replace_cart(&mut self) -> Option<AddOutcome> {
        self.items.clear();
        self.conflict_prompt_visible = false;

        match self.pending_conflict_item.take() {
            Some(dish) => {
                info!(
                    dish_id = %dish.id,
                    restaurant_id = %dish.restaurant_id,
                    "Replaced cart with dish from new restaurant"
                );
                Some(self.insert_dish(dish))
            }
            None => {
                self.persist();
                None
            }
        }
    }

    /// Resolve a conflict by dropping the pending dish.
    ///
    /// Returns the discarded dish, if any. Items are untouched.
    pub fn cancel_conflict(&mut self) -> Option<Dish> {
        self.conflict_prompt_visible = false;
        let discarded = self.pending_conflict_item.take();
        if let Some(dish) = &discarded {
            debug!(dish_id = %dish.id, "Cancelled cart replacement");
        }
        discarded
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        debug!("Cleared cart");
        self.persist();
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the items to storage, logging and swallowing any failure.
    ///
    /// The in-memory cart stays authoritative when the write fails.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!(
                key = %self.storage_key,
                error = %e,
                "Failed to persist cart, continuing in memory"
            );
        }
    }

    /// Write the items to storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the items cannot be encoded or the storage
    /// rejects the write.
    pub fn try_persist(&mut self) -> Result<(), PersistError> {
        let result = serde_json::to_string(&self.items)
            .map_err(PersistError::from)
            .and_then(|encoded| {
                self.storage
                    .set(&self.storage_key, &encoded)
                    .map_err(PersistError::from)
            });
        self.synced = result.is_ok();
        result
    }

    /// Replace the items with the stored ones, if any.
    ///
    /// Missing, unreadable or malformed data leaves the cart as it is. Stored
    /// data counts as malformed when it does not decode, or decodes into
    /// lines with zero quantity, duplicate ids, or more than one restaurant.
    pub fn restore(&mut self) -> RestoreOutcome {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return RestoreOutcome::Absent,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Failed to read stored cart");
                return RestoreOutcome::Absent;
            }
        };

        let items: Vec<CartLineItem> = match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Discarding malformed stored cart");
                return RestoreOutcome::Discarded;
            }
        };

        if let Err(reason) = validate_lines(&items) {
            warn!(key = %self.storage_key, reason, "Discarding inconsistent stored cart");
            return RestoreOutcome::Discarded;
        }

        let lines = items.len();
        self.items = items;
        info!(key = %self.storage_key, lines, "Restored cart");
        RestoreOutcome::Restored { lines }
    }
}

fn validate_lines(items: &[CartLineItem]) -> Result<(), &'static str> {
    let mut seen = HashSet::with_capacity(items.len());
    let restaurant = items.first().map(|line| &line.restaurant_id);

    for line in items {
        if line.quantity == 0 {
            return Err("zero quantity line");
        }
        if !seen.insert(&line.id) {
            return Err("duplicate dish id");
        }
        if Some(&line.restaurant_id) != restaurant {
            return Err("lines from more than one restaurant");
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use deliveboo_core::Price;
    use serde_json::json;

    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    fn dish(id: i64, restaurant: i64, price: &str) -> Dish {
        Dish::new(id, restaurant, Price::parse(price).unwrap())
    }

    fn store() -> CartStore<MemoryStorage> {
        CartStore::new(MemoryStorage::new())
    }

    fn stored(cart: &CartStore<MemoryStorage>) -> Option<String> {
        cart.storage().get(DEFAULT_STORAGE_KEY).unwrap()
    }

    /// Storage that counts writes.
    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        writes: usize,
    }

    impl KeyValueStorage for CountingStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes += 1;
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_add_new_and_increment() {
        let mut cart = store();

        assert_eq!(cart.add_to_cart(dish(1, 10, "5")), AddOutcome::Added);
        assert!(cart.is_synced());
        assert_eq!(
            cart.add_to_cart(dish(1, 10, "5")),
            AddOutcome::Incremented { quantity: 2 }
        );
        assert_eq!(cart.add_to_cart(dish(2, 10, "1.5")), AddOutcome::Added);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.cart_length(), 3);
        assert_eq!(cart.item(&DishId::new(1)).unwrap().quantity, 2);
        assert_eq!(cart.current_restaurant(), Some(&RestaurantId::new(10)));
    }

    #[test]
    fn test_add_persists() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "5").with_field("name", "Lasagna"));

        let raw = stored(&cart).unwrap();
        let value: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            json!([{ "id": 1, "restaurantId": 10, "price": 5, "quantity": 1, "name": "Lasagna" }])
        );
    }

    #[test]
    fn test_can_add_to_cart() {
        let mut cart = store();
        assert!(cart.can_add_to_cart(&dish(1, 10, "1")));

        cart.add_to_cart(dish(1, 10, "1"));
        assert!(cart.can_add_to_cart(&dish(2, 10, "1")));
        assert!(!cart.can_add_to_cart(&dish(3, 20, "1")));
    }

    #[test]
    fn test_conflict_does_not_touch_items_or_storage() {
        let mut cart = CartStore::new(CountingStorage::default());
        cart.add_to_cart(dish(1, 10, "5"));
        let writes = cart.storage().writes;

        assert_eq!(cart.add_to_cart(dish(2, 20, "7")), AddOutcome::ConflictPending);

        assert_eq!(cart.items().len(), 1);
        assert!(cart.conflict_prompt_visible());
        assert_eq!(cart.pending_conflict_item().unwrap().id, DishId::new(2));
        assert_eq!(cart.storage().writes, writes);
    }

    #[test]
    fn test_later_conflict_replaces_pending_dish() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "5"));
        cart.add_to_cart(dish(2, 20, "7"));
        cart.add_to_cart(dish(3, 30, "9"));

        assert_eq!(cart.pending_conflict_item().unwrap().id, DishId::new(3));
    }

    #[test]
    fn test_confirm_replace_cart() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "5"));
        cart.add_to_cart(dish(1, 10, "5"));
        cart.add_to_cart(dish(2, 20, "7"));

        assert_eq!(cart.confirm_replace_cart(), Some(AddOutcome::Added));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, DishId::new(2));
        assert_eq!(cart.items()[0].quantity, 1);
        assert!(!cart.conflict_prompt_visible());
        assert!(cart.pending_conflict_item().is_none());
        assert_eq!(cart.current_restaurant(), Some(&RestaurantId::new(20)));
    }

    #[test]
    fn test_confirm_without_pending_empties_cart() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "5"));

        assert_eq!(cart.confirm_replace_cart(), None);
        assert!(cart.is_empty());
        assert_eq!(stored(&cart).as_deref(), Some("[]"));
    }

    #[test]
    fn test_cancel_conflict() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "5"));
        let before = cart.items().to_vec();
        cart.add_to_cart(dish(2, 20, "7"));

        let discarded = cart.cancel_conflict().unwrap();

        assert_eq!(discarded.id, DishId::new(2));
        assert_eq!(cart.items(), before.as_slice());
        assert!(!cart.conflict_prompt_visible());
        assert!(cart.pending_conflict_item().is_none());
        assert!(cart.cancel_conflict().is_none());
    }

    #[test]
    fn test_remove_from_cart() {
        let mut cart = store();
        for _ in 0..3 {
            cart.add_to_cart(dish(1, 10, "5"));
        }
        cart.add_to_cart(dish(2, 10, "1"));
        let id = DishId::new(1);

        assert_eq!(
            cart.remove_from_cart(&id),
            RemoveOutcome::Decremented { quantity: 2 }
        );
        assert_eq!(cart.item(&DishId::new(2)).unwrap().quantity, 1);
        assert_eq!(
            cart.remove_from_cart(&id),
            RemoveOutcome::Decremented { quantity: 1 }
        );
        assert_eq!(cart.remove_from_cart(&id), RemoveOutcome::Removed);
        assert_eq!(cart.remove_from_cart(&id), RemoveOutcome::NotFound);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_remove_unknown_skips_write() {
        let mut cart = CartStore::new(CountingStorage::default());
        cart.add_to_cart(dish(1, 10, "5"));
        let writes = cart.storage().writes;

        cart.remove_from_cart(&DishId::new(99));
        assert_eq!(cart.storage().writes, writes);

        cart.remove_from_cart(&DishId::new(1));
        assert_eq!(cart.storage().writes, writes + 1);
    }

    #[test]
    fn test_delete_from_cart() {
        let mut cart = store();
        for _ in 0..4 {
            cart.add_to_cart(dish(1, 10, "5"));
        }
        cart.add_to_cart(dish(2, 10, "1"));

        assert!(cart.delete_from_cart(&DishId::new(1)));
        assert!(!cart.delete_from_cart(&DishId::new(1)));
        assert_eq!(cart.cart_length(), 1);
    }

    #[test]
    fn test_total_price() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "10.5"));
        cart.add_to_cart(dish(1, 10, "10.5"));
        cart.add_to_cart(dish(2, 10, "3"));

        assert_eq!(cart.total_price(), "24.00");
        assert_eq!(cart.total_amount(), Decimal::from(24));
    }

    #[test]
    fn test_empty_totals() {
        let cart = store();
        assert_eq!(cart.cart_length(), 0);
        assert_eq!(cart.total_price(), "0.00");
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "5"));
        cart.add_to_cart(dish(2, 10, "5"));

        cart.clear_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_length(), 0);
        assert_eq!(stored(&cart).as_deref(), Some("[]"));
    }

    #[test]
    fn test_add_raw_normalizes_nested_restaurant() {
        let mut cart = store();
        let outcome = cart
            .add_raw(json!({ "id": 1, "restaurant": { "id": 10 }, "price": "2.50" }))
            .unwrap();

        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(cart.current_restaurant(), Some(&RestaurantId::new(10)));
    }

    #[test]
    fn test_add_raw_rejects_incomplete_dish() {
        let mut cart = store();
        let err = cart.add_raw(json!({ "id": 1, "price": 2 })).unwrap_err();

        assert!(matches!(err, DishError::MissingRestaurant(_)));
        assert!(cart.is_empty());
        assert_eq!(stored(&cart), None);
    }

    #[test]
    fn test_storage_failure_is_not_fatal() {
        let mut cart = CartStore::new(MemoryStorage::unavailable());
        cart.add_to_cart(dish(1, 10, "5"));
        cart.add_to_cart(dish(1, 10, "5"));

        assert_eq!(cart.cart_length(), 2);
        assert!(!cart.is_synced());
        assert!(matches!(
            cart.try_persist(),
            Err(PersistError::Storage(StorageError::Unavailable))
        ));
        assert_eq!(cart.restore(), RestoreOutcome::Absent);
        assert_eq!(cart.cart_length(), 2);
    }

    #[test]
    fn test_restore_roundtrip() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "10.5").with_field("name", "Pizza"));
        cart.add_to_cart(dish(1, 10, "10.5"));
        cart.add_to_cart(dish(2, 10, "0.1"));
        let items = cart.items().to_vec();

        let mut fresh = CartStore::new(cart.into_storage());
        assert_eq!(fresh.restore(), RestoreOutcome::Restored { lines: 2 });
        assert_eq!(fresh.items(), items.as_slice());
    }

    #[test]
    fn test_payload_quantity_survives_restore() {
        let mut cart = store();
        let outcome = cart
            .add_raw(json!({"id": 1, "restaurantId": 10, "price": 5, "quantity": 3, "name": "Pizza"}))
            .unwrap();
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(cart.summary().items[0].quantity, 1);
        let items = cart.items().to_vec();

        let mut fresh = CartStore::new(cart.into_storage());
        assert_eq!(fresh.restore(), RestoreOutcome::Restored { lines: 1 });
        assert_eq!(fresh.items(), items.as_slice());
        assert_eq!(fresh.cart_length(), 1);
    }

    #[test]
    fn test_restore_keeps_high_precision_price() {
        let mut cart = store();
        cart.add_to_cart(dish(1, 10, "0.123456789012345"));
        cart.add_to_cart(dish(2, 10, "98765.4321"));
        let items = cart.items().to_vec();

        let mut fresh = CartStore::new(cart.into_storage());
        assert_eq!(fresh.restore(), RestoreOutcome::Restored { lines: 2 });
        assert_eq!(fresh.items(), items.as_slice());
    }

    #[test]
    fn test_restore_absent() {
        let mut cart = store();
        assert_eq!(cart.restore(), RestoreOutcome::Absent);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_restore_discards_malformed() {
        for raw in [
            "not json",
            "{\"id\": 1}",
            "[{\"id\": 1}]",
            r#"[{"id": 1, "restaurantId": 1, "price": 1, "quantity": 0}]"#,
            r#"[{"id": 1, "restaurantId": 1, "price": 1, "quantity": 1},
                {"id": 1, "restaurantId": 1, "price": 1, "quantity": 1}]"#,
            r#"[{"id": 1, "restaurantId": 1, "price": 1, "quantity": 1},
                {"id": 2, "restaurantId": 2, "price": 1, "quantity": 1}]"#,
        ] {
            let mut cart = store();
            cart.add_to_cart(dish(5, 50, "1"));
            cart.storage_mut().set(DEFAULT_STORAGE_KEY, raw).unwrap();

            assert_eq!(cart.restore(), RestoreOutcome::Discarded, "input: {raw}");
            assert_eq!(cart.cart_length(), 1, "input: {raw}");
        }
    }

    #[test]
    fn test_custom_storage_key() {
        let mut cart = CartStore::with_key(MemoryStorage::new(), "cart-v2");
        cart.add_to_cart(dish(1, 10, "5"));

        assert_eq!(cart.storage_key(), "cart-v2");
        assert!(cart.storage().get("cart-v2").unwrap().is_some());
        assert!(cart.storage().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }
}
