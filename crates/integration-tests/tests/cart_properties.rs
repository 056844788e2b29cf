//! Integration tests for cart store behaviour.
//!
//! These tests drive the store the way page components do: add, remove and
//! resolve restaurant conflicts, then check the exposed totals.

#![allow(clippy::cast_possible_truncation)]

use deliveboo_cart::{AddOutcome, CartStore, MemoryStorage, RemoveOutcome, RestoreOutcome};
use deliveboo_core::DishId;
use deliveboo_integration_tests::dish;

fn empty_cart() -> CartStore<MemoryStorage> {
    CartStore::new(MemoryStorage::new())
}

// =============================================================================
// Single Restaurant
// =============================================================================

#[test]
fn test_cart_length_counts_every_add() {
    let sequence = [1, 2, 1, 3, 3, 3, 2, 4];
    let mut cart = empty_cart();

    for (n, id) in sequence.iter().enumerate() {
        cart.add_to_cart(dish(*id, 7, "2.50"));
        assert_eq!(cart.cart_length() as usize, n + 1);
    }

    assert_eq!(cart.items().len(), 4);
    assert_eq!(cart.item(&DishId::new(3)).map(|l| l.quantity), Some(3));
}

#[test]
fn test_items_keep_insertion_order() {
    let mut cart = empty_cart();
    for id in [5, 2, 9, 2] {
        cart.add_to_cart(dish(id, 1, "1"));
    }

    let order: Vec<DishId> = cart.items().iter().map(|l| l.id.clone()).collect();
    assert_eq!(order, vec![DishId::new(5), DishId::new(2), DishId::new(9)]);
}

// =============================================================================
// Restaurant Conflicts
// =============================================================================

fn cart_with_conflict() -> CartStore<MemoryStorage> {
    let mut cart = empty_cart();
    cart.add_to_cart(dish(1, 100, "8"));
    cart.add_to_cart(dish(2, 100, "4"));
    assert_eq!(cart.add_to_cart(dish(50, 200, "11")), AddOutcome::ConflictPending);
    cart
}

#[test]
fn test_conflicting_add_only_raises_prompt() {
    let cart = cart_with_conflict();

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.cart_length(), 2);
    assert!(cart.conflict_prompt_visible());
    assert_eq!(cart.pending_conflict_item(), Some(&dish(50, 200, "11")));
}

#[test]
fn test_confirm_replaces_cart_with_pending_dish() {
    let mut cart = cart_with_conflict();

    cart.confirm_replace_cart();

    assert_eq!(cart.items().len(), 1);
    let line = &cart.items()[0];
    assert_eq!(line.id, DishId::new(50));
    assert_eq!(line.quantity, 1);
    assert!(!cart.conflict_prompt_visible());
    assert!(cart.pending_conflict_item().is_none());
    assert_eq!(cart.total_price(), "11.00");
}

#[test]
fn test_cancel_keeps_cart() {
    let mut cart = empty_cart();
    cart.add_to_cart(dish(1, 100, "8"));
    cart.add_to_cart(dish(2, 100, "4"));
    let before = cart.items().to_vec();

    cart.add_to_cart(dish(50, 200, "11"));
    cart.cancel_conflict();

    assert_eq!(cart.items(), before.as_slice());
    assert!(cart.pending_conflict_item().is_none());
    assert!(!cart.conflict_prompt_visible());
}

#[test]
fn test_single_restaurant_invariant_holds_throughout() {
    let mut cart = empty_cart();
    let steps: [(i64, i64); 6] = [(1, 1), (2, 2), (3, 1), (4, 3), (5, 2), (6, 1)];

    for (id, restaurant) in steps {
        if cart.add_to_cart(dish(id, restaurant, "1")) == AddOutcome::ConflictPending {
            if id % 2 == 0 {
                cart.confirm_replace_cart();
            } else {
                cart.cancel_conflict();
            }
        }

        let first = cart.current_restaurant().cloned();
        assert!(cart.items().iter().all(|l| Some(&l.restaurant_id) == first.as_ref()));
    }
}

// =============================================================================
// Removal and Totals
// =============================================================================

#[test]
fn test_remove_walks_quantity_down() {
    let mut cart = empty_cart();
    for _ in 0..3 {
        cart.add_to_cart(dish(1, 1, "2"));
    }
    cart.add_to_cart(dish(2, 1, "3"));
    let id = DishId::new(1);

    assert_eq!(
        cart.remove_from_cart(&id),
        RemoveOutcome::Decremented { quantity: 2 }
    );
    assert_eq!(cart.item(&DishId::new(2)).map(|l| l.quantity), Some(1));

    cart.remove_from_cart(&id);
    assert_eq!(cart.remove_from_cart(&id), RemoveOutcome::Removed);
    assert!(cart.item(&id).is_none());

    let before = cart.items().to_vec();
    assert_eq!(cart.remove_from_cart(&id), RemoveOutcome::NotFound);
    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn test_total_price_two_decimals() {
    let mut cart = empty_cart();
    cart.add_to_cart(dish(1, 1, "10.5"));
    cart.add_to_cart(dish(1, 1, "10.5"));
    cart.add_to_cart(dish(2, 1, "3"));

    assert_eq!(cart.total_price(), "24.00");
}

#[test]
fn test_total_price_avoids_float_drift() {
    let mut cart = empty_cart();
    cart.add_to_cart(dish(1, 1, "0.1"));
    cart.add_to_cart(dish(2, 1, "0.2"));

    assert_eq!(cart.total_price(), "0.30");
}

#[test]
fn test_clear_from_any_state() {
    let mut cart = cart_with_conflict();
    cart.clear_cart();
    assert!(cart.items().is_empty());
    assert_eq!(cart.cart_length(), 0);

    let mut cart = empty_cart();
    cart.clear_cart();
    assert!(cart.items().is_empty());
    assert_eq!(cart.cart_length(), 0);
}

#[test]
fn test_restore_on_fresh_store_matches() {
    let mut cart = empty_cart();
    cart.add_to_cart(dish(1, 1, "9.99").with_field("name", "Pad Thai"));
    cart.add_to_cart(dish(1, 1, "9.99"));
    cart.add_to_cart(dish(2, 1, "4"));
    let items = cart.items().to_vec();

    let mut fresh = CartStore::new(cart.into_storage());
    assert_eq!(fresh.restore(), RestoreOutcome::Restored { lines: 2 });
    assert_eq!(fresh.items(), items.as_slice());
    assert_eq!(fresh.total_price(), "23.98");
}
