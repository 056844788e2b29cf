//! Integration tests for Deliveboo.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p deliveboo-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart store behaviour across add/remove/conflict flows
//! - `cart_persistence` - Restoring carts from file-backed storage
//!
//! This library only holds fixtures shared by the test files.

use deliveboo_core::{Dish, Price};

/// A dish with a parsed price, for fixtures.
///
/// # Panics
///
/// Panics if `price` is not a valid amount.
#[must_use]
#[allow(clippy::expect_used)]
pub fn dish(id: i64, restaurant: i64, price: &str) -> Dish {
    Dish::new(id, restaurant, Price::parse(price).expect("fixture price"))
}
