//! Deliveboo Cart - The cart store.
//!
//! A cart holds dishes from exactly one restaurant. Adding a dish from a
//! different restaurant does not touch the cart; it parks the dish as a
//! pending conflict until the caller confirms the replacement or cancels.
//! Every change to the line items is written to a [`KeyValueStorage`] so the
//! cart survives restarts.
//!
//! # Example
//!
//! ```
//! use deliveboo_cart::{AddOutcome, CartStore, MemoryStorage};
//! use deliveboo_core::{Dish, Price};
//!
//! let mut cart = CartStore::new(MemoryStorage::new());
//! let pizza = Dish::new(1, 10, Price::parse("8.50").unwrap_or_default());
//! let sushi = Dish::new(2, 20, Price::parse("12").unwrap_or_default());
//!
//! cart.add_to_cart(pizza);
//! assert_eq!(cart.add_to_cart(sushi), AddOutcome::ConflictPending);
//! assert!(cart.conflict_prompt_visible());
//!
//! cart.confirm_replace_cart();
//! assert_eq!(cart.total_price(), "12.00");
//! ```
//!
//! # Modules
//!
//! - [`line_item`] - Cart line items
//! - [`storage`] - Durable key-value storage seam and implementations
//! - [`store`] - The cart store itself
//! - [`summary`] - Serializable snapshot for rendering layers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod line_item;
pub mod storage;
pub mod store;
pub mod summary;

pub use error::PersistError;
pub use line_item::CartLineItem;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{AddOutcome, CartStore, DEFAULT_STORAGE_KEY, RemoveOutcome, RestoreOutcome};
pub use summary::CartSummary;
