//! Core types for Deliveboo.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod dish;
pub mod id;
pub mod price;
pub mod restaurant;

pub use dish::{Dish, DishError, DishInput};
pub use id::*;
pub use price::{MAX_SIGNIFICANT_DIGITS, Price, PriceError, format_amount};
pub use restaurant::{CuisineType, Restaurant, filter_restaurants, toggle_type};
