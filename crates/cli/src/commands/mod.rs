//! Subcommand implementations.
//!
//! Handlers return serializable reports; `main` prints them as JSON on
//! stdout while logs go to stderr.

use std::io;

use deliveboo_cart::PersistError;
use deliveboo_core::{DishError, PriceError, RestaurantId};
use serde::Serialize;
use thiserror::Error;

pub mod cart;
pub mod restaurants;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The dish payload or flags do not describe a valid dish.
    #[error("Invalid dish: {0}")]
    Dish(#[from] DishError),

    /// A `--price` flag is not a valid amount.
    #[error("Invalid price: {0}")]
    Price(#[from] PriceError),

    /// A required flag is missing.
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// The dish belongs to another restaurant and `--replace` was not given.
    #[error(
        "Cart holds dishes from restaurant {cart}, dish is from restaurant {dish}; pass --replace to start a new cart"
    )]
    RestaurantConflict {
        /// Restaurant the cart is scoped to.
        cart: RestaurantId,
        /// Restaurant of the rejected dish.
        dish: RestaurantId,
    },

    /// The cart could not be written to storage.
    #[error("Failed to save cart: {0}")]
    Persist(#[from] PersistError),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON input could not be decoded, or output encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Print a report as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if the report cannot be encoded.
#[allow(clippy::print_stdout)]
pub fn print_json(report: &impl Serialize) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
