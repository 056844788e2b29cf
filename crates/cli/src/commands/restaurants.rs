//! Restaurant catalog commands.
//!
//! # Usage
//!
//! ```bash
//! # Restaurants tagged Italiano or Cinese
//! deliveboo restaurants filter --file restaurants.json --type Italiano --type Cinese
//!
//! # Name search (ignored while any --type is active)
//! deliveboo restaurants filter --file restaurants.json --search sushi
//! ```

use std::path::Path;

use deliveboo_core::{Restaurant, filter_restaurants, toggle_type};
use tracing::{debug, instrument};

use super::CommandError;

/// Filter a JSON restaurant listing.
///
/// Each `--type` toggles that cuisine in the selection, the way clicking a
/// cuisine chip does, so naming a type twice deselects it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of
/// restaurants.
#[instrument]
pub fn filter(
    file: &Path,
    types: &[String],
    search: &str,
) -> Result<Vec<Restaurant>, CommandError> {
    let raw = std::fs::read_to_string(file)?;
    let restaurants: Vec<Restaurant> = serde_json::from_str(&raw)?;

    let mut selected = Vec::new();
    for cuisine in types {
        toggle_type(&mut selected, cuisine);
    }

    let matches: Vec<Restaurant> = filter_restaurants(&restaurants, &selected, search)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        total = restaurants.len(),
        matched = matches.len(),
        ?selected,
        "Filtered restaurants"
    );
    Ok(matches)
}
