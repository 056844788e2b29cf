//! Restaurant catalog types and the listing filters used by the browse page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::{CuisineTypeId, RestaurantId};

/// A cuisine tag attached to a restaurant (e.g. "Italiano").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineType {
    /// Catalog identifier, when the API provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CuisineTypeId>,
    /// Display name, also the filter key.
    pub name: String,
}

/// A restaurant as listed by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Restaurant identifier.
    pub id: RestaurantId,
    /// Display name.
    pub name: String,
    /// Cuisine tags.
    #[serde(default)]
    pub types: Vec<CuisineType>,
    /// Opaque catalog fields (address, image, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Restaurant {
    /// Returns true if any of the restaurant's cuisine tags is selected.
    #[must_use]
    pub fn has_any_type(&self, selected: &[String]) -> bool {
        self.types
            .iter()
            .any(|t| selected.iter().any(|s| s == &t.name))
    }
}

/// Filter a restaurant listing.
///
/// - No selected types and an empty search term: everything.
/// - Any selected type: restaurants tagged with at least one of them. The
///   search term is ignored while types are selected.
/// - Otherwise: case-insensitive substring match on the name.
#[must_use]
pub fn filter_restaurants<'a>(
    restaurants: &'a [Restaurant],
    selected_types: &[String],
    search_term: &str,
) -> Vec<&'a Restaurant> {
    if selected_types.is_empty() && search_term.is_empty() {
        return restaurants.iter().collect();
    }

    if !selected_types.is_empty() {
        return restaurants
            .iter()
            .filter(|r| r.has_any_type(selected_types))
            .collect();
    }

    let needle = search_term.to_lowercase();
    restaurants
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// Toggle a cuisine type in the current selection.
///
/// Removes every occurrence if present, appends it otherwise.
pub fn toggle_type(selected: &mut Vec<String>, cuisine: &str) {
    if selected.iter().any(|s| s == cuisine) {
        selected.retain(|s| s != cuisine);
    } else {
        selected.push(cuisine.to_owned());
    }
}
