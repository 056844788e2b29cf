//! Newtype IDs for type-safe entity references.
//!
//! Dish and restaurant identifiers come from an external catalog that hands
//! out either numbers or strings. [`OpaqueId`] keeps whichever shape it was
//! given so stored carts round-trip byte for byte, and `define_id!` wraps it
//! so a dish ID can never be compared against a restaurant ID.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// An identifier whose shape (number or string) is owned by the catalog.
///
/// Equality is strict: `OpaqueId::Number(7)` and `OpaqueId::Text("7")` are
/// different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for OpaqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OpaqueId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<i32> for OpaqueId {
    fn from(id: i32) -> Self {
        Self::Number(i64::from(id))
    }
}

impl From<String> for OpaqueId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for OpaqueId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

/// Parses integer-looking input as [`OpaqueId::Number`], anything else as text.
impl FromStr for OpaqueId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Number))
    }
}

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around [`OpaqueId`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_opaque()`
/// - `From<i64>`, `From<i32>`, `From<&str>`, `From<String>` and `FromStr` implementations
///
/// # Example
///
/// ```rust
/// # use deliveboo_core::define_id;
/// define_id!(CourierId);
/// define_id!(OrderId);
///
/// let courier_id = CourierId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: CourierId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($crate::OpaqueId);

        impl $name {
            /// Create a new ID from a number or a string.
            #[must_use]
            pub fn new(id: impl Into<$crate::OpaqueId>) -> Self {
                Self(id.into())
            }

            /// Get the underlying opaque value.
            #[must_use]
            pub const fn as_opaque(&self) -> &$crate::OpaqueId {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.into())
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id.into())
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.into())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id.into())
            }
        }

        impl From<$crate::OpaqueId> for $name {
            fn from(id: $crate::OpaqueId) -> Self {
                Self(id)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.parse::<$crate::OpaqueId>().map(Self)
            }
        }
    };
}

// Define standard entity IDs
define_id!(DishId);
define_id!(RestaurantId);
define_id!(CuisineTypeId);
