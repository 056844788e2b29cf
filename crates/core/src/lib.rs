//! Deliveboo Core - Shared types library.
//!
//! This crate provides common types used across all Deliveboo components:
//! - `cart` - The cart store and its durable storage
//! - `cli` - Command-line front end over the cart and the restaurant catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Opaque IDs, decimal prices, the dish boundary record and
//!   restaurant catalog types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
