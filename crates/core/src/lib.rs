//! MAFIA Core - Shared domain types.
//!
//! This crate provides the types shared by the cart components:
//! - `cart` - Cart store, storage backends, view model
//! - `cli` - Command-line front end for the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for item names and prices, plus the line item record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
