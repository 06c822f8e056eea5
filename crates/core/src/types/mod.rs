//! Core types for the MAFIA cart.
//!
//! This module provides type-safe wrappers for cart domain concepts.

pub mod item_name;
pub mod line_item;
pub mod price;

pub use item_name::{ItemName, ItemNameError};
pub use line_item::LineItem;
pub use price::Price;
