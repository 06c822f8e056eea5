//! Integration tests for the MAFIA cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mafia-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Store behaviour across sequences of operations
//! - `cart_persistence` - File-backed save and reload
//!
//! This crate also holds shared fixtures for those tests.

use mafia_core::ItemName;

/// Parse an item name, panicking on invalid input.
///
/// # Panics
///
/// Panics if `s` is not a valid [`ItemName`].
#[must_use]
#[allow(clippy::expect_used)]
pub fn item(s: &str) -> ItemName {
    ItemName::parse(s).expect("test item names are valid")
}

/// Snapshot of a cart as `(name, price, quantity)` tuples, in cart order.
#[must_use]
pub fn lines(items: &[mafia_core::LineItem]) -> Vec<(String, u64, u32)> {
    items
        .iter()
        .map(|i| (i.name.to_string(), i.price.amount(), i.quantity))
        .collect()
}
