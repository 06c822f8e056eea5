//! Serialized form of the cart item sequence.
//!
//! A snapshot is a JSON array of line item records, in cart order:
//!
//! ```json
//! [{"name":"Pizza","price":250,"quantity":2},{"name":"Sushi","price":400,"quantity":1}]
//! ```
//!
//! There is no version field. Anything that does not decode into records
//! satisfying the cart invariants is rejected as a whole.

use std::collections::HashSet;

use mafia_core::LineItem;
use thiserror::Error;

use crate::cart::Cart;

/// Storage key the cart snapshot is written under by default.
pub const DEFAULT_KEY: &str = "mafia-cart";

/// Reasons a stored snapshot cannot be turned back into a cart.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Not JSON, or not an array of `{name, price, quantity}` records.
    /// Empty names and negative numbers also fail here.
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A record has a quantity of zero.
    #[error("Item {0:?} has zero quantity")]
    ZeroQuantity(String),

    /// Two records share a name.
    #[error("Item {0:?} appears more than once")]
    DuplicateName(String),
}

/// Serialize the cart's items.
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn encode(cart: &Cart) -> Result<String, serde_json::Error> {
    serde_json::to_string(cart.items())
}

/// Parse a snapshot back into a cart.
///
/// # Errors
///
/// Returns `SnapshotError` if `raw` is not a valid snapshot or its records
/// break the cart invariants.
pub fn decode(raw: &str) -> Result<Cart, SnapshotError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.quantity == 0 {
            return Err(SnapshotError::ZeroQuantity(item.name.to_string()));
        }
        if !seen.insert(&item.name) {
            return Err(SnapshotError::DuplicateName(item.name.to_string()));
        }
    }

    Ok(Cart::from_items(items))
}
