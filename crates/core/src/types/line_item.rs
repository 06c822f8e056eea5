//! Cart line item.

use serde::{Deserialize, Serialize};

use super::{ItemName, Price};

/// One named product entry in a cart.
///
/// Serialized as `{ "name": ..., "price": ..., "quantity": ... }`, which is
/// also the persisted snapshot record layout.
///
/// A line item in a cart always has `quantity >= 1`; the cart removes the
/// entry rather than keep it at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique key within the cart.
    pub name: ItemName,
    /// Unit price, fixed when the item is first added.
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with a quantity of one.
    #[must_use]
    pub const fn new(name: ItemName, price: Price) -> Self {
        Self {
            name,
            price,
            quantity: 1,
        }
    }

    /// Price of all units of this item.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}
