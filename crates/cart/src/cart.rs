//! Pure cart state.
//!
//! [`Cart`] holds the ordered line items and applies the cart's state
//! transitions. It performs no I/O; persistence and notification live in
//! [`CartStore`](crate::store::CartStore).

use mafia_core::{ItemName, LineItem, Price};

use crate::observer::CartEvent;

/// Ordered sequence of line items with unique names.
///
/// Insertion order is preserved: the first item added stays first. Every
/// item has `quantity >= 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from items that already satisfy the cart invariants.
    ///
    /// Callers are responsible for unique names and non-zero quantities;
    /// [`snapshot::decode`](crate::snapshot::decode) checks both.
    pub(crate) const fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item by name.
    #[must_use]
    pub fn get(&self, name: &ItemName) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.name == name)
    }

    /// Returns `true` if the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of `price * quantity` over all items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Add one unit of `name`.
    ///
    /// An existing item keeps its original price; only the quantity grows.
    pub fn add_item(&mut self, name: ItemName, price: Price) -> CartEvent {
        let quantity = if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            item.quantity = item.quantity.saturating_add(1);
            item.quantity
        } else {
            self.items.push(LineItem::new(name.clone(), price));
            1
        };

        CartEvent::ItemAdded { name, quantity }
    }

    /// Remove the item called `name`. Absent names leave the cart unchanged.
    pub fn remove_item(&mut self, name: &ItemName) -> CartEvent {
        self.items.retain(|item| &item.name != name);
        CartEvent::ItemRemoved { name: name.clone() }
    }

    /// Change the quantity of `name` by `delta`.
    ///
    /// Returns `None` if no item is called `name`. A resulting quantity of
    /// zero or less removes the item.
    pub fn update_quantity(&mut self, name: &ItemName, delta: i64) -> Option<CartEvent> {
        let item = self.items.iter_mut().find(|i| &i.name == name)?;
        let quantity = i64::from(item.quantity).saturating_add(delta);

        if quantity <= 0 {
            return Some(self.remove_item(name));
        }

        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        Some(CartEvent::QuantityChanged {
            name: name.clone(),
            quantity: item.quantity,
        })
    }

    /// Remove every item.
    pub fn clear(&mut self) -> CartEvent {
        self.items.clear();
        CartEvent::Cleared
    }
}
