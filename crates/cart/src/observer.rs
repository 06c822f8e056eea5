//! Change notification for cart renderers.

use mafia_core::ItemName;

use crate::cart::Cart;

/// What a committed cart change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The cart was hydrated from storage.
    Loaded,
    /// One unit of `name` was added; `quantity` is the new total for that item.
    ItemAdded { name: ItemName, quantity: u32 },
    /// The item called `name` is no longer in the cart.
    ItemRemoved { name: ItemName },
    /// The quantity of `name` changed and is still at least one.
    QuantityChanged { name: ItemName, quantity: u32 },
    /// Every item was removed.
    Cleared,
}

/// Receives cart changes after they are committed.
///
/// Observers are called synchronously, in subscription order, with the
/// cart state as it is after the change. They cannot mutate the store.
pub trait CartObserver {
    /// Called once per committed change.
    fn cart_changed(&mut self, event: &CartEvent, cart: &Cart);
}

impl<F> CartObserver for F
where
    F: FnMut(&CartEvent, &Cart),
{
    fn cart_changed(&mut self, event: &CartEvent, cart: &Cart) {
        self(event, cart);
    }
}
