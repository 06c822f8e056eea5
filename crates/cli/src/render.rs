//! Terminal rendering of the cart.

use mafia_cart::view::EMPTY_CART_MESSAGE;
use mafia_cart::{Cart, CartEvent, CartObserver, CartView};

/// Cart observer that reports changes through the log.
pub struct LogRenderer {
    currency_symbol: String,
}

impl LogRenderer {
    pub const fn new(currency_symbol: String) -> Self {
        Self { currency_symbol }
    }
}

impl CartObserver for LogRenderer {
    fn cart_changed(&mut self, event: &CartEvent, cart: &Cart) {
        if let Some(toast) = event.toast() {
            tracing::info!(kind = ?toast.kind, "{}", toast.message);
        }

        let view = CartView::new(cart, &self.currency_symbol);
        tracing::debug!(
            ?event,
            item_count = view.item_count,
            total = %view.total,
            "Cart changed"
        );
    }
}

/// Log the full cart: one line per item, then the total.
pub fn log_view(view: &CartView) {
    if view.is_empty() {
        tracing::info!("{EMPTY_CART_MESSAGE}");
        return;
    }

    for item in &view.items {
        tracing::info!("{} x{}  {}", item.name, item.quantity, item.line_price);
    }
    tracing::info!(items = view.item_count, "Итого: {}", view.total);
}
