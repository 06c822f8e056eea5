//! Display data for cart renderers.
//!
//! Renderers subscribe to the store and rebuild a [`CartView`] from the cart
//! on every notification. The view carries everything the cart widget shows:
//! the badge count, the line list and the formatted total.

use mafia_core::{LineItem, Price};

use crate::cart::Cart;
use crate::observer::CartEvent;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

/// Shown in place of the line list when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Корзина пуста";

/// Toast text shown after an item is added.
pub const ITEM_ADDED_MESSAGE: &str = "Добавлено в корзину!";

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub name: String,
    pub quantity: u32,
    /// `price * quantity`, formatted.
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    /// Total number of units, shown on the badge.
    pub item_count: u64,
    /// Total price, formatted.
    pub total: String,
    /// The badge and the widget's "has items" state are shown only for a
    /// non-empty cart.
    pub badge_visible: bool,
}

impl CartView {
    /// Build the view for `cart`, formatting money with `currency_symbol`.
    #[must_use]
    pub fn new(cart: &Cart, currency_symbol: &str) -> Self {
        let item_count = cart.total_count();
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView::new(item, currency_symbol))
                .collect(),
            item_count,
            total: format_price(cart.total_price(), currency_symbol),
            badge_visible: item_count > 0,
        }
    }

    /// Returns `true` if there are no lines to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartItemView {
    fn new(item: &LineItem, currency_symbol: &str) -> Self {
        Self {
            name: item.name.to_string(),
            quantity: item.quantity,
            line_price: format_price(item.line_total(), currency_symbol),
        }
    }
}

/// Format a price as `"<amount> <symbol>"`, e.g. `"250 ₽"`.
#[must_use]
pub fn format_price(price: Price, currency_symbol: &str) -> String {
    format!("{price} {currency_symbol}")
}

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

/// Short-lived feedback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: &'static str,
    pub kind: ToastKind,
}

impl CartEvent {
    /// Feedback toast for this change, if it warrants one.
    ///
    /// Only adding an item produces a toast.
    #[must_use]
    pub const fn toast(&self) -> Option<Toast> {
        match self {
            Self::ItemAdded { .. } => Some(Toast {
                message: ITEM_ADDED_MESSAGE,
                kind: ToastKind::Success,
            }),
            _ => None,
        }
    }
}

/// Open/closed state of the slide-out cart panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartPanel {
    open: bool,
}

impl CartPanel {
    /// Returns `true` if the panel is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Open a closed panel or close an open one.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the panel.
    pub const fn close(&mut self) {
        self.open = false;
    }
}
