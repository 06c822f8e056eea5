//! Parsing of user-facing input into cart operations.
//!
//! Menu cards show names and prices as display text (`"\n  Пицца "`,
//! `"1 200 ₽"`) and the cart panel has `+`/`-` buttons per line. These
//! helpers turn them into values the store accepts.

use mafia_core::{ItemName, ItemNameError, Price};

/// Parse an item name from display text, dropping surrounding whitespace.
///
/// ```
/// use mafia_cart::input::parse_name_text;
///
/// assert_eq!(parse_name_text("\n    Тирамису  ").unwrap().as_str(), "Тирамису");
/// assert!(parse_name_text("   ").is_err());
/// ```
///
/// # Errors
///
/// Returns `ItemNameError::Empty` if nothing is left after trimming.
pub fn parse_name_text(text: &str) -> Result<ItemName, ItemNameError> {
    ItemName::parse(text.trim())
}

/// Parse a price from display text by keeping only its digits.
///
/// Returns `None` if the text has no digits or the number does not fit.
///
/// ```
/// use mafia_cart::input::parse_price_text;
/// use mafia_core::Price;
///
/// assert_eq!(parse_price_text("1 250 ₽"), Some(Price::new(1250)));
/// assert_eq!(parse_price_text("по запросу"), None);
/// ```
#[must_use]
pub fn parse_price_text(text: &str) -> Option<Price> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().ok().map(Price::new)
}

/// Quantity control button on a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityButton {
    Plus,
    Minus,
}

impl QuantityButton {
    /// Quantity change applied when the button is pressed.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
        }
    }
}

impl std::str::FromStr for QuantityButton {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" | "+" => Ok(Self::Plus),
            "minus" | "-" => Ok(Self::Minus),
            _ => Err(format!("invalid quantity button: {s}")),
        }
    }
}
