//! Cart commands.
//!
//! Each command acts as the cart's input layer: it turns raw command-line
//! text into an item name and price, then calls the store.

use mafia_cart::input::{QuantityButton, parse_name_text, parse_price_text};
use mafia_cart::{CartConfig, CartError, CartStore, FileStore, KeyValueStore};
use mafia_core::ItemNameError;
use thiserror::Error;

use crate::render::LogRenderer;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The item name is not usable.
    #[error("Invalid item name: {0}")]
    InvalidName(#[from] ItemNameError),

    /// The price text has no number in it.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// The cart change could not be saved.
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Open the saved cart described by `config`, with a renderer attached.
pub fn open_store(config: &CartConfig) -> CartStore<FileStore> {
    let storage = FileStore::new(&config.storage_dir);
    let mut store = CartStore::with_key(storage, config.storage_key.clone());
    store.subscribe(LogRenderer::new(config.currency_symbol.clone()));
    store.load();
    store
}

/// Add one unit of `name`, priced from menu display text.
pub fn add<S: KeyValueStore>(
    store: &mut CartStore<S>,
    name: &str,
    price_text: &str,
) -> Result<(), CommandError> {
    let name = parse_name_text(name)?;
    let price = parse_price_text(price_text)
        .ok_or_else(|| CommandError::InvalidPrice(price_text.to_owned()))?;

    store.add_item(name, price)?;
    Ok(())
}

/// Remove `name` from the cart.
pub fn remove<S: KeyValueStore>(store: &mut CartStore<S>, name: &str) -> Result<(), CommandError> {
    let name = parse_name_text(name)?;
    store.remove_item(&name)?;
    Ok(())
}

/// Change the quantity of `name` by `delta`.
pub fn quantity<S: KeyValueStore>(
    store: &mut CartStore<S>,
    name: &str,
    delta: i64,
) -> Result<(), CommandError> {
    let name = parse_name_text(name)?;
    if store.cart().get(&name).is_none() {
        tracing::warn!(item = %name, "Item is not in the cart");
    }
    store.update_quantity(&name, delta)?;
    Ok(())
}

/// Press a line's `+` or `-` button.
pub fn press<S: KeyValueStore>(
    store: &mut CartStore<S>,
    name: &str,
    button: QuantityButton,
) -> Result<(), CommandError> {
    quantity(store, name, button.delta())
}

/// Empty the cart.
pub fn clear<S: KeyValueStore>(store: &mut CartStore<S>) -> Result<(), CommandError> {
    store.clear()?;
    Ok(())
}
