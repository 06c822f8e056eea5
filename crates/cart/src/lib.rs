//! MAFIA Cart - Shopping cart store for the restaurant site.
//!
//! The cart keeps an ordered list of menu items with quantities, persists a
//! snapshot to a key-value store after every change, and notifies observers
//! so the cart widget can re-render.
//!
//! # Architecture
//!
//! - [`cart::Cart`] - pure state transitions, no I/O
//! - [`store::CartStore`] - owns a `Cart`, persists it, notifies observers
//! - [`storage`] - `KeyValueStore` trait with memory and file backends
//! - [`snapshot`] - JSON snapshot codec
//! - [`view`] / [`input`] - what renderers display and what input handlers parse
//!
//! # Example
//!
//! ```
//! use mafia_cart::{CartStore, MemoryStore};
//! use mafia_core::{ItemName, Price};
//!
//! let mut store = CartStore::new(MemoryStore::new());
//! store.load();
//! store.add_item(ItemName::parse("Pizza").unwrap(), Price::new(250)).unwrap();
//! assert_eq!(store.total_count(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod input;
pub mod observer;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod view;

pub use cart::Cart;
pub use config::{CartConfig, ConfigError};
pub use error::{CartError, Result};
pub use observer::{CartEvent, CartObserver};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::CartStore;
pub use view::{CartPanel, CartView};
