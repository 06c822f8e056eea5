//! Cart store: persisted, observable cart state.
//!
//! `CartStore` is owned by the application's composition root and passed by
//! reference to whatever renders the cart or handles input. Every mutation
//! follows the same sequence:
//!
//! 1. apply the state transition to a copy of the cart
//! 2. write the copy's snapshot to storage
//! 3. commit the copy as the current cart
//! 4. notify observers
//!
//! A failed write stops at step 2, so the in-memory cart always matches the
//! last snapshot this store wrote.

use mafia_core::{ItemName, LineItem, Price};
use tracing::instrument;

use crate::cart::Cart;
use crate::error::Result;
use crate::observer::{CartEvent, CartObserver};
use crate::snapshot;
use crate::storage::KeyValueStore;

/// Cart state backed by a key-value store.
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
    key: String,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create an empty store that persists under [`snapshot::DEFAULT_KEY`].
    ///
    /// Call [`load`](Self::load) once afterwards to hydrate from storage.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, snapshot::DEFAULT_KEY)
    }

    /// Create an empty store that persists under `key`.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            cart: Cart::new(),
            storage,
            key: key.into(),
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current cart state.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of quantities over all items.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.cart.total_count()
    }

    /// Sum of `price * quantity` over all items.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// The storage key snapshots are written under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its storage backend.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Hydrate the cart from storage.
    ///
    /// - Nothing stored: the cart is left as is, observers are not notified.
    /// - A valid snapshot: it replaces the cart, observers get
    ///   [`CartEvent::Loaded`].
    /// - An unreadable or malformed snapshot: the cart is reset to empty and
    ///   a warning is logged. This never fails.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&mut self) {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No saved cart");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved cart; starting empty");
                self.cart = Cart::new();
                return;
            }
        };

        match snapshot::decode(&raw) {
            Ok(cart) => {
                self.cart = cart;
                tracing::debug!(
                    items = self.cart.items().len(),
                    total_count = self.cart.total_count(),
                    "Loaded saved cart"
                );
                self.notify(&CartEvent::Loaded);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding malformed saved cart");
                self.cart = Cart::new();
            }
        }
    }

    /// Add one unit of `name` at `price`.
    ///
    /// If the item is already in the cart its quantity grows by one and its
    /// price is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the new snapshot cannot be persisted.
    #[instrument(skip(self))]
    pub fn add_item(&mut self, name: ItemName, price: Price) -> Result<()> {
        let mut next = self.cart.clone();
        let event = next.add_item(name, price);
        self.commit(next, &event)
    }

    /// Remove the item called `name`.
    ///
    /// An absent name leaves the items unchanged but still persists and
    /// notifies.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the new snapshot cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, name: &ItemName) -> Result<()> {
        let mut next = self.cart.clone();
        let event = next.remove_item(name);
        self.commit(next, &event)
    }

    /// Change the quantity of `name` by `delta`, removing it at zero or below.
    ///
    /// An absent name is a no-op: nothing is persisted or notified.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the new snapshot cannot be persisted.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, name: &ItemName, delta: i64) -> Result<()> {
        let mut next = self.cart.clone();
        let Some(event) = next.update_quantity(name, delta) else {
            tracing::debug!("Item not in cart; ignoring quantity change");
            return Ok(());
        };
        self.commit(next, &event)
    }

    /// Remove every item.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the new snapshot cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<()> {
        let mut next = self.cart.clone();
        let event = next.clear();
        self.commit(next, &event)
    }

    fn commit(&mut self, next: Cart, event: &CartEvent) -> Result<()> {
        Self::save(&mut self.storage, &self.key, &next)?;
        self.cart = next;
        tracing::debug!(
            ?event,
            total_count = self.cart.total_count(),
            total_price = %self.cart.total_price(),
            "Cart updated"
        );
        self.notify(event);
        Ok(())
    }

    fn save(storage: &mut S, key: &str, cart: &Cart) -> Result<()> {
        let raw = snapshot::encode(cart)?;
        storage.set(key, &raw)?;
        Ok(())
    }

    fn notify(&mut self, event: &CartEvent) {
        for observer in &mut self.observers {
            observer.cart_changed(event, &self.cart);
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("storage", &self.storage)
            .field("key", &self.key)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::CartError;
    use crate::storage::{MemoryStore, StorageError};

    fn name(s: &str) -> ItemName {
        ItemName::parse(s).unwrap()
    }

    /// Observer that records every event it sees.
    fn recorder<S: KeyValueStore>(store: &mut CartStore<S>) -> Rc<RefCell<Vec<CartEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |event: &CartEvent, _: &Cart| {
            sink.borrow_mut().push(event.clone());
        });
        events
    }

    /// Storage that fails every write.
    #[derive(Debug, Default)]
    struct ReadOnlyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Err(StorageError::Io {
                path: "read-only".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    /// Storage that fails every read.
    #[derive(Debug, Default)]
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> std::result::Result<Option<String>, StorageError> {
            Err(StorageError::Io {
                path: "broken".into(),
                source: std::io::Error::other("disk on fire"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_mutations_persist_snapshot() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store.add_item(name("Sushi"), Price::new(400)).unwrap();

        let raw = store.storage().get(snapshot::DEFAULT_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"name":"Pizza","price":250,"quantity":2},{"name":"Sushi","price":400,"quantity":1}]"#
        );
        assert_eq!(store.total_count(), 3);
        assert_eq!(store.total_price(), Price::new(900));
    }

    #[test]
    fn test_clear_persists_empty_array() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();

        let raw = store.storage().get(snapshot::DEFAULT_KEY).unwrap();
        assert_eq!(raw.as_deref(), Some("[]"));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let mut store = CartStore::with_key(MemoryStore::new(), "table-7");
        store.add_item(name("Pizza"), Price::new(250)).unwrap();

        assert_eq!(store.key(), "table-7");
        assert!(store.storage().get("table-7").unwrap().is_some());
        assert!(store.storage().get(snapshot::DEFAULT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_observers_see_committed_state() {
        let mut store = CartStore::new(MemoryStore::new());
        let counts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&counts);
        store.subscribe(move |_: &CartEvent, cart: &Cart| {
            sink.borrow_mut().push(cart.total_count());
        });

        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store.add_item(name("Sushi"), Price::new(400)).unwrap();
        store.update_quantity(&name("Sushi"), 1).unwrap();
        store.clear().unwrap();

        assert_eq!(*counts.borrow(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_event_sequence() {
        let mut store = CartStore::new(MemoryStore::new());
        let events = recorder(&mut store);

        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store.update_quantity(&name("Pizza"), 1).unwrap();
        store.update_quantity(&name("Pizza"), -2).unwrap();
        store.remove_item(&name("Sushi")).unwrap();
        store.clear().unwrap();

        assert_eq!(
            *events.borrow(),
            vec![
                CartEvent::ItemAdded {
                    name: name("Pizza"),
                    quantity: 1
                },
                CartEvent::QuantityChanged {
                    name: name("Pizza"),
                    quantity: 2
                },
                CartEvent::ItemRemoved {
                    name: name("Pizza")
                },
                CartEvent::ItemRemoved {
                    name: name("Sushi")
                },
                CartEvent::Cleared,
            ]
        );
    }

    #[test]
    fn test_update_quantity_missing_is_silent() {
        let mut store = CartStore::new(MemoryStore::new());
        let events = recorder(&mut store);

        store.update_quantity(&name("Pizza"), 1).unwrap();

        assert!(events.borrow().is_empty());
        assert!(store.storage().get(snapshot::DEFAULT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_failed_save_leaves_cart_unchanged() {
        let mut store = CartStore::new(ReadOnlyStore::default());
        let events = recorder(&mut store);

        let result = store.add_item(name("Pizza"), Price::new(250));

        assert!(matches!(result, Err(CartError::Storage(_))));
        assert!(store.items().is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_load_roundtrip() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_item(name("Sushi"), Price::new(400)).unwrap();
        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store.update_quantity(&name("Pizza"), 4).unwrap();
        let expected = store.cart().clone();

        let mut reloaded = CartStore::new(store.into_storage());
        let events = recorder(&mut reloaded);
        reloaded.load();

        assert_eq!(reloaded.cart(), &expected);
        assert_eq!(*events.borrow(), vec![CartEvent::Loaded]);
    }

    #[test]
    fn test_load_nothing_saved() {
        let mut store = CartStore::new(MemoryStore::new());
        let events = recorder(&mut store);
        store.load();

        assert!(store.items().is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_load_keeps_names_verbatim() {
        let long = "Пицца ".repeat(50);
        let saved = serde_json::json!([
            { "name": "Pizza", "price": 250, "quantity": 2 },
            { "name": "Pizza ", "price": 250, "quantity": 1 },
            { "name": long, "price": 900, "quantity": 1 },
        ]);
        let mut storage = MemoryStore::new();
        storage
            .set(snapshot::DEFAULT_KEY, &saved.to_string())
            .unwrap();

        let mut store = CartStore::new(storage);
        store.load();

        assert_eq!(store.items().len(), 3);
        assert_eq!(store.total_count(), 4);
        let reencoded: serde_json::Value =
            serde_json::from_str(&snapshot::encode(store.cart()).unwrap()).unwrap();
        assert_eq!(reencoded, saved);
    }

    #[test]
    fn test_load_not_json_falls_back_to_empty() {
        let mut storage = MemoryStore::new();
        storage.set(snapshot::DEFAULT_KEY, "not json").unwrap();

        let mut store = CartStore::new(storage);
        let events = recorder(&mut store);
        store.load();

        assert!(store.items().is_empty());
        assert_eq!(store.total_count(), 0);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_load_malformed_discards_previous_state() {
        let mut store = CartStore::new(MemoryStore::new());
        store.add_item(name("Pizza"), Price::new(250)).unwrap();
        store
            .storage
            .set(
                snapshot::DEFAULT_KEY,
                r#"[{"name":"Pizza","price":250,"quantity":0}]"#,
            )
            .unwrap();

        store.load();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_load_read_error_falls_back_to_empty() {
        let mut store = CartStore::new(BrokenStore);
        store.add_item(name("Pizza"), Price::new(250)).unwrap();

        store.load();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_debug_shows_observer_count() {
        let mut store = CartStore::new(MemoryStore::new());
        let _events = recorder(&mut store);
        let debug = format!("{store:?}");
        assert!(debug.contains("observers: 1"));
    }
}
