//! # Cart Manager
//!
//! Owns the live cart, applies the cart operations to it and writes it back
//! to the injected key-value store whenever it changes.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Manager Operations                              │
//! │                                                                         │
//! │  Renderer Action          Manager Call            Side Effects          │
//! │  ───────────────          ────────────            ────────────          │
//! │                                                                         │
//! │  Click "Add to cart" ───► add_to_cart(item) ───┐                       │
//! │  Click "+" ─────────────► increase_quantity(id)┤                       │
//! │  Click "-" ─────────────► decrease_quantity(id)┤  Changed?             │
//! │  Click "X" ─────────────► remove_from_cart(id) ┤   ├─ yes: store.set   │
//! │  Click "Empty cart" ────► clear_cart() ────────┘   │       listeners   │
//! │                                                    └─ no:  nothing     │
//! │                                                                         │
//! │  Render header ─────────► is_empty(), cart_total(), cart()  (read only) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup
//! The cart is read from the store exactly once, in the constructor. Anything
//! that can't be decoded as a list of cart lines is treated as an empty cart;
//! decodable lines are passed through [`Cart::normalized`].
//!
//! ## Persistence Failures
//! Mutations never return errors. A failed write is logged at `warn` and the
//! in-memory cart keeps the new state; [`CartManager::flush`] is the checked
//! way to retry.

use std::fmt;
use std::sync::Arc;

use storefront_core::{
    Cart, CartChange, CartLineItem, CartTotals, Catalog, CatalogItem, ItemId, Money,
    CART_STORAGE_KEY,
};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::storage::KeyValueStore;

/// Hook run after every change, once the cart has been persisted.
pub type ChangeListener = Box<dyn FnMut(&Cart)>;

/// Stateful cart bound to a key-value store and a read-only catalog.
pub struct CartManager<S: KeyValueStore> {
    store: S,
    storage_key: String,
    catalog: Arc<Catalog>,
    cart: Cart,
    listeners: Vec<ChangeListener>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Creates a manager persisting under the default `"cart"` key.
    pub fn new(store: S, catalog: Arc<Catalog>) -> Self {
        Self::with_key(store, catalog, CART_STORAGE_KEY)
    }

    /// Creates a manager using the storage key from `config`.
    pub fn from_config(store: S, catalog: Arc<Catalog>, config: &StoreConfig) -> Self {
        Self::with_key(store, catalog, config.storage_key.clone())
    }

    /// Creates a manager persisting under `storage_key`, loading whatever
    /// cart is already stored there.
    pub fn with_key(store: S, catalog: Arc<Catalog>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();

        let cart = match store.get(&storage_key) {
            Ok(Some(raw)) => decode_cart(&raw),
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %storage_key, error = %e, "Failed to read stored cart, starting empty");
                Cart::new()
            }
        };

        info!(
            key = %storage_key,
            lines = cart.len(),
            catalog_items = catalog.len(),
            "Cart manager initialized"
        );

        CartManager {
            store,
            storage_key,
            catalog,
            cart,
            listeners: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of `item`, appending a new line if needed.
    /// No-op when the line is already at the quantity ceiling.
    pub fn add_to_cart(&mut self, item: &CatalogItem) -> CartChange {
        debug!(item_id = item.id, "add_to_cart");
        let change = self.cart.add(item);
        self.commit(change)
    }

    /// Adds one unit of the catalog item with `id`. Unknown ids are no-ops.
    pub fn add_to_cart_by_id(&mut self, id: ItemId) -> CartChange {
        let catalog = Arc::clone(&self.catalog);
        match catalog.get(id) {
            Some(item) => self.add_to_cart(item),
            None => {
                debug!(item_id = id, "add_to_cart_by_id: not in catalog");
                CartChange::Unchanged
            }
        }
    }

    /// Removes the line for `id`, if present.
    pub fn remove_from_cart(&mut self, id: ItemId) -> CartChange {
        debug!(item_id = id, "remove_from_cart");
        let change = self.cart.remove(id);
        self.commit(change)
    }

    /// Increments the quantity for `id` unless it is at the ceiling.
    pub fn increase_quantity(&mut self, id: ItemId) -> CartChange {
        debug!(item_id = id, "increase_quantity");
        let change = self.cart.increase(id);
        self.commit(change)
    }

    /// Decrements the quantity for `id` unless it is at the floor.
    pub fn decrease_quantity(&mut self, id: ItemId) -> CartChange {
        debug!(item_id = id, "decrease_quantity");
        let change = self.cart.decrease(id);
        self.commit(change)
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) -> CartChange {
        debug!("clear_cart");
        let change = self.cart.clear();
        self.commit(change)
    }

    // -------------------------------------------------------------------------
    // Hooks & persistence
    // -------------------------------------------------------------------------

    /// Registers a listener called after each change.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// manager.subscribe(|cart| println!("{} lines", cart.len()));
    /// ```
    pub fn subscribe(&mut self, listener: impl FnMut(&Cart) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Writes the current cart to the store and reports the outcome.
    pub fn flush(&mut self) -> StoreResult<()> {
        self.persist()
    }

    fn commit(&mut self, change: CartChange) -> CartChange {
        if !change.is_changed() {
            return change;
        }

        if let Err(e) = self.persist() {
            warn!(key = %self.storage_key, error = %e, "Failed to persist cart");
        }

        for listener in self.listeners.iter_mut() {
            listener(&self.cart);
        }

        change
    }

    fn persist(&mut self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.cart)?;
        self.store.set(&self.storage_key, &json)?;
        debug!(key = %self.storage_key, lines = self.cart.len(), "Cart persisted");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.cart.items()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// True iff the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Releases the store, dropping the manager.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore + fmt::Debug> fmt::Debug for CartManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartManager")
            .field("store", &self.store)
            .field("storage_key", &self.storage_key)
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Decodes a persisted cart, falling back to an empty cart when the payload
/// isn't a list of cart lines.
fn decode_cart(raw: &str) -> Cart {
    let lines: Vec<CartLineItem> = match serde_json::from_str(raw) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(error = %e, "Stored cart is malformed, starting empty");
            return Cart::new();
        }
    };

    let (cart, report) = Cart::normalized(lines);
    if !report.is_clean() {
        warn!(
            invalid_dropped = report.invalid_dropped,
            duplicates_dropped = report.duplicates_dropped,
            quantities_clamped = report.quantities_clamped,
            "Stored cart violated cart invariants, repaired"
        );
    }

    cart
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                CatalogItem::new(1, "Lukather", Money::from_cents(10)),
                CatalogItem::new(2, "SRV", Money::from_cents(349)),
            ])
            .unwrap(),
        )
    }

    fn guitar(catalog: &Catalog, id: ItemId) -> CatalogItem {
        catalog.get(id).cloned().unwrap()
    }

    fn stored_cart(store: &MemoryStore) -> Cart {
        let raw = store.get(CART_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Store whose writes always fail.
    #[derive(Debug, Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::io(
                key,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }

        fn remove(&mut self, _key: &str) -> StoreResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_starts_empty_without_stored_cart() {
        let manager = CartManager::new(MemoryStore::new(), catalog());

        assert!(manager.is_empty());
        assert_eq!(manager.cart_total(), Money::zero());
        assert_eq!(manager.store().write_count(), 0);
    }

    #[test]
    fn test_walkthrough_persists_each_step() {
        let catalog = catalog();
        let item = guitar(&catalog, 1);
        let mut manager = CartManager::new(MemoryStore::new(), Arc::clone(&catalog));

        manager.add_to_cart(&item);
        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].quantity, 1);
        assert_eq!(manager.cart_total().cents(), 10);
        assert_eq!(stored_cart(manager.store()), *manager.cart());

        manager.add_to_cart(&item);
        assert_eq!(manager.items()[0].quantity, 2);
        assert_eq!(manager.cart_total().cents(), 20);
        assert_eq!(stored_cart(manager.store()), *manager.cart());

        manager.decrease_quantity(1);
        assert_eq!(manager.items()[0].quantity, 1);

        manager.remove_from_cart(1);
        assert!(manager.is_empty());
        assert_eq!(stored_cart(manager.store()), Cart::new());
        assert_eq!(manager.store().write_count(), 4);
    }

    #[test]
    fn test_noops_do_not_write() {
        let catalog = catalog();
        let mut manager = CartManager::new(MemoryStore::new(), Arc::clone(&catalog));

        assert_eq!(manager.remove_from_cart(1), CartChange::Unchanged);
        assert_eq!(manager.increase_quantity(1), CartChange::Unchanged);
        assert_eq!(manager.clear_cart(), CartChange::Unchanged);
        assert_eq!(manager.store().write_count(), 0);

        manager.add_to_cart(&guitar(&catalog, 1));
        assert_eq!(manager.decrease_quantity(1), CartChange::Unchanged);
        assert_eq!(manager.store().write_count(), 1);
    }

    #[test]
    fn test_add_six_times_caps_at_five() {
        let catalog = catalog();
        let item = guitar(&catalog, 2);
        let mut manager = CartManager::new(MemoryStore::new(), catalog);

        for _ in 0..6 {
            manager.add_to_cart(&item);
        }

        assert_eq!(manager.items()[0].quantity, 5);
        assert_eq!(manager.cart_total().cents(), 349 * 5);
        assert_eq!(manager.store().write_count(), 5);
    }

    #[test]
    fn test_second_manager_sees_persisted_cart() {
        let catalog = catalog();
        let mut store = MemoryStore::new();

        {
            let mut manager = CartManager::new(&mut store, Arc::clone(&catalog));
            manager.add_to_cart_by_id(1);
            manager.add_to_cart_by_id(2);
            manager.increase_quantity(2);
        }

        let reopened = CartManager::new(store, catalog);
        let lines: Vec<(ItemId, u32)> = reopened
            .items()
            .iter()
            .map(|line| (line.id(), line.quantity))
            .collect();
        assert_eq!(lines, vec![(1, 1), (2, 2)]);
        assert_eq!(reopened.cart_total().cents(), 10 + 349 * 2);
    }

    #[test]
    fn test_add_by_unknown_id_is_noop() {
        let mut manager = CartManager::new(MemoryStore::new(), catalog());

        assert_eq!(manager.add_to_cart_by_id(42), CartChange::Unchanged);
        assert!(manager.is_empty());
        assert_eq!(manager.store().write_count(), 0);
    }

    #[test]
    fn test_malformed_stored_cart_loads_empty() {
        for raw in ["{not json", r#"{"id": 1}"#, r#"[{"id": "one"}]"#] {
            let store = MemoryStore::with_entry(CART_STORAGE_KEY, raw);
            let manager = CartManager::new(store, catalog());
            assert!(manager.is_empty(), "payload {raw:?} should load empty");
        }
    }

    #[test]
    fn test_stored_cart_is_repaired() {
        let raw = r#"[
            {"id": 1, "name": "Lukather", "price": 10, "quantity": 9},
            {"id": 1, "name": "Lukather", "price": 10, "quantity": 2},
            {"id": 2, "name": "SRV", "price": 349, "quantity": 0}
        ]"#;
        let manager = CartManager::new(MemoryStore::with_entry(CART_STORAGE_KEY, raw), catalog());

        let lines: Vec<(ItemId, u32)> = manager
            .items()
            .iter()
            .map(|line| (line.id(), line.quantity))
            .collect();
        assert_eq!(lines, vec![(1, 5), (2, 1)]);
    }

    #[test]
    fn test_stored_negative_price_is_dropped() {
        let raw = r#"[
            {"id": 1, "name": "Lukather", "price": -250, "quantity": 2},
            {"id": 2, "name": "SRV", "price": 349, "quantity": 1}
        ]"#;
        let manager = CartManager::new(MemoryStore::with_entry(CART_STORAGE_KEY, raw), catalog());

        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].id(), 2);
        assert_eq!(manager.cart_total().cents(), 349);
    }

    #[test]
    fn test_stored_huge_price_total_saturates() {
        let raw = r#"[{"id": 1, "name": "Lukather", "price": 4611686018427387904, "quantity": 2}]"#;
        let manager = CartManager::new(MemoryStore::with_entry(CART_STORAGE_KEY, raw), catalog());

        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.cart_total().cents(), i64::MAX);
        assert_eq!(manager.totals().total.cents(), i64::MAX);
    }

    #[test]
    fn test_listeners_fire_only_on_change() {
        let catalog = catalog();
        let mut manager = CartManager::new(MemoryStore::new(), Arc::clone(&catalog));

        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        manager.subscribe(move |cart| sink.borrow_mut().push(cart.len()));

        manager.add_to_cart(&guitar(&catalog, 1));
        manager.add_to_cart(&guitar(&catalog, 2));
        manager.remove_from_cart(99);
        manager.clear_cart();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_custom_storage_key() {
        let config = StoreConfig::default().storage_key("basket");
        let mut manager = CartManager::from_config(MemoryStore::new(), catalog(), &config);

        manager.add_to_cart_by_id(1);

        assert_eq!(manager.storage_key(), "basket");
        assert!(manager.store().get("basket").unwrap().is_some());
        assert!(manager.store().get(CART_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut manager = CartManager::new(ReadOnlyStore, catalog());

        assert_eq!(manager.add_to_cart_by_id(1), CartChange::Changed);
        assert_eq!(manager.items().len(), 1);
        assert!(matches!(manager.flush(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_clear_persists_empty_array() {
        let mut manager = CartManager::new(MemoryStore::new(), catalog());
        manager.add_to_cart_by_id(1);
        manager.add_to_cart_by_id(2);

        manager.clear_cart();

        assert!(manager.is_empty());
        assert_eq!(
            manager.store().get(CART_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_totals_snapshot() {
        let mut manager = CartManager::new(MemoryStore::new(), catalog());
        manager.add_to_cart_by_id(2);
        manager.increase_quantity(2);

        let totals = manager.totals();
        assert_eq!(totals.item_count, 1);
        assert_eq!(totals.total_quantity, 2);
        assert_eq!(totals.total.cents(), 698);
    }
}
