//! # Storage Module
//!
//! The string key-value store the cart is persisted into.
//!
//! ## Store Abstraction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CartManager                                                           │
//! │       │                                                                 │
//! │       │  store.get("cart")          (once, at creation)                │
//! │       │  store.set("cart", json)    (after every change)               │
//! │       ▼                                                                 │
//! │  KeyValueStore (trait)                                                 │
//! │  ├── MemoryStore  ── HashMap, used by tests                            │
//! │  └── FileStore    ── JSON document on disk                             │
//! │                                                                         │
//! │  The manager never sees which one it got. Swapping the store swaps    │
//! │  the persistence mechanism without touching cart code.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreResult;

/// An opaque string key-value store.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}
