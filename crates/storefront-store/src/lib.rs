//! # storefront-store: Persistence and Cart State for the Storefront
//!
//! This crate binds the pure cart from `storefront-core` to a key-value
//! store and keeps the two in sync.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Data Flow                               │
//! │                                                                         │
//! │  Renderer (click "Add to cart")                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                storefront-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CartManager  │    │ KeyValueStore │    │  StoreConfig │  │   │
//! │  │   │ (manager.rs)  │───►│ (storage/)    │    │ (config.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Cart ops      │    │ MemoryStore   │    │ storage key  │  │   │
//! │  │   │ listeners     │    │ FileStore     │    │ data path    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront.json  ("cart" → JSON array of cart lines)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{Catalog, CatalogItem, Money};
//! use storefront_store::{CartManager, MemoryStore};
//!
//! let catalog = Arc::new(
//!     Catalog::new(vec![CatalogItem::new(1, "Lukather", Money::from_cents(299))]).unwrap(),
//! );
//!
//! let mut manager = CartManager::new(MemoryStore::new(), catalog);
//! manager.add_to_cart_by_id(1);
//! manager.increase_quantity(1);
//!
//! assert_eq!(manager.cart_total().cents(), 598);
//! assert!(!manager.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod manager;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use manager::{CartManager, ChangeListener};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
