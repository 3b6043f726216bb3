//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate holds the shopping cart as plain data plus the transformations
//! that are allowed on it. Nothing in here touches storage; persistence lives
//! in `storefront-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Rendering layer (external, not in repo)            │   │
//! │  │    Product grid ──► Cart dropdown ──► Checkout button           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             storefront-store (CartManager, KeyValueStore)       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │ Catalog-  │  │   Money   │  │   Cart    │  │  Catalog  │  │   │
//! │  │   │ Item      │  │           │  │ CartTotals│  │  lookups  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog items and cart line items
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart sequence and its transformations
//! - [`catalog`] - Read-only product catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Field and bound checks
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, CatalogItem, Money};
//!
//! let guitar = CatalogItem::new(1, "Lukather", Money::from_cents(299));
//!
//! let mut cart = Cart::new();
//! cart.add(&guitar);
//! cart.add(&guitar);
//!
//! assert_eq!(cart.get(1).map(|line| line.quantity), Some(2));
//! assert_eq!(cart.total().cents(), 598);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartChange, CartTotals, Normalization};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{CartLineItem, CatalogItem, ItemId};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Lowest quantity a cart line can hold.
///
/// Decreasing below this is a no-op; removing the line is a separate action.
pub const MIN_ITEM_QUANTITY: u32 = 1;

/// Highest quantity a cart line can hold.
///
/// ## Business Reason
/// There is no stock check in the storefront, so a fixed ceiling stands in
/// for it. Adding or increasing past the ceiling is silently ignored.
pub const MAX_ITEM_QUANTITY: u32 = 5;

/// Key under which the cart is persisted in the key-value store.
pub const CART_STORAGE_KEY: &str = "cart";
