//! # Domain Types
//!
//! The two records the storefront works with.
//!
//! ```text
//! ┌─────────────────┐            ┌──────────────────────┐
//! │  CatalogItem    │  add(...)  │  CartLineItem        │
//! │  ─────────────  │ ─────────► │  ──────────────────  │
//! │  id             │   copy     │  (all CatalogItem    │
//! │  name           │            │   fields, flattened) │
//! │  image          │            │  quantity (1..=5)    │
//! │  description    │            └──────────────────────┘
//! │  price          │
//! └─────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A cart line copies the catalog fields at the moment it is added. Later
//! catalog changes do not reach lines already in the cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Identifier of a catalog item (and of the cart line holding it).
pub type ItemId = u32;

// =============================================================================
// Catalog Item
// =============================================================================

/// A sellable product record from the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Unique identifier within the catalog.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Image reference (file stem or URL), interpreted by the renderer.
    #[serde(default)]
    pub image: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Unit price in cents.
    pub price: Money,
}

impl CatalogItem {
    /// Creates an item with empty image and description.
    pub fn new(id: ItemId, name: impl Into<String>, price: Money) -> Self {
        CatalogItem {
            id,
            name: name.into(),
            image: String::new(),
            description: String::new(),
            price,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// A catalog item plus the selected quantity.
///
/// ## Serialization
/// The catalog fields are flattened, so a persisted line looks like:
/// ```json
/// { "id": 1, "name": "Lukather", "image": "guitar_01", "description": "...",
///   "price": 299, "quantity": 2 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Selected quantity, kept within `MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY`
    /// by the cart operations.
    pub quantity: u32,
}

impl CartLineItem {
    /// Starts a new line for `item` with quantity 1.
    pub fn from_catalog(item: &CatalogItem) -> Self {
        CartLineItem {
            item: item.clone(),
            quantity: crate::MIN_ITEM_QUANTITY,
        }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.item.price
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
