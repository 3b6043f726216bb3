//! # Cart
//!
//! The ordered sequence of cart lines and the transformations allowed on it.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Existing line             Missing line                │
//! │  ─────────        ─────────────             ────────────                │
//! │  add(item)        qty < 5 → qty + 1         push { item, qty: 1 }       │
//! │                   qty = 5 → no-op                                       │
//! │  remove(id)       drop the line             no-op                       │
//! │  increase(id)     qty < 5 → qty + 1         no-op                       │
//! │  decrease(id)     qty > 1 → qty - 1         no-op                       │
//! │  clear()          empty the sequence                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per item id
//! - Every quantity is within `MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY`
//!
//! Every operation reports a [`CartChange`] so the owner knows whether the
//! sequence needs to be persisted again.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CartLineItem, CatalogItem, ItemId};
use crate::validation::{validate_catalog_item, validate_quantity};
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

// =============================================================================
// Cart Change
// =============================================================================

/// Outcome of a cart operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// The sequence was modified.
    Changed,
    /// The operation was absorbed as a no-op.
    Unchanged,
}

impl CartChange {
    #[inline]
    pub fn is_changed(self) -> bool {
        self == CartChange::Changed
    }
}

impl From<bool> for CartChange {
    fn from(changed: bool) -> Self {
        if changed {
            CartChange::Changed
        } else {
            CartChange::Unchanged
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered sequence of lines, unique by item id.
///
/// Serializes as a bare JSON array of [`CartLineItem`]. Deserializing goes
/// through [`Cart::normalized`], so a decoded cart always holds the
/// invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from lines of unknown provenance, restoring the
    /// invariants.
    ///
    /// ## Repairs
    /// - A line whose catalog fields fail validation (blank name, negative
    ///   price) is dropped
    /// - A repeated id keeps its first line; later ones are dropped
    /// - A quantity of 0 becomes 1, anything above the ceiling becomes 5
    pub fn normalized(lines: Vec<CartLineItem>) -> (Self, Normalization) {
        let mut report = Normalization::default();
        let mut items: Vec<CartLineItem> = Vec::with_capacity(lines.len());

        for mut line in lines {
            if validate_catalog_item(&line.item).is_err() {
                report.invalid_dropped += 1;
                continue;
            }

            if items.iter().any(|kept| kept.id() == line.id()) {
                report.duplicates_dropped += 1;
                continue;
            }

            if validate_quantity(line.quantity).is_err() {
                line.quantity = line.quantity.clamp(MIN_ITEM_QUANTITY, MAX_ITEM_QUANTITY);
                report.quantities_clamped += 1;
            }

            items.push(line);
        }

        (Cart { items }, report)
    }

    /// Adds one unit of `item`.
    ///
    /// ## Behavior
    /// - Line exists with quantity at the ceiling: no-op
    /// - Line exists below the ceiling: quantity + 1
    /// - No line yet: appends a copy of the catalog fields with quantity 1
    pub fn add(&mut self, item: &CatalogItem) -> CartChange {
        match self.position(item.id) {
            Some(index) => Self::step_up(&mut self.items[index]),
            None => {
                self.items.push(CartLineItem::from_catalog(item));
                CartChange::Changed
            }
        }
    }

    /// Removes the line for `id`, if any. Other lines are left as they are.
    pub fn remove(&mut self, id: ItemId) -> CartChange {
        let before = self.items.len();
        self.items.retain(|line| line.id() != id);
        (self.items.len() != before).into()
    }

    /// Increments the quantity for `id` unless it is at the ceiling.
    pub fn increase(&mut self, id: ItemId) -> CartChange {
        match self.position(id) {
            Some(index) => Self::step_up(&mut self.items[index]),
            None => CartChange::Unchanged,
        }
    }

    /// Decrements the quantity for `id` unless it is at the floor.
    pub fn decrease(&mut self, id: ItemId) -> CartChange {
        let Some(index) = self.position(id) else {
            return CartChange::Unchanged;
        };

        let line = &mut self.items[index];
        if line.quantity > MIN_ITEM_QUANTITY {
            line.quantity -= 1;
            CartChange::Changed
        } else {
            CartChange::Unchanged
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) -> CartChange {
        let changed = !self.items.is_empty();
        self.items.clear();
        changed.into()
    }

    /// Returns the line for `id`.
    pub fn get(&self, id: ItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.id() == id)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price × quantity` over all lines. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|line| line.id() == id)
    }

    fn step_up(line: &mut CartLineItem) -> CartChange {
        if line.quantity < MAX_ITEM_QUANTITY {
            line.quantity += 1;
            CartChange::Changed
        } else {
            CartChange::Unchanged
        }
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let lines = Vec::<CartLineItem>::deserialize(deserializer)?;
        Ok(Cart::normalized(lines).0)
    }
}

// =============================================================================
// Normalization Report
// =============================================================================

/// What [`Cart::normalized`] had to repair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalization {
    pub invalid_dropped: usize,
    pub duplicates_dropped: usize,
    pub quantities_clamped: usize,
}

impl Normalization {
    /// True when the input already satisfied every invariant.
    pub fn is_clean(&self) -> bool {
        self.invalid_dropped == 0 && self.duplicates_dropped == 0 && self.quantities_clamped == 0
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived values for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: u32,
    pub total_quantity: u32,
    pub total: Money,
    pub is_empty: bool,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len() as u32,
            total_quantity: cart.total_quantity(),
            total: cart.total(),
            is_empty: cart.is_empty(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
