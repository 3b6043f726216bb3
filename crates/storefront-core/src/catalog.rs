//! # Catalog
//!
//! The read-only list of items the storefront sells. The catalog is supplied
//! from outside (an in-code list or a JSON document) and never mutated; the
//! cart manager holds it behind an `Arc` and only reads from it.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CatalogItem, ItemId};
use crate::validation::validate_catalog_item;

/// An ordered, validated list of catalog items with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, validating every item and rejecting duplicate ids.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Catalog, CatalogItem, Money};
    ///
    /// let catalog = Catalog::new(vec![
    ///     CatalogItem::new(1, "Lukather", Money::from_cents(299)),
    ///     CatalogItem::new(2, "SRV", Money::from_cents(349)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.get(2).is_some());
    /// ```
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        for (index, item) in items.iter().enumerate() {
            validate_catalog_item(item)?;

            if items[..index].iter().any(|earlier| earlier.id == item.id) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: item.id.to_string(),
                }
                .into());
            }
        }

        Ok(Catalog { items })
    }

    /// Parses a JSON array of catalog items.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Catalog::new(items)
    }

    /// Looks up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks up an item by id, failing with `ItemNotFound`.
    pub fn require(&self, id: ItemId) -> CoreResult<&CatalogItem> {
        self.get(id).ok_or(CoreError::ItemNotFound(id))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<CatalogItem>::deserialize(deserializer)?;
        Catalog::new(items).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    const CATALOG_JSON: &str = r#"[
        {"id": 1, "name": "Lukather", "image": "guitar_01", "description": "Maple neck", "price": 299},
        {"id": 2, "name": "SRV", "image": "guitar_02", "description": "Sunburst", "price": 349}
    ]"#;

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "Lukather");
        assert_eq!(catalog.get(2).unwrap().price, Money::from_cents(349));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Catalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![
            CatalogItem::new(1, "Lukather", Money::from_cents(299)),
            CatalogItem::new(1, "Copy", Money::from_cents(100)),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_require_reports_missing_id() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        assert!(catalog.require(1).is_ok());
        assert!(matches!(catalog.require(9), Err(CoreError::ItemNotFound(9))));
    }

    #[test]
    fn test_serde_round_trip_keeps_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();

        let ids: Vec<ItemId> = back.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
