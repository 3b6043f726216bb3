//! # Validation Module
//!
//! Field and bound checks for catalog items and cart lines.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog::new(items) ──► validate_catalog_item (every item)            │
//! │                     └──► duplicate id check                             │
//! │                                                                         │
//! │  Cart::normalized(lines) ──► validate_quantity (every persisted line)  │
//! │                                                                         │
//! │  Cart::add / increase / decrease ──► bounds enforced inline, no errors │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::CatalogItem;
use crate::{MAX_ITEM_QUANTITY, MIN_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Lukather").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity against the cart bounds.
///
/// ## Rules
/// - Zero is rejected as non-positive
/// - Must not exceed MAX_ITEM_QUANTITY (5)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty < MIN_ITEM_QUANTITY {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_ITEM_QUANTITY as i64,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a catalog item.
pub fn validate_catalog_item(item: &CatalogItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_price(item.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
