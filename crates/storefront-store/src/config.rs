//! # Store Configuration
//!
//! Where the cart lives and how totals are rendered.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read once at startup and not reloaded.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_core::{Money, CART_STORAGE_KEY};

/// File name of the store document inside the data directory.
const STORE_FILE_NAME: &str = "storefront.json";

/// Most decimal places `format_currency` honours; `10^18` is the largest
/// power of ten an `i64` holds.
const MAX_CURRENCY_DECIMALS: u8 = 18;

/// Store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Key the cart is persisted under.
    /// Default: "cart"
    pub storage_key: String,

    /// Path of the `FileStore` document.
    /// Default: platform data dir, e.g. `~/.local/share/storefront/storefront.json`
    pub data_path: PathBuf,

    /// Currency symbol (for display only)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            storage_key: CART_STORAGE_KEY.to_string(),
            data_path: default_data_path(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_CART_KEY`: Override the storage key
    /// - `STOREFRONT_DATA_PATH`: Override the store file path
    /// - `STOREFRONT_CURRENCY_SYMBOL`: Override the display symbol
    pub fn from_env() -> Self {
        Self::default().apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup("STOREFRONT_CART_KEY").filter(|k| !k.trim().is_empty()) {
            self.storage_key = key;
        }

        if let Some(path) = lookup("STOREFRONT_DATA_PATH").filter(|p| !p.trim().is_empty()) {
            self.data_path = PathBuf::from(path);
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        self
    }

    /// Sets the storage key.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the store file path.
    pub fn data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Formats an amount with the configured symbol and decimals.
    /// Decimals above 18 are treated as 18.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_i64.pow(decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                whole,
                frac,
                width = decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, whole)
        }
    }
}

/// Resolves the platform data directory for the store file.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.storefront.cart/storefront.json`
/// - **Windows**: `%APPDATA%\storefront\cart\data\storefront.json`
/// - **Linux**: `~/.local/share/cart/storefront.json`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_data_path() -> PathBuf {
    ProjectDirs::from("com", "storefront", "cart")
        .map(|dirs| dirs.data_dir().join(STORE_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE_NAME))
}
