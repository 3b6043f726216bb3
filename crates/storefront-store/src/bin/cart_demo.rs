//! # Cart Demo
//!
//! Drives a `CartManager` over a `FileStore` so the persisted cart can be
//! inspected on disk.
//!
//! ## Usage
//! ```bash
//! # Use the platform data directory
//! cargo run -p storefront-store --bin cart-demo
//!
//! # Specify the store file and a catalog document
//! cargo run -p storefront-store --bin cart-demo -- --data ./cart.json --catalog ./guitars.json
//!
//! # Start from an empty cart
//! cargo run -p storefront-store --bin cart-demo -- --reset
//! ```
//!
//! Running it twice without `--reset` shows the cart picked up from the
//! previous run.

use std::env;
use std::fs;
use std::sync::Arc;

use storefront_core::{Catalog, CatalogItem, Money};
use storefront_store::{CartManager, FileStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Built-in catalog used when no `--catalog` file is given.
const GUITARS: &[(u32, &str, &str, i64)] = &[
    (1, "Lukather", "guitar_01", 29900),
    (2, "SRV", "guitar_02", 34900),
    (3, "Borland", "guitar_03", 32900),
    (4, "VAI", "guitar_04", 29900),
    (5, "Thompson", "guitar_05", 39900),
    (6, "White", "guitar_06", 32900),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut config = StoreConfig::from_env();
    let mut catalog_path: Option<String> = None;
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    config = config.data_path(&args[i + 1]);
                    i += 1;
                }
            }
            "--catalog" | "-c" => {
                if i + 1 < args.len() {
                    catalog_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--reset" => reset = true,
            "--help" | "-h" => {
                println!("Storefront Cart Demo");
                println!();
                println!("Usage: cart-demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <PATH>      Store file path (default: platform data dir)");
                println!("  -c, --catalog <PATH>   Catalog JSON document (default: built-in guitars)");
                println!("      --reset            Clear the stored cart before the demo");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let catalog = match catalog_path {
        Some(path) => Catalog::from_json(&fs::read_to_string(&path)?)?,
        None => builtin_catalog()?,
    };
    let catalog = Arc::new(catalog);

    info!(path = %config.data_path.display(), "Opening store");
    let store = FileStore::open(&config.data_path)?;

    let mut manager = CartManager::from_config(store, Arc::clone(&catalog), &config);
    if reset {
        manager.clear_cart();
    }

    println!("Store: {}", config.data_path.display());
    println!(
        "Restored cart: {} lines, total {}",
        manager.cart().len(),
        config.format_currency(manager.cart_total())
    );

    let formatter = config.clone();
    manager.subscribe(move |cart| {
        info!(
            lines = cart.len(),
            total = %formatter.format_currency(cart.total()),
            "Cart changed"
        );
    });

    let first = catalog.require(1)?.clone();
    manager.add_to_cart(&first);
    manager.add_to_cart(&first);
    manager.add_to_cart_by_id(2);
    manager.increase_quantity(2);
    manager.decrease_quantity(1);

    println!();
    for line in manager.items() {
        println!(
            "  {:<12} x{}  {}",
            line.item.name,
            line.quantity,
            config.format_currency(line.line_total())
        );
    }
    println!(
        "  {:<12}     {}",
        "TOTAL",
        config.format_currency(manager.cart_total())
    );

    manager.flush()?;
    Ok(())
}

fn builtin_catalog() -> Result<Catalog, storefront_core::CoreError> {
    let items = GUITARS
        .iter()
        .map(|&(id, name, image, cents)| {
            CatalogItem::new(id, name, Money::from_cents(cents))
                .with_image(image)
                .with_description("Solid body electric guitar")
        })
        .collect();

    Catalog::new(items)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, with debug for the storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_store=debug,storefront_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
