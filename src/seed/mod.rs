use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::db::ProductStore;
use crate::error::AppResult;
use crate::models::{Product, ProductInput};

pub const DEFAULT_SEED_COUNT: usize = 100;
pub const MAX_SEED_COUNT: usize = 10_000;

static ADJECTIVES: &[&str] = &[
    "Premium", "Deluxe", "Ultra", "Pro", "Classic", "Elite", "Smart", "Eco",
    "Compact", "Portable", "Heavy-Duty", "Lightweight", "Advanced", "Basic",
    "Professional", "Essential", "Signature", "Standard", "Mini", "Turbo",
];

static NOUNS: &[&str] = &[
    "Widget", "Gadget", "Device", "Module", "Unit", "Component", "Kit",
    "Bundle", "Console", "Panel", "Sensor", "Controller", "Adapter",
    "Monitor", "Scanner", "Filter", "Converter", "Regulator",
];

/// Random product name using adjective + noun + serial suffix.
fn random_product_name(rng: &mut impl Rng, serial: usize) -> String {
    let adj = ADJECTIVES.choose(rng).unwrap_or(&"Standard");
    let noun = NOUNS.choose(rng).unwrap_or(&"Widget");
    format!("{} {} #{:05}", adj, noun, serial)
}

fn random_product(rng: &mut impl Rng, serial: usize) -> ProductInput {
    // 0..=60 covers the out-of-stock, low-stock and in-stock bands.
    let quantity = rng.gen_range(0..=60);
    let cents: i64 = rng.gen_range(99..=99_999);
    ProductInput {
        name: random_product_name(rng, serial),
        quantity,
        price: cents as f64 / 100.0,
    }
}

/// Insert `count` random products (capped at `MAX_SEED_COUNT`).
pub async fn seed_products(
    store: &dyn ProductStore,
    count: usize,
    rng: &mut (impl Rng + Send),
) -> AppResult<Vec<Product>> {
    let count = count.min(MAX_SEED_COUNT);
    info!("Seeding {} products...", count);

    let mut products = Vec::with_capacity(count);
    for serial in 0..count {
        let input = random_product(rng, serial);
        products.push(store.insert(&input).await?);

        if (serial + 1) % 1_000 == 0 {
            info!("  Seeded {} products so far", serial + 1);
        }
    }

    info!("Seeding complete. Total: {} products", products.len());
    Ok(products)
}
