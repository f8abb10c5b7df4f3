use serde::{Deserialize, Serialize};

/// Quantities at or below this value (and above zero) count as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::from_quantity(self.quantity)
    }

    /// Inventory value of this row (`price * quantity`).
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Body of create and update requests. All three fields must be present;
/// negative quantity or price are accepted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Half-open quantity window `(above, at_most]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityRange {
    pub above: i32,
    pub at_most: i32,
}

impl QuantityRange {
    pub const LOW_STOCK: QuantityRange = QuantityRange {
        above: 0,
        at_most: LOW_STOCK_THRESHOLD,
    };

    pub fn contains(&self, quantity: i32) -> bool {
        quantity > self.above && quantity <= self.at_most
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    Low,
    InStock,
}

impl StockLevel {
    pub fn from_quantity(quantity: i32) -> Self {
        if QuantityRange::LOW_STOCK.contains(quantity) {
            StockLevel::Low
        } else if quantity > LOW_STOCK_THRESHOLD {
            StockLevel::InStock
        } else {
            StockLevel::OutOfStock
        }
    }
}
