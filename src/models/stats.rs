use serde::{Deserialize, Serialize};

/// Snapshot returned by `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: i64,
    pub total_value: f64,
    pub low_stock_count: i64,
}
