use tracing::debug;

use crate::db::ProductStore;
use crate::error::AppResult;
use crate::models::{InventoryStats, QuantityRange};

/// Computes the inventory snapshot with three aggregate queries against the store.
///
/// An empty table yields a `total_value` of `0.0` rather than null.
pub async fn compute_stats(store: &dyn ProductStore) -> AppResult<InventoryStats> {
    let total_products = store.count().await?;
    let total_value = store.sum_value().await?.unwrap_or(0.0);
    let low_stock_count = store.count_in_quantity_range(QuantityRange::LOW_STOCK).await?;

    debug!(total_products, total_value, low_stock_count, "Computed inventory stats");

    Ok(InventoryStats {
        total_products,
        total_value,
        low_stock_count,
    })
}
