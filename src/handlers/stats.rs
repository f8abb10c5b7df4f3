use std::time::Instant;

use axum::{extract::State, Json};
use tracing::info;

use crate::{error::AppResult, models::InventoryStats, stats, AppState};

pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<InventoryStats>> {
    let start = Instant::now();
    let stats = stats::compute_stats(state.store.as_ref()).await?;

    info!(
        total_products = stats.total_products,
        low_stock_count = stats.low_stock_count,
        elapsed_ms = start.elapsed().as_millis(),
        "Computed stats"
    );

    Ok(Json(stats))
}
