use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    error::AppResult,
    models::{Product, ProductInput},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let start = Instant::now();
    let products = state.store.list_all().await?;

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Listed products"
    );

    Ok(Json(products))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;

    let start = Instant::now();
    let product = state.store.insert(&payload).await?;

    info!(
        id = product.id,
        name = %product.name,
        stock_level = ?product.stock_level(),
        value = product.value(),
        elapsed_ms = start.elapsed().as_millis(),
        "Created product"
    );

    Ok((StatusCode::CREATED, Json(product)))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Product>> {
    let Path(id) = id?;

    let start = Instant::now();
    let product = state.store.get_by_id(id).await?;

    info!(id, elapsed_ms = start.elapsed().as_millis(), "Fetched product");

    Ok(Json(product))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> AppResult<Json<Product>> {
    let Path(id) = id?;

    let start = Instant::now();
    // An unknown id is reported as 404 even when the body is also invalid.
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            state.store.get_by_id(id).await?;
            return Err(rejection.into());
        }
    };

    let product = state.store.update(id, &payload).await?;

    info!(
        id,
        stock_level = ?product.stock_level(),
        value = product.value(),
        elapsed_ms = start.elapsed().as_millis(),
        "Updated product"
    );

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Value>> {
    let Path(id) = id?;

    let start = Instant::now();
    state.store.delete(id).await?;

    info!(id, elapsed_ms = start.elapsed().as_millis(), "Deleted product");

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
