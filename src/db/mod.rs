use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::*;

#[cfg(test)]
pub mod memory;

/// Persistence for the `products` table.
///
/// Aggregates (`count`, `count_in_quantity_range`, `sum_value`) are meant to be
/// computed by the backing store, not by fetching rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Product>;

    async fn insert(&self, input: &ProductInput) -> AppResult<Product>;

    /// Replaces name, quantity and price of an existing product.
    async fn update(&self, id: i32, input: &ProductInput) -> AppResult<Product>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn count(&self) -> AppResult<i64>;

    async fn count_in_quantity_range(&self, range: QuantityRange) -> AppResult<i64>;

    /// `SUM(price * quantity)`; `None` when the table is empty.
    async fn sum_value(&self) -> AppResult<Option<f64>>;
}

pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Product {} not found", id))
}

// ── Connection / migrations ───────────────────────────────────────────────────

pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<PgPool> {
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    info!("Database connection pool established.");
    Ok(pool)
}

/// Applies pending migrations. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!("Running migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete.");
    Ok(())
}

// ── Postgres store ────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, quantity, price FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        sqlx::query_as::<_, Product>("SELECT id, name, quantity, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found(id))
    }

    async fn insert(&self, input: &ProductInput) -> AppResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, quantity, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, quantity, price
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i32, input: &ProductInput) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name     = $1,
                quantity = $2,
                price    = $3
            WHERE id = $4
            RETURNING id, name, quantity, price
            "#,
        )
        .bind(&input.name)
        .bind(input.quantity)
        .bind(input.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    async fn count_in_quantity_range(&self, range: QuantityRange) -> AppResult<i64> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM products WHERE quantity > $1 AND quantity <= $2")
                .bind(range.above)
                .bind(range.at_most)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.0)
    }

    async fn sum_value(&self) -> AppResult<Option<f64>> {
        let row: (Option<f64>,) = sqlx::query_as("SELECT SUM(price * quantity) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
