//! In-memory `ProductStore` used by tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{not_found, ProductStore};
use crate::error::AppResult;
use crate::models::{Product, ProductInput, QuantityRange};

#[derive(Debug, Default)]
struct Table {
    next_id: i32,
    rows: BTreeMap<i32, Product>,
}

#[derive(Debug, Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Product> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn insert(&self, input: &ProductInput) -> AppResult<Product> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let product = Product {
            id: table.next_id,
            name: input.name.clone(),
            quantity: input.quantity,
            price: input.price,
        };
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, input: &ProductInput) -> AppResult<Product> {
        let mut table = self.table.write().await;
        let product = table.rows.get_mut(&id).ok_or_else(|| not_found(id))?;
        product.name = input.name.clone();
        product.quantity = input.quantity;
        product.price = input.price;
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.table
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn count_in_quantity_range(&self, range: QuantityRange) -> AppResult<i64> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|p| range.contains(p.quantity)).count() as i64)
    }

    async fn sum_value(&self) -> AppResult<Option<f64>> {
        let table = self.table.read().await;
        if table.rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(table.rows.values().map(Product::value).sum()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn input(name: &str, quantity: i32, price: f64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryProductStore::new();
        let a = store.insert(&input("A", 1, 1.0)).await.unwrap();
        let b = store.insert(&input("B", 2, 2.0)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryProductStore::new();
        let a = store.insert(&input("A", 1, 1.0)).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store.insert(&input("B", 1, 1.0)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = MemoryProductStore::new();
        let err = store.update(9, &input("X", 1, 1.0)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn sum_value_is_none_when_empty() {
        let store = MemoryProductStore::new();
        assert_eq!(store.sum_value().await.unwrap(), None);
    }
}
