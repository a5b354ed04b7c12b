//! MySQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ecom_core::{EcomError, EcomResult, Product, ProductId, Repository};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> EcomResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, created_at, updated_at
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl Repository<Product, ProductId> for MySqlProductRepository {
    async fn get_all(&self) -> EcomResult<Vec<Product>> {
        debug!("Fetching all products");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, stock, created_at, updated_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> EcomResult<Option<Product>> {
        debug!("Fetching product by id: {}", id);
        self.fetch_by_id(id.into_inner()).await
    }

    async fn add(&self, entity: &Product) -> EcomResult<Product> {
        debug!("Inserting product: {}", entity.name);

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, stock, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(entity.created_at)
        .bind(entity.updated_at)
        .execute(self.pool.inner())
        .await?;

        let id = result.last_insert_id() as i64;

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| EcomError::Internal("Failed to fetch inserted product".to_string()))
    }

    async fn update(&self, entity: &Product) -> EcomResult<()> {
        debug!("Updating product: {}", entity.id);

        sqlx::query(
            r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, stock = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.price)
        .bind(entity.stock)
        .bind(entity.updated_at)
        .bind(entity.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn delete(&self, entity: &Product) -> EcomResult<()> {
        debug!("Deleting product: {}", entity.id);

        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(entity.id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductRepository").finish_non_exhaustive()
    }
}
