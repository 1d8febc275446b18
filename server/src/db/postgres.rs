// inventory_server/src/db/postgres.rs

use crate::models::ProductRow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use inventory::{InventoryError, InventoryResult, Product, ProductDraft, ProductRepository};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info, instrument};

const LIST_SQL: &str = "SELECT id, name, category, price, stock_quantity, last_updated FROM products ORDER BY id ASC";

/// `ProductRepository` over a PostgreSQL `products` table.
#[derive(Debug, Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  #[instrument(name = "db::connect", skip(database_url))]
  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(&self.pool).await?;
    info!("Database migrations applied.");
    Ok(())
  }
}

fn storage_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> InventoryError {
  move |e| {
    error!("{}: {}", context, e);
    InventoryError::storage(e)
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  async fn list(&self) -> InventoryResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(LIST_SQL)
      .fetch_all(&self.pool)
      .await
      .map_err(storage_error("Failed to fetch products from database"))?;

    rows.into_iter().map(Product::try_from).collect()
  }

  async fn insert(&self, draft: ProductDraft, last_updated: DateTime<Utc>) -> InventoryResult<Product> {
    let row: ProductRow = sqlx::query_as(
      "INSERT INTO products (name, category, price, stock_quantity, last_updated) \
       VALUES ($1, $2, $3, $4, $5) \
       RETURNING id, name, category, price, stock_quantity, last_updated",
    )
    .bind(&draft.name)
    .bind(draft.category.as_str())
    .bind(draft.price)
    .bind(draft.stock_quantity)
    .bind(last_updated)
    .fetch_one(&self.pool)
    .await
    .map_err(storage_error("Failed to insert product"))?;

    Product::try_from(row)
  }

  async fn replace(&self, product: &Product) -> InventoryResult<bool> {
    let result = sqlx::query(
      "UPDATE products SET name = $2, category = $3, price = $4, stock_quantity = $5, last_updated = $6 \
       WHERE id = $1",
    )
    .bind(product.id)
    .bind(&product.name)
    .bind(product.category.as_str())
    .bind(product.price)
    .bind(product.stock_quantity)
    .bind(product.last_updated)
    .execute(&self.pool)
    .await
    .map_err(storage_error("Failed to update product"))?;

    Ok(result.rows_affected() > 0)
  }

  async fn remove(&self, id: i64) -> InventoryResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await
      .map_err(storage_error("Failed to delete product"))?;

    Ok(result.rows_affected() > 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use inventory::Category;
  use rust_decimal::Decimal;
  use std::str::FromStr;

  const CREATE_PRODUCTS: &str = include_str!("../../migrations/20240501000000_create_products.sql");

  #[test]
  fn price_column_has_no_fixed_scale() {
    let price_column = CREATE_PRODUCTS
      .lines()
      .map(str::trim)
      .find(|line| line.starts_with("price "))
      .unwrap();
    assert_eq!(price_column, "price NUMERIC NOT NULL,");
  }

  // Runs only against a disposable database named by TEST_DATABASE_URL.
  async fn test_repository() -> Option<PgProductRepository> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let repo = PgProductRepository::connect(&url, 2).await.unwrap();
    repo.migrate().await.unwrap();
    Some(repo)
  }

  #[tokio::test]
  async fn prices_round_trip_without_rounding() {
    let Some(repo) = test_repository().await else {
      eprintln!("TEST_DATABASE_URL not set; skipping Postgres round trip.");
      return;
    };
    let fine = Decimal::from_str("12345678.123456789").unwrap();
    let large = Decimal::from_str("98765432109876.5").unwrap();

    let draft = ProductDraft {
      name: "Precision Scale".to_string(),
      category: Category::Electronics,
      price: fine,
      stock_quantity: 1,
    };
    let created = repo.insert(draft, Utc::now()).await.unwrap();
    assert_eq!(created.price, fine);

    let mut changed = created.clone();
    changed.price = large;
    assert!(repo.replace(&changed).await.unwrap());

    let listed = repo.list().await.unwrap();
    let stored = listed.iter().find(|p| p.id == created.id).unwrap();
    assert_eq!(stored.price, large);
    assert!(repo.remove(created.id).await.unwrap());
  }
}
