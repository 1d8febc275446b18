// inventory_server/src/models/product.rs

use chrono::{DateTime, Utc};
use inventory::{InventoryError, Product};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Row shape of the `products` table. `category` is stored as its plain name.
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
  pub id: i64,
  pub name: String,
  pub category: String,
  pub price: Decimal,
  pub stock_quantity: i32,
  pub last_updated: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
  type Error = InventoryError;

  fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
    let category = row.category.parse().map_err(InventoryError::storage)?;
    Ok(Product {
      id: row.id,
      name: row.name,
      category,
      price: row.price,
      stock_quantity: row.stock_quantity,
      last_updated: row.last_updated,
    })
  }
}
