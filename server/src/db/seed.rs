// inventory_server/src/db/seed.rs

use inventory::{Category, InventoryResult, ProductDraft, ProductStore};
use rust_decimal::Decimal;
use tracing::info;

fn sample_products() -> Vec<ProductDraft> {
  let item = |name: &str, category, cents: i64, stock| ProductDraft {
    name: name.to_string(),
    category,
    price: Decimal::new(cents, 2),
    stock_quantity: stock,
  };
  vec![
    item("Wireless Mouse", Category::Electronics, 1999, 25),
    item("Denim Jacket", Category::Clothing, 5950, 4),
    item("Oak Side Table", Category::Furniture, 12900, 3),
    item("Basmati Rice 5kg", Category::Groceries, 1150, 60),
    item("The Rust Programming Language", Category::Books, 3995, 12),
  ]
}

/// Inserts the sample catalogue through the store when storage is empty.
/// Returns how many products were added.
pub async fn seed_if_empty(store: &ProductStore) -> InventoryResult<usize> {
  if !store.list().await?.is_empty() {
    info!("Storage already has products; skipping seed.");
    return Ok(0);
  }
  let samples = sample_products();
  let count = samples.len();
  for draft in samples {
    store.create(draft).await?;
  }
  info!("Seeded {} sample products.", count);
  Ok(count)
}
