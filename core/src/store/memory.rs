// inventory/src/store/memory.rs

use crate::error::InventoryResult;
use crate::model::{Product, ProductDraft};
use crate::store::repository::ProductRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{event, Level};

#[derive(Debug)]
struct Table {
  next_id: i64,
  rows: BTreeMap<i64, Product>,
}

/// Process-local repository. Ids start at 1 and are never reused.
///
/// Lock guards are never held across an `.await`; every method does its work
/// synchronously under the lock.
#[derive(Debug)]
pub struct InMemoryProductRepository {
  table: RwLock<Table>,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self {
      table: RwLock::new(Table {
        next_id: 1,
        rows: BTreeMap::new(),
      }),
    }
  }

  /// Seeds the repository with existing records, keeping their ids.
  pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
    let rows: BTreeMap<i64, Product> = products.into_iter().map(|p| (p.id, p)).collect();
    let next_id = rows.keys().next_back().map_or(1, |max| max + 1);
    Self {
      table: RwLock::new(Table { next_id, rows }),
    }
  }

  pub fn len(&self) -> usize {
    self.table.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.table.read().rows.is_empty()
  }

  pub fn get(&self, id: i64) -> Option<Product> {
    self.table.read().rows.get(&id).cloned()
  }
}

impl Default for InMemoryProductRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn list(&self) -> InventoryResult<Vec<Product>> {
    Ok(self.table.read().rows.values().cloned().collect())
  }

  async fn insert(&self, draft: ProductDraft, last_updated: DateTime<Utc>) -> InventoryResult<Product> {
    let mut table = self.table.write();
    let id = table.next_id;
    table.next_id += 1;
    let product = Product::from_draft(id, draft, last_updated);
    table.rows.insert(id, product.clone());
    event!(Level::TRACE, product_id = id, "Inserted product row.");
    Ok(product)
  }

  async fn replace(&self, product: &Product) -> InventoryResult<bool> {
    let mut table = self.table.write();
    match table.rows.get_mut(&product.id) {
      Some(row) => {
        *row = product.clone();
        Ok(true)
      }
      None => Ok(false),
    }
  }

  async fn remove(&self, id: i64) -> InventoryResult<bool> {
    Ok(self.table.write().rows.remove(&id).is_some())
  }
}
