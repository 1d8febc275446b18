// inventory/src/store/repository.rs

//! The storage seam behind the product store.

use crate::error::InventoryResult;
use crate::model::{Product, ProductDraft};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence capability for product records.
///
/// Implementations only move records in and out of storage. Business rules
/// (price validation, id matching, timestamp stamping) live in
/// [`ProductStore`](crate::store::ProductStore).
#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// All records in primary-key order.
  async fn list(&self) -> InventoryResult<Vec<Product>>;

  /// Persists a new record, assigning its id.
  async fn insert(&self, draft: ProductDraft, last_updated: DateTime<Utc>) -> InventoryResult<Product>;

  /// Overwrites every field of the record with `product.id`.
  /// Returns `false` when no such record exists; nothing is written in that case.
  async fn replace(&self, product: &Product) -> InventoryResult<bool>;

  /// Returns `false` when no record with `id` exists.
  async fn remove(&self, id: i64) -> InventoryResult<bool>;
}
