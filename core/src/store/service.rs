// inventory/src/store/service.rs

//! `ProductStore`: the four CRUD operations and the rules around them.

use crate::error::{InventoryError, InventoryResult};
use crate::model::{Product, ProductDraft, ProductUpdate};
use crate::store::clock::{Clock, SystemClock};
use crate::store::repository::ProductRepository;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{event, instrument, Level};

pub const NEGATIVE_PRICE_MESSAGE: &str = "Price cannot be negative.";

/// Stateless CRUD facade over a [`ProductRepository`].
///
/// The store owns record identity and the `lastUpdated` stamp. It adds no
/// locking of its own: concurrent updates of one record are last-write-wins.
#[derive(Clone)]
pub struct ProductStore {
  repository: Arc<dyn ProductRepository>,
  clock: Arc<dyn Clock>,
}

impl ProductStore {
  pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
    Self::with_clock(repository, Arc::new(SystemClock))
  }

  pub fn with_clock(repository: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
    Self { repository, clock }
  }

  /// Every product in storage order. No filtering, sorting or paging here;
  /// the console does all of that locally.
  #[instrument(name = "ProductStore::list", skip(self), err(Display))]
  pub async fn list(&self) -> InventoryResult<Vec<Product>> {
    let products = self.repository.list().await?;
    event!(Level::DEBUG, count = products.len(), "Listed products.");
    Ok(products)
  }

  #[instrument(name = "ProductStore::create", skip(self, draft), fields(name = %draft.name), err(Display))]
  pub async fn create(&self, draft: ProductDraft) -> InventoryResult<Product> {
    if draft.price < Decimal::ZERO {
      event!(Level::WARN, price = %draft.price, "Rejected product with negative price.");
      return Err(InventoryError::Validation(NEGATIVE_PRICE_MESSAGE.to_string()));
    }
    let product = self.repository.insert(draft, self.clock.now()).await?;
    event!(Level::INFO, product_id = product.id, "Product created.");
    Ok(product)
  }

  /// Whole-record replace of product `id`.
  ///
  /// Unlike [`create`](Self::create) this does not look at the price: a
  /// negative price is accepted on update.
  #[instrument(name = "ProductStore::update", skip(self, update), fields(body_id = update.id), err(Display))]
  pub async fn update(&self, id: i64, update: ProductUpdate) -> InventoryResult<Product> {
    if id != update.id {
      return Err(InventoryError::Mismatch {
        path_id: id,
        body_id: update.id,
      });
    }
    let product = Product::from_draft(id, update.fields, self.clock.now());
    if !self.repository.replace(&product).await? {
      return Err(InventoryError::NotFound(id));
    }
    event!(Level::INFO, product_id = id, "Product replaced.");
    Ok(product)
  }

  #[instrument(name = "ProductStore::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: i64) -> InventoryResult<()> {
    if !self.repository.remove(id).await? {
      return Err(InventoryError::NotFound(id));
    }
    event!(Level::INFO, product_id = id, "Product deleted.");
    Ok(())
  }
}

impl std::fmt::Debug for ProductStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ProductStore").finish_non_exhaustive()
  }
}
