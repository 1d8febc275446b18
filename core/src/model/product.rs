// inventory/src/model/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// A persisted product record as the store returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub category: Category,
  pub price: Decimal,
  pub stock_quantity: i32,
  pub last_updated: DateTime<Utc>,
}

/// Body of a create request. `id` and `lastUpdated` are owned by the store,
/// so any value a client sends for them is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
  pub name: String,
  pub category: Category,
  pub price: Decimal,
  pub stock_quantity: i32,
}

/// Body of an update request: a whole-record replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
  pub id: i64,
  #[serde(flatten)]
  pub fields: ProductDraft,
}

impl Product {
  pub fn from_draft(id: i64, draft: ProductDraft, last_updated: DateTime<Utc>) -> Self {
    Product {
      id,
      name: draft.name,
      category: draft.category,
      price: draft.price,
      stock_quantity: draft.stock_quantity,
      last_updated,
    }
  }

  pub fn to_draft(&self) -> ProductDraft {
    ProductDraft {
      name: self.name.clone(),
      category: self.category,
      price: self.price,
      stock_quantity: self.stock_quantity,
    }
  }
}

impl ProductUpdate {
  pub fn new(id: i64, fields: ProductDraft) -> Self {
    ProductUpdate { id, fields }
  }
}
