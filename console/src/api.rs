// inventory_console/src/api.rs

//! Client side of the product HTTP surface.

use async_trait::async_trait;
use inventory::{InventoryError, InventoryResult, Product, ProductDraft, ProductUpdate};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

/// The four store operations as the console sees them. Every failure, whatever
/// its cause, arrives as [`InventoryError::Transport`].
#[async_trait]
pub trait ProductApi: Send + Sync {
  async fn list(&self) -> InventoryResult<Vec<Product>>;
  async fn create(&self, draft: &ProductDraft) -> InventoryResult<Product>;
  /// `PUT /products/{update.id}`; the server answers with no body.
  async fn update(&self, update: &ProductUpdate) -> InventoryResult<()>;
  async fn delete(&self, id: i64) -> InventoryResult<()>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
  error: String,
}

/// Turns a non-success response into a transport error, keeping the server's
/// `{"error": ...}` message when there is one.
pub(crate) fn transport_error(status: StatusCode, body: &str) -> InventoryError {
  let detail = serde_json::from_str::<ErrorBody>(body)
    .map(|b| b.error)
    .unwrap_or_else(|_| body.trim().to_string());
  if detail.is_empty() {
    InventoryError::Transport(format!("server responded {}", status))
  } else {
    InventoryError::Transport(format!("server responded {}: {}", status, detail))
  }
}

fn request_error(err: reqwest::Error) -> InventoryError {
  InventoryError::Transport(err.to_string())
}

#[derive(Debug, Clone)]
pub struct HttpProductApi {
  client: Client,
  base_url: String,
}

impl HttpProductApi {
  pub fn new(base_url: impl Into<String>) -> InventoryResult<Self> {
    let client = Client::builder().build().map_err(request_error)?;
    Ok(Self::with_client(client, base_url))
  }

  pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self { client, base_url }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn products_url(&self) -> String {
    format!("{}/products", self.base_url)
  }

  fn product_url(&self, id: i64) -> String {
    format!("{}/products/{}", self.base_url, id)
  }

  async fn check(response: Response) -> InventoryResult<Response> {
    let status = response.status();
    if status.is_success() {
      return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(transport_error(status, &body))
  }
}

#[async_trait]
impl ProductApi for HttpProductApi {
  #[instrument(name = "api::list", skip(self))]
  async fn list(&self) -> InventoryResult<Vec<Product>> {
    let response = self.client.get(self.products_url()).send().await.map_err(request_error)?;
    let products: Vec<Product> = Self::check(response).await?.json().await.map_err(request_error)?;
    debug!("Fetched {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "api::create", skip(self, draft), fields(name = %draft.name))]
  async fn create(&self, draft: &ProductDraft) -> InventoryResult<Product> {
    let response = self
      .client
      .post(self.products_url())
      .json(draft)
      .send()
      .await
      .map_err(request_error)?;
    Self::check(response).await?.json().await.map_err(request_error)
  }

  #[instrument(name = "api::update", skip(self, update), fields(product_id = update.id))]
  async fn update(&self, update: &ProductUpdate) -> InventoryResult<()> {
    let response = self
      .client
      .put(self.product_url(update.id))
      .json(update)
      .send()
      .await
      .map_err(request_error)?;
    Self::check(response).await.map(|_| ())
  }

  #[instrument(name = "api::delete", skip(self))]
  async fn delete(&self, id: i64) -> InventoryResult<()> {
    let response = self
      .client
      .delete(self.product_url(id))
      .send()
      .await
      .map_err(request_error)?;
    Self::check(response).await.map(|_| ())
  }
}
