// inventory_server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use inventory::{ProductDraft, ProductUpdate};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.store.list().await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::create_product", skip(app_state, body), fields(name = %body.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<ProductDraft>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.store.create(body.into_inner()).await?;
  info!("Product {} created.", product.id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<ProductUpdate>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.store.update(product_id, body.into_inner()).await?;
  info!("Product {} updated.", product_id);
  Ok(HttpResponse::NoContent().finish())
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  app_state.store.delete(product_id).await?;
  info!("Product {} deleted.", product_id);
  Ok(HttpResponse::NoContent().finish())
}
