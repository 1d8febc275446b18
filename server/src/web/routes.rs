// inventory_server/src/web/routes.rs

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::handlers::product_handlers;
use actix_web::{web, HttpResponse};

// Reports liveness and which storage backend the process is running on.
async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let storage = if app_state.config.database_url.is_some() {
    "postgres"
  } else {
    "memory"
  };
  HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "storage": storage }))
}

/// Malformed or mistyped JSON bodies become a 400 with the same `{"error": ...}`
/// shape as every other failure.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

// This function is called in `main.rs` (and the handler tests) to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route(
          "/{product_id}",
          web::put().to(product_handlers::update_product_handler),
        )
        .route(
          "/{product_id}",
          web::delete().to(product_handlers::delete_product_handler),
        ),
    );
}
