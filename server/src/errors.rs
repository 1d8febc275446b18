// inventory_server/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use inventory::InventoryError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error(transparent)]
  Inventory(#[from] InventoryError),

  /// Request body could not be turned into a typed DTO.
  #[error("Invalid request body: {0}")]
  BadRequest(String),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Inventory(InventoryError::Validation(_)) => StatusCode::BAD_REQUEST,
      AppError::Inventory(InventoryError::Mismatch { .. }) => StatusCode::BAD_REQUEST,
      AppError::Inventory(InventoryError::NotFound(_)) => StatusCode::NOT_FOUND,
      AppError::Inventory(InventoryError::Storage { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
      AppError::Inventory(InventoryError::Transport(_)) => StatusCode::BAD_GATEWAY,
      AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      // Log the full error when it's turned into a response
      tracing::error!(application_error = %self, "Responding with server error");
    } else {
      tracing::warn!(application_error = %self, "Responding with client error");
    }
    let body = match self {
      AppError::Inventory(InventoryError::Storage { .. }) => json!({"error": "Database operation failed"}),
      AppError::Config(_) => json!({"error": "An internal error occurred"}),
      other => json!({"error": other.to_string()}),
    };
    HttpResponse::build(status).json(body)
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
