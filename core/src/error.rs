// inventory/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failure taxonomy shared by the store, the HTTP surface and the console.
///
/// Every variant is terminal: nothing in this workspace retries an operation
/// that produced one of these.
#[derive(Debug, Error)]
pub enum InventoryError {
  /// A write was rejected before touching storage (e.g. negative price on create).
  #[error("{0}")]
  Validation(String),

  /// Update request whose path id differs from the payload id.
  #[error("Product id mismatch: path id {path_id} does not match body id {body_id}")]
  Mismatch { path_id: i64, body_id: i64 },

  #[error("Product with ID {0} not found.")]
  NotFound(i64),

  /// Failure inside the persistence backend.
  #[error("Storage error: {source}")]
  Storage {
    #[source]
    source: AnyhowError,
  },

  /// Any network or server failure observed by the console.
  #[error("Transport error: {0}")]
  Transport(String),
}

impl InventoryError {
  pub fn storage(err: impl Into<AnyhowError>) -> Self {
    InventoryError::Storage { source: err.into() }
  }

  /// Whether the failure was caused by the caller's input rather than the backend.
  pub fn is_client_error(&self) -> bool {
    matches!(
      self,
      InventoryError::Validation(_) | InventoryError::Mismatch { .. } | InventoryError::NotFound(_)
    )
  }
}

pub type InventoryResult<T, E = InventoryError> = std::result::Result<T, E>;
