// inventory_server/src/state.rs
use crate::config::AppConfig;
use inventory::{ProductRepository, ProductStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: ProductStore,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(repository: Arc<dyn ProductRepository>, config: Arc<AppConfig>) -> Self {
    Self {
      store: ProductStore::new(repository),
      config,
    }
  }
}
