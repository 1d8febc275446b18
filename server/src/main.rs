// inventory_server/src/main.rs

// Declare modules for the application
mod config;
mod db;
mod errors;
mod models;
mod state;
mod web;

use crate::config::AppConfig;
use crate::db::PgProductRepository;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use inventory::{InMemoryProductRepository, ProductRepository};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
  match &config.database_url {
    Some(url) => {
      let repo = PgProductRepository::connect(url, config.db_max_connections)
        .await
        .context("Failed to connect to the database")?;
      if config.run_migrations {
        repo.migrate().await.context("Failed to run database migrations")?;
      }
      Ok(Arc::new(repo))
    }
    None => {
      tracing::warn!("DATABASE_URL not set; products are kept in memory and lost on restart.");
      Ok(Arc::new(InMemoryProductRepository::new()))
    }
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting inventory server...");

  let app_config = Arc::new(AppConfig::from_env()?);
  let repository = build_repository(&app_config).await?;
  let app_state = AppState::new(repository, app_config.clone());

  if app_config.seed_db {
    db::seed_if_empty(&app_state.store)
      .await
      .context("Failed to seed sample products")?;
  }

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await?;

  Ok(())
}
