// inventory_server/src/db/mod.rs

//! Storage backends and startup helpers.

pub mod postgres;
pub mod seed;

pub use postgres::PgProductRepository;
pub use seed::seed_if_empty;
