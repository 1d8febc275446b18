// inventory_server/src/models/mod.rs

//! Database row types and their conversion into domain products.

pub mod product;

pub use product::ProductRow;
