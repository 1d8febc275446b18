// inventory/src/model/mod.rs

//! Data structures for the product entity and its request bodies.

pub mod category;
pub mod product;

pub use category::{Category, UnknownCategory};
pub use product::{Product, ProductDraft, ProductUpdate};
