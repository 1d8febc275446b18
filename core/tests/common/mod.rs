// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use chrono::{TimeZone, Utc};
use inventory::{Category, InMemoryProductRepository, Product, ProductDraft, ProductStore};
use inventory::store::FixedClock;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::Level;

// --- Fixture builders ---
pub fn dec(s: &str) -> Decimal {
  s.parse().expect("valid decimal literal")
}

pub fn draft(name: &str, category: Category, price: &str, stock: i32) -> ProductDraft {
  ProductDraft {
    name: name.to_string(),
    category,
    price: dec(price),
    stock_quantity: stock,
  }
}

pub fn product(id: i64, name: &str, category: Category, price: &str, stock: i32) -> Product {
  Product::from_draft(id, draft(name, category, price, stock), fixed_instant())
}

pub fn fixed_instant() -> chrono::DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Seven products with distinct names, prices and stock levels.
pub fn seven_products() -> Vec<Product> {
  vec![
    product(1, "Laptop", Category::Electronics, "899.99", 4),
    product(2, "T-Shirt", Category::Clothing, "12.50", 40),
    product(3, "Desk Lamp", Category::Furniture, "25", 7),
    product(4, "Apples", Category::Groceries, "3.20", 120),
    product(5, "Rust Book", Category::Books, "39.95", 2),
    product(6, "Headphones", Category::Electronics, "59", 15),
    product(7, "Bookshelf", Category::Furniture, "120", 3),
  ]
}

/// A store over a fresh in-memory repository; the repository handle is
/// returned too so tests can inspect storage directly.
pub fn memory_store() -> (ProductStore, Arc<InMemoryProductRepository>) {
  let repo = Arc::new(InMemoryProductRepository::new());
  (ProductStore::new(repo.clone()), repo)
}

pub fn fixed_clock_store(products: Vec<Product>) -> (ProductStore, Arc<InMemoryProductRepository>) {
  let repo = Arc::new(InMemoryProductRepository::with_products(products));
  let store = ProductStore::with_clock(repo.clone(), Arc::new(FixedClock(fixed_instant())));
  (store, repo)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
