// inventory/src/store/mod.rs

pub mod clock;
pub mod memory;
pub mod repository;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use memory::InMemoryProductRepository;
pub use repository::ProductRepository;
pub use service::{ProductStore, NEGATIVE_PRICE_MESSAGE};
