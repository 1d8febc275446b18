// src/lib.rs

//! Inventory: the product domain behind the inventory dashboard.
//!
//! This crate holds everything that does not depend on a transport:
//!  - The `Product` entity, its fixed `Category` set and the typed request bodies.
//!  - `ProductStore`, the CRUD rules (price check on create, id match on update,
//!    `lastUpdated` stamping) over a pluggable `ProductRepository`.
//!  - An in-memory repository for tests and database-less runs.
//!  - The console's list pipeline: an immutable `ViewState` that filters,
//!    sorts and paginates a fetched product set on every render.
//!  - `ProductForm`, the guarded state of the create/edit modal.

pub mod error;
pub mod form;
pub mod model;
pub mod query;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::error::{InventoryError, InventoryResult};
pub use crate::form::{FormError, FormField, FormMode, ProductForm, Submission};
pub use crate::model::{Category, Product, ProductDraft, ProductUpdate};
pub use crate::query::{PageView, SortDirection, SortField, SortSpec, ViewState, PAGE_SIZE};
pub use crate::store::{Clock, InMemoryProductRepository, ProductRepository, ProductStore, SystemClock};
