// inventory/src/query/mod.rs

//! Client-side list query: filter by name, sort by a column, paginate.

pub mod sort;
pub mod view;

pub use sort::{sort_products, SortDirection, SortField, SortSpec, UnknownSortField};
pub use view::{filter_by_name, paginate, total_pages, PageView, Row, ViewState, LOW_STOCK_THRESHOLD, PAGE_SIZE};
