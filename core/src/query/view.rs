// inventory/src/query/view.rs

//! Immutable console view state and the filter → sort → paginate pipeline
//! recomputed from it on every render.

use crate::model::Product;
use crate::query::sort::{sort_products, SortDirection, SortField, SortSpec};

/// Rows per page.
pub const PAGE_SIZE: usize = 3;

/// Stock below this is flagged on the rendered row.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// The three pieces of session state the list is derived from.
///
/// Transitions consume the state and return the next one; nothing here is
/// mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
  search: String,
  sort: Option<SortSpec>,
  page: usize,
}

impl Default for ViewState {
  fn default() -> Self {
    Self {
      search: String::new(),
      sort: None,
      page: 1,
    }
  }
}

impl ViewState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn search(&self) -> &str {
    &self.search
  }

  pub fn sort(&self) -> Option<SortSpec> {
    self.sort
  }

  pub fn page(&self) -> usize {
    self.page
  }

  /// New search text; the view jumps back to the first page.
  pub fn with_search(self, text: impl Into<String>) -> Self {
    Self {
      search: text.into(),
      page: 1,
      ..self
    }
  }

  /// Same field while ascending flips to descending; anything else sorts
  /// ascending on `field`.
  pub fn toggle_sort(self, field: SortField) -> Self {
    let direction = match self.sort {
      Some(current) if current.field == field && current.direction == SortDirection::Ascending => {
        current.direction.reversed()
      }
      _ => SortDirection::Ascending,
    };
    Self {
      sort: Some(SortSpec { field, direction }),
      ..self
    }
  }

  /// Requests outside `[1, total_pages]` leave the state unchanged.
  pub fn go_to_page(self, page: usize, total_pages: usize) -> Self {
    if page < 1 || page > total_pages {
      return self;
    }
    Self { page, ..self }
  }

  /// Pulls the page back inside `[1, total_pages]`, e.g. after rows were deleted.
  pub fn clamped(self, total_pages: usize) -> Self {
    let page = self.page.clamp(1, total_pages.max(1));
    Self { page, ..self }
  }

  /// Filtered and sorted rows, before pagination.
  pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
    let mut rows = filter_by_name(products, &self.search);
    sort_products(&mut rows, self.sort);
    rows
  }

  pub fn render(&self, products: &[Product]) -> PageView {
    let visible = self.visible(products);
    let total_pages = total_pages(visible.len());
    let page = self.page.clamp(1, total_pages.max(1));
    let rows = paginate(&visible, page)
      .iter()
      .map(|p| Row {
        low_stock: p.stock_quantity < LOW_STOCK_THRESHOLD,
        product: (*p).clone(),
      })
      .collect();

    PageView {
      rows,
      page,
      total_pages,
      total_matches: visible.len(),
      sort: self.sort,
    }
  }
}

/// Case-insensitive substring match on the name. Empty text keeps everything.
pub fn filter_by_name<'a>(products: &'a [Product], text: &str) -> Vec<&'a Product> {
  let needle = text.to_lowercase();
  products
    .iter()
    .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
    .collect()
}

pub fn total_pages(count: usize) -> usize {
  count.div_ceil(PAGE_SIZE)
}

/// Slice for 1-based `page`; empty when the page is past the end.
pub fn paginate<'s, 'a>(rows: &'s [&'a Product], page: usize) -> &'s [&'a Product] {
  let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
  if start >= rows.len() {
    return &[];
  }
  let end = (start + PAGE_SIZE).min(rows.len());
  &rows[start..end]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
  pub product: Product,
  pub low_stock: bool,
}

/// One rendered page of the product table.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
  pub rows: Vec<Row>,
  pub page: usize,
  pub total_pages: usize,
  pub total_matches: usize,
  pub sort: Option<SortSpec>,
}

impl PageView {
  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn has_prev(&self) -> bool {
    self.page > 1
  }

  pub fn has_next(&self) -> bool {
    self.page < self.total_pages
  }

  pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
    1..=self.total_pages
  }

  /// Arrow for `field` if it is the active sort column.
  pub fn indicator(&self, field: SortField) -> Option<&'static str> {
    self
      .sort
      .filter(|spec| spec.field == field)
      .map(|spec| spec.direction.indicator())
  }

  pub fn ids(&self) -> Vec<i64> {
    self.rows.iter().map(|r| r.product.id).collect()
  }
}
