// inventory/src/query/sort.rs

use crate::model::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Columns the console can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
  Name,
  Category,
  Price,
  StockQuantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
  #[default]
  Ascending,
  Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
  pub field: SortField,
  pub direction: SortDirection,
}

impl SortField {
  pub const ALL: [SortField; 4] = [
    SortField::Name,
    SortField::Category,
    SortField::Price,
    SortField::StockQuantity,
  ];

  /// Wire/JSON name of the field.
  pub fn as_str(&self) -> &'static str {
    match self {
      SortField::Name => "name",
      SortField::Category => "category",
      SortField::Price => "price",
      SortField::StockQuantity => "stockQuantity",
    }
  }

  /// Raw comparison of one field: text is lexicographic, price and stock numeric.
  pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
    match self {
      SortField::Name => a.name.cmp(&b.name),
      SortField::Category => a.category.as_str().cmp(b.category.as_str()),
      SortField::Price => a.price.cmp(&b.price),
      SortField::StockQuantity => a.stock_quantity.cmp(&b.stock_quantity),
    }
  }
}

impl fmt::Display for SortField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown sort field '{0}' (expected one of: name, category, price, stockQuantity)")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
  type Err = UnknownSortField;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let wanted = s.trim();
    if wanted.eq_ignore_ascii_case("stock") || wanted.eq_ignore_ascii_case("stock_quantity") {
      return Ok(SortField::StockQuantity);
    }
    SortField::ALL
      .into_iter()
      .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| UnknownSortField(s.to_string()))
  }
}

impl SortDirection {
  pub fn reversed(self) -> Self {
    match self {
      SortDirection::Ascending => SortDirection::Descending,
      SortDirection::Descending => SortDirection::Ascending,
    }
  }

  /// Header arrow shown next to the active sort column.
  pub fn indicator(&self) -> &'static str {
    match self {
      SortDirection::Ascending => "▲",
      SortDirection::Descending => "▼",
    }
  }
}

impl SortSpec {
  pub fn ascending(field: SortField) -> Self {
    SortSpec {
      field,
      direction: SortDirection::Ascending,
    }
  }

  pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
    let ord = self.field.compare(a, b);
    match self.direction {
      SortDirection::Ascending => ord,
      SortDirection::Descending => ord.reverse(),
    }
  }
}

/// Stable sort; equal keys keep their relative order. `None` leaves the slice untouched.
pub fn sort_products(products: &mut [&Product], sort: Option<SortSpec>) {
  if let Some(spec) = sort {
    products.sort_by(|a, b| spec.compare(a, b));
  }
}
