// inventory/src/model/category.rs

//! The fixed set of product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
  Electronics,
  Clothing,
  Furniture,
  Groceries,
  Books,
}

impl Category {
  /// All categories in the order a form offers them.
  pub const ALL: [Category; 5] = [
    Category::Electronics,
    Category::Clothing,
    Category::Furniture,
    Category::Groceries,
    Category::Books,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Electronics => "Electronics",
      Category::Clothing => "Clothing",
      Category::Furniture => "Furniture",
      Category::Groceries => "Groceries",
      Category::Books => "Books",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
  type Err = UnknownCategory;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Category::ALL
      .into_iter()
      .find(|c| c.as_str() == s.trim())
      .ok_or_else(|| UnknownCategory(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_exact_names_only() {
    assert_eq!("Books".parse::<Category>(), Ok(Category::Books));
    assert_eq!(" Groceries ".parse::<Category>(), Ok(Category::Groceries));
    assert!("books".parse::<Category>().is_err());
    assert!("Toys".parse::<Category>().is_err());
  }

  #[test]
  fn serializes_as_plain_name() {
    let json = serde_json::to_string(&Category::Furniture).unwrap();
    assert_eq!(json, "\"Furniture\"");
  }
}
