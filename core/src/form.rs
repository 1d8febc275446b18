// inventory/src/form.rs

//! State of the modal create/edit form.
//!
//! The form guards each field as it is edited: a rejected edit reports a
//! [`FormError`] and leaves the form exactly as it was, so a negative number
//! can never reach a submit.

use crate::model::{Category, Product, ProductDraft, ProductUpdate};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
  Create,
  Edit { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
  Name,
  Category,
  Price,
  StockQuantity,
}

impl FormField {
  pub fn as_str(&self) -> &'static str {
    match self {
      FormField::Name => "name",
      FormField::Category => "category",
      FormField::Price => "price",
      FormField::StockQuantity => "stockQuantity",
    }
  }
}

impl fmt::Display for FormField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad(self.as_str())
  }
}

impl FromStr for FormField {
  type Err = FormError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "name" => Ok(FormField::Name),
      "category" => Ok(FormField::Category),
      "price" => Ok(FormField::Price),
      "stock" | "stockquantity" | "stock_quantity" => Ok(FormField::StockQuantity),
      _ => Err(FormError::UnknownField(s.to_string())),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
  #[error("{field} cannot be negative.")]
  Negative { field: FormField },

  #[error("{field} must be a number, got '{value}'.")]
  NotANumber { field: FormField, value: String },

  #[error("Unknown category '{0}'.")]
  UnknownCategory(String),

  #[error("Unknown form field '{0}'.")]
  UnknownField(String),

  #[error("{0} is required.")]
  Required(FormField),
}

/// What a submit would send to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
  Create(ProductDraft),
  Update(ProductUpdate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
  mode: FormMode,
  name: String,
  category: Option<Category>,
  price: Decimal,
  stock_quantity: i32,
}

impl ProductForm {
  /// Empty form, category pre-filled with the last one the user picked.
  pub fn create(last_category: Option<Category>) -> Self {
    Self {
      mode: FormMode::Create,
      name: String::new(),
      category: last_category,
      price: Decimal::ZERO,
      stock_quantity: 0,
    }
  }

  pub fn edit(product: &Product) -> Self {
    let draft = product.to_draft();
    Self {
      mode: FormMode::Edit { id: product.id },
      name: draft.name,
      category: Some(draft.category),
      price: draft.price,
      stock_quantity: draft.stock_quantity,
    }
  }

  pub fn mode(&self) -> FormMode {
    self.mode
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn category(&self) -> Option<Category> {
    self.category
  }

  pub fn price(&self) -> Decimal {
    self.price
  }

  pub fn stock_quantity(&self) -> i32 {
    self.stock_quantity
  }

  /// Verb used in the confirmation prompt and the success notification.
  pub fn action(&self) -> &'static str {
    match self.mode {
      FormMode::Create => "add",
      FormMode::Edit { .. } => "update",
    }
  }

  pub fn title(&self) -> &'static str {
    match self.mode {
      FormMode::Create => "Add Product",
      FormMode::Edit { .. } => "Edit Product",
    }
  }

  /// Applies one edit from raw input. On error nothing changes.
  ///
  /// An empty numeric input counts as zero, like an emptied number box.
  pub fn set_field(&mut self, field: FormField, raw: &str) -> Result<(), FormError> {
    match field {
      FormField::Name => self.name = raw.to_string(),
      FormField::Category => {
        let category = raw
          .parse::<Category>()
          .map_err(|_| FormError::UnknownCategory(raw.to_string()))?;
        self.category = Some(category);
      }
      FormField::Price => {
        let price = parse_number::<Decimal>(field, raw)?;
        if price < Decimal::ZERO {
          return Err(FormError::Negative { field });
        }
        self.price = price;
      }
      FormField::StockQuantity => {
        let stock = parse_number::<i32>(field, raw)?;
        if stock < 0 {
          return Err(FormError::Negative { field });
        }
        self.stock_quantity = stock;
      }
    }
    Ok(())
  }

  /// Checks the required fields and builds the request body.
  pub fn submission(&self) -> Result<Submission, FormError> {
    if self.name.trim().is_empty() {
      return Err(FormError::Required(FormField::Name));
    }
    let category = self.category.ok_or(FormError::Required(FormField::Category))?;
    let draft = ProductDraft {
      name: self.name.clone(),
      category,
      price: self.price,
      stock_quantity: self.stock_quantity,
    };
    Ok(match self.mode {
      FormMode::Create => Submission::Create(draft),
      FormMode::Edit { id } => Submission::Update(ProductUpdate::new(id, draft)),
    })
  }
}

fn parse_number<T: FromStr + Default>(field: FormField, raw: &str) -> Result<T, FormError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(T::default());
  }
  trimmed.parse::<T>().map_err(|_| FormError::NotANumber {
    field,
    value: raw.to_string(),
  })
}
