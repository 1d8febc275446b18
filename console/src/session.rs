// inventory_console/src/session.rs

//! `ProductConsole`: the session controller behind the product list screen.
//!
//! The console keeps the last fetched product set, an immutable
//! [`ViewState`], an optional open form and a loading flag. It never edits its
//! product set locally: every successful mutation is followed by a re-fetch,
//! and every failure becomes a one-shot notification that leaves the session
//! as it was.

use crate::api::ProductApi;
use crate::ports::{Confirmer, Notification, Notifier, Prompt};
use crate::preferences::PreferenceStore;
use inventory::{
  FormError, FormField, PageView, Product, ProductForm, SortField, Submission, ViewState,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
  #[error("No product form is open.")]
  NoOpenForm,

  #[error("Product {0} is not in the current list.")]
  UnknownProduct(i64),

  #[error(transparent)]
  Form(#[from] FormError),
}

/// Result of a confirmed-or-declined mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// The store accepted the change and the list was re-fetched.
  Applied,
  /// The user answered "no"; nothing was sent.
  Declined,
  /// The store call failed; a notification was shown and state is unchanged.
  Failed,
}

pub struct ProductConsole {
  api: Arc<dyn ProductApi>,
  confirmer: Arc<dyn Confirmer>,
  notifier: Arc<dyn Notifier>,
  preferences: Arc<dyn PreferenceStore>,
  products: Vec<Product>,
  view: ViewState,
  form: Option<ProductForm>,
  loading: bool,
}

impl ProductConsole {
  pub fn new(
    api: Arc<dyn ProductApi>,
    confirmer: Arc<dyn Confirmer>,
    notifier: Arc<dyn Notifier>,
    preferences: Arc<dyn PreferenceStore>,
  ) -> Self {
    Self {
      api,
      confirmer,
      notifier,
      preferences,
      products: Vec::new(),
      view: ViewState::new(),
      form: None,
      loading: false,
    }
  }

  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn view(&self) -> &ViewState {
    &self.view
  }

  pub fn form(&self) -> Option<&ProductForm> {
    self.form.as_ref()
  }

  /// True only while `refresh` awaits the server. `refresh` holds `&mut self`
  /// throughout, so callers see `false` once it returns; the shell prints its
  /// loading line before the call instead.
  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn render(&self) -> PageView {
    self.view.render(&self.products)
  }

  /// Fetches the canonical list. On failure the previous list is kept.
  pub async fn refresh(&mut self) -> bool {
    self.loading = true;
    let fetched = self.api.list().await;
    self.loading = false;

    match fetched {
      Ok(products) => {
        debug!("Loaded {} products.", products.len());
        self.products = products;
        let total_pages = self.render().total_pages;
        self.view = std::mem::take(&mut self.view).clamped(total_pages);
        true
      }
      Err(e) => {
        warn!(error = %e, "Product list fetch failed.");
        self.notifier.notify(Notification::error("Error", "Failed to load products"));
        false
      }
    }
  }

  // --- View-state transitions ---

  pub fn search(&mut self, text: impl Into<String>) {
    self.view = std::mem::take(&mut self.view).with_search(text);
  }

  pub fn sort_by(&mut self, field: SortField) {
    self.view = std::mem::take(&mut self.view).toggle_sort(field);
  }

  /// Out-of-range pages are ignored.
  pub fn go_to_page(&mut self, page: usize) {
    let total_pages = self.render().total_pages;
    self.view = std::mem::take(&mut self.view).go_to_page(page, total_pages);
  }

  pub fn next_page(&mut self) {
    let page = self.view.page() + 1;
    self.go_to_page(page);
  }

  pub fn prev_page(&mut self) {
    let page = self.view.page().saturating_sub(1);
    self.go_to_page(page);
  }

  // --- Form ---

  pub fn open_create(&mut self) {
    self.form = Some(ProductForm::create(self.preferences.last_category()));
  }

  pub fn open_edit(&mut self, id: i64) -> Result<(), ConsoleError> {
    let product = self
      .products
      .iter()
      .find(|p| p.id == id)
      .ok_or(ConsoleError::UnknownProduct(id))?;
    self.form = Some(ProductForm::edit(product));
    Ok(())
  }

  /// Discards the open form and any unsaved edits, then re-fetches.
  pub async fn close_form(&mut self) {
    if self.form.take().is_some() {
      self.refresh().await;
    }
  }

  /// Applies one field edit. A rejected value is reported to the user and the
  /// form keeps its previous contents.
  pub fn edit_field(&mut self, field: FormField, raw: &str) -> Result<(), ConsoleError> {
    let form = self.form.as_mut().ok_or(ConsoleError::NoOpenForm)?;
    if let Err(e) = form.set_field(field, raw) {
      self.notifier.notify(Notification::error("Error", e.to_string()));
      return Err(e.into());
    }

    if field == FormField::Category {
      if let Some(category) = form.category() {
        if let Err(e) = self.preferences.set_last_category(category) {
          warn!(error = %e, "Could not remember last category.");
        }
      }
    }
    Ok(())
  }

  /// Confirms, then sends the open form to the store.
  ///
  /// On success the form closes and the list is re-fetched. On failure the
  /// form stays open with its edits intact.
  pub async fn submit(&mut self) -> Result<Outcome, ConsoleError> {
    let form = self.form.as_ref().ok_or(ConsoleError::NoOpenForm)?;
    let submission = match form.submission() {
      Ok(submission) => submission,
      Err(e) => {
        self.notifier.notify(Notification::error("Error", e.to_string()));
        return Err(e.into());
      }
    };

    let action = form.action();
    let prompt = Prompt::new(
      format!("Confirm {}", action),
      format!("Are you sure you want to {} this product?", action),
    );
    if !self.confirmer.confirm(&prompt) {
      return Ok(Outcome::Declined);
    }

    let result = match &submission {
      Submission::Create(draft) => self.api.create(draft).await.map(|created| created.id),
      Submission::Update(update) => self.api.update(update).await.map(|_| update.id),
    };

    match result {
      Ok(id) => {
        info!(product_id = id, action, "Product saved.");
        let (title, message) = match submission {
          Submission::Create(_) => ("Added!", "Product has been added."),
          Submission::Update(_) => ("Updated!", "Product has been updated."),
        };
        self.notifier.notify(Notification::success(title, message));
        self.form = None;
        self.refresh().await;
        Ok(Outcome::Applied)
      }
      Err(e) => {
        warn!(error = %e, action, "Product save failed.");
        self.notifier.notify(Notification::error("Error", "Operation failed"));
        Ok(Outcome::Failed)
      }
    }
  }

  /// Confirms, then deletes product `id` and re-fetches.
  pub async fn delete(&mut self, id: i64) -> Outcome {
    let prompt = Prompt::new("Are you sure?", "This action cannot be undone.");
    if !self.confirmer.confirm(&prompt) {
      return Outcome::Declined;
    }

    match self.api.delete(id).await {
      Ok(()) => {
        info!(product_id = id, "Product deleted.");
        self.notifier.notify(Notification::success("Deleted!", "Product has been deleted."));
        self.refresh().await;
        Outcome::Applied
      }
      Err(e) => {
        warn!(error = %e, product_id = id, "Product delete failed.");
        self.notifier.notify(Notification::error("Error", "Failed to delete product"));
        Outcome::Failed
      }
    }
  }
}
