// inventory_console/src/preferences.rs

//! The one piece of console state that outlives a session: the category the
//! user picked last, offered as the default on the next create form.

use inventory::Category;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PreferenceError {
  #[error("Failed to access preferences file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to encode preferences: {0}")]
  Encode(#[from] serde_json::Error),
}

pub trait PreferenceStore: Send + Sync {
  fn last_category(&self) -> Option<Category>;
  fn set_last_category(&self, category: Category) -> Result<(), PreferenceError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Preferences {
  #[serde(default)]
  last_category: Option<Category>,
}

/// Preferences kept as a small JSON document on disk.
///
/// A missing or unreadable file simply means "no preference yet".
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
  path: PathBuf,
}

impl FilePreferenceStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn load(&self) -> Preferences {
    match std::fs::read_to_string(&self.path) {
      Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
        debug!(path = %self.path.display(), error = %e, "Ignoring unreadable preferences file.");
        Preferences::default()
      }),
      Err(_) => Preferences::default(),
    }
  }
}

impl PreferenceStore for FilePreferenceStore {
  fn last_category(&self) -> Option<Category> {
    self.load().last_category
  }

  fn set_last_category(&self, category: Category) -> Result<(), PreferenceError> {
    let mut prefs = self.load();
    prefs.last_category = Some(category);
    let encoded = serde_json::to_string_pretty(&prefs)?;
    std::fs::write(&self.path, encoded).map_err(|source| PreferenceError::Io {
      path: self.path.clone(),
      source,
    })
  }
}

/// Session-only preferences, for tests and `--no-persist` runs.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
  last_category: Mutex<Option<Category>>,
}

impl MemoryPreferenceStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_last_category(category: Category) -> Self {
    Self {
      last_category: Mutex::new(Some(category)),
    }
  }
}

impl PreferenceStore for MemoryPreferenceStore {
  fn last_category(&self) -> Option<Category> {
    *self.last_category.lock()
  }

  fn set_last_category(&self, category: Category) -> Result<(), PreferenceError> {
    *self.last_category.lock() = Some(category);
    Ok(())
  }
}
