// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use chrono::Utc;
use inventory::{
  Category, InMemoryProductRepository, InventoryError, InventoryResult, Product, ProductDraft, ProductStore,
  ProductUpdate,
};
use inventory_console::{
  Confirmer, MemoryPreferenceStore, Notification, NotificationKind, Notifier, ProductApi, ProductConsole, Prompt,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Fake server: a real ProductStore behind the ProductApi seam ---
pub struct FakeApi {
  store: ProductStore,
  pub repo: Arc<InMemoryProductRepository>,
  pub list_calls: AtomicUsize,
  pub mutation_calls: AtomicUsize,
  pub fail_lists: AtomicBool,
  pub fail_mutations: AtomicBool,
}

impl FakeApi {
  pub fn with_products(products: Vec<Product>) -> Arc<Self> {
    let repo = Arc::new(InMemoryProductRepository::with_products(products));
    Arc::new(Self {
      store: ProductStore::new(repo.clone()),
      repo,
      list_calls: AtomicUsize::new(0),
      mutation_calls: AtomicUsize::new(0),
      fail_lists: AtomicBool::new(false),
      fail_mutations: AtomicBool::new(false),
    })
  }

  pub fn lists(&self) -> usize {
    self.list_calls.load(Ordering::SeqCst)
  }

  pub fn mutations(&self) -> usize {
    self.mutation_calls.load(Ordering::SeqCst)
  }

  fn mutation_gate(&self) -> InventoryResult<()> {
    self.mutation_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_mutations.load(Ordering::SeqCst) {
      return Err(InventoryError::Transport("connection refused".to_string()));
    }
    Ok(())
  }
}

fn as_transport(err: InventoryError) -> InventoryError {
  InventoryError::Transport(err.to_string())
}

#[async_trait]
impl ProductApi for FakeApi {
  async fn list(&self) -> InventoryResult<Vec<Product>> {
    self.list_calls.fetch_add(1, Ordering::SeqCst);
    if self.fail_lists.load(Ordering::SeqCst) {
      return Err(InventoryError::Transport("connection refused".to_string()));
    }
    self.store.list().await.map_err(as_transport)
  }

  async fn create(&self, draft: &ProductDraft) -> InventoryResult<Product> {
    self.mutation_gate()?;
    self.store.create(draft.clone()).await.map_err(as_transport)
  }

  async fn update(&self, update: &ProductUpdate) -> InventoryResult<()> {
    self.mutation_gate()?;
    self.store.update(update.id, update.clone()).await.map(|_| ()).map_err(as_transport)
  }

  async fn delete(&self, id: i64) -> InventoryResult<()> {
    self.mutation_gate()?;
    self.store.delete(id).await.map_err(as_transport)
  }
}

// --- Scripted confirmations ---
#[derive(Default)]
pub struct ScriptedConfirmer {
  answers: Mutex<VecDeque<bool>>,
  pub prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedConfirmer {
  pub fn answering(answers: &[bool]) -> Arc<Self> {
    Arc::new(Self {
      answers: Mutex::new(answers.iter().copied().collect()),
      prompts: Mutex::new(Vec::new()),
    })
  }

  pub fn titles(&self) -> Vec<String> {
    self.prompts.lock().iter().map(|p| p.title.clone()).collect()
  }
}

impl Confirmer for ScriptedConfirmer {
  fn confirm(&self, prompt: &Prompt) -> bool {
    self.prompts.lock().push(prompt.clone());
    // Running out of scripted answers counts as "no".
    self.answers.lock().pop_front().unwrap_or(false)
  }
}

// --- Recorded notifications ---
#[derive(Default)]
pub struct RecordingNotifier {
  pub seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
  pub fn new() -> Arc<Self> {
    Arc::new(Self::default())
  }

  pub fn messages(&self) -> Vec<String> {
    self.seen.lock().iter().map(|n| n.message.clone()).collect()
  }

  pub fn errors(&self) -> usize {
    self.seen.lock().iter().filter(|n| n.kind == NotificationKind::Error).count()
  }
}

impl Notifier for RecordingNotifier {
  fn notify(&self, notification: Notification) {
    self.seen.lock().push(notification);
  }
}

// --- Fixtures ---
pub fn product(id: i64, name: &str, category: Category, cents: i64, stock: i32) -> Product {
  Product::from_draft(
    id,
    ProductDraft {
      name: name.to_string(),
      category,
      price: Decimal::new(cents, 2),
      stock_quantity: stock,
    },
    Utc::now(),
  )
}

pub fn seven_products() -> Vec<Product> {
  vec![
    product(1, "Laptop", Category::Electronics, 89999, 4),
    product(2, "T-Shirt", Category::Clothing, 1250, 40),
    product(3, "Desk Lamp", Category::Furniture, 2500, 7),
    product(4, "Apples", Category::Groceries, 320, 120),
    product(5, "Rust Book", Category::Books, 3995, 2),
    product(6, "Headphones", Category::Electronics, 5900, 15),
    product(7, "Bookshelf", Category::Furniture, 12000, 3),
  ]
}

pub struct Harness {
  pub api: Arc<FakeApi>,
  pub confirmer: Arc<ScriptedConfirmer>,
  pub notifier: Arc<RecordingNotifier>,
  pub preferences: Arc<MemoryPreferenceStore>,
  pub console: ProductConsole,
}

pub fn harness(products: Vec<Product>, answers: &[bool]) -> Harness {
  harness_with_prefs(products, answers, Arc::new(MemoryPreferenceStore::new()))
}

pub fn harness_with_prefs(products: Vec<Product>, answers: &[bool], preferences: Arc<MemoryPreferenceStore>) -> Harness {
  let api = FakeApi::with_products(products);
  let confirmer = ScriptedConfirmer::answering(answers);
  let notifier = RecordingNotifier::new();
  let console = ProductConsole::new(api.clone(), confirmer.clone(), notifier.clone(), preferences.clone());
  Harness {
    api,
    confirmer,
    notifier,
    preferences,
    console,
  }
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
