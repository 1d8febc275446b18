// tests/shell_tests.rs
mod common;

use common::*;
use inventory_console::{Flow, Shell};
use serial_test::serial;

async fn run(shell: &mut Shell, line: &str) -> (Flow, String) {
  let mut out = Vec::new();
  let flow = shell.handle_line(line, &mut out).await.unwrap();
  (flow, String::from_utf8(out).unwrap())
}

#[tokio::test]
#[serial]
async fn start_prints_first_page() {
  setup_tracing();
  let h = harness(seven_products(), &[]);
  let mut shell = Shell::new(h.console);

  let mut out = Vec::new();
  shell.start(&mut out).await.unwrap();
  let text = String::from_utf8(out).unwrap();

  assert!(text.starts_with("Loading products..."));
  assert!(text.contains("Laptop"));
  assert!(!text.contains("Apples"));
  assert!(text.contains("- Prev  [1] 2 3  Next >"));
}

#[tokio::test]
#[serial]
async fn sort_and_search_commands_redraw_table() {
  setup_tracing();
  let h = harness(seven_products(), &[]);
  let mut shell = Shell::new(h.console);
  shell.start(&mut Vec::new()).await.unwrap();

  let (flow, text) = run(&mut shell, "sort price").await;
  assert_eq!(flow, Flow::Continue);
  assert!(text.contains("Price ▲"));
  assert!(text.contains("Apples"));

  let (_, text) = run(&mut shell, "sort price").await;
  assert!(text.contains("Price ▼"));
  assert!(text.contains("Laptop"));

  let (_, text) = run(&mut shell, "search zzz").await;
  assert!(text.contains("No products found."));
}

#[tokio::test]
#[serial]
async fn form_commands_round_through_the_console() {
  setup_tracing();
  let h = harness(seven_products(), &[true]);
  let api = h.api.clone();
  let mut shell = Shell::new(h.console);
  shell.start(&mut Vec::new()).await.unwrap();

  let (_, text) = run(&mut shell, "edit 5").await;
  assert!(text.contains("== Edit Product =="));
  assert!(text.contains("Rust Book"));

  // Rejected value: nothing printed by the shell, the notifier reports it.
  let (_, text) = run(&mut shell, "set price -2").await;
  assert!(text.is_empty());
  assert_eq!(shell.console().form().unwrap().price().to_string(), "39.95");

  run(&mut shell, "set stock 9").await;
  let (_, text) = run(&mut shell, "save").await;
  assert!(shell.console().form().is_none());
  assert!(text.contains("Laptop"));
  assert_eq!(api.repo.get(5).unwrap().stock_quantity, 9);
}

#[tokio::test]
#[serial]
async fn bad_input_and_quit() {
  setup_tracing();
  let h = harness(Vec::new(), &[]);
  let mut shell = Shell::new(h.console);

  let (flow, text) = run(&mut shell, "fly away").await;
  assert_eq!(flow, Flow::Continue);
  assert!(text.contains("Unknown command 'fly'"));

  let (_, text) = run(&mut shell, "save").await;
  assert!(text.contains("No product form is open."));

  let (flow, _) = run(&mut shell, "quit").await;
  assert_eq!(flow, Flow::Quit);
}

#[tokio::test]
#[serial]
async fn loading_line_is_printed_once_before_the_first_table() {
  setup_tracing();
  let h = harness(seven_products(), &[]);
  let mut shell = Shell::new(h.console);

  // Nothing fetched yet: an empty table, not a loading line.
  let (_, text) = run(&mut shell, "list").await;
  assert!(text.contains("No products found."));
  assert!(!text.contains("Loading"));

  let mut out = Vec::new();
  shell.start(&mut out).await.unwrap();
  let text = String::from_utf8(out).unwrap();
  assert_eq!(text.matches("Loading products...").count(), 1);
  assert!(!shell.console().is_loading());

  let (_, text) = run(&mut shell, "refresh").await;
  assert!(!text.contains("Loading"));
  assert!(text.contains("Laptop"));
}
