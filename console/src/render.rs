// inventory_console/src/render.rs

//! Plain-text rendering of the product table, pager and form.

use inventory::query::SortField;
use inventory::{Category, FormMode, PageView, ProductForm};
use std::fmt::Write as _;

const CURRENCY: &str = "৳";

fn header(view: &PageView, label: &str, field: SortField) -> String {
  match view.indicator(field) {
    Some(arrow) => format!("{} {}", label, arrow),
    None => label.to_string(),
  }
}

pub fn render_table(view: &PageView) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "{:<5} {:<28} {:<13} {:>12} {:>9}",
    "ID",
    header(view, "Name", SortField::Name),
    header(view, "Category", SortField::Category),
    header(view, "Price", SortField::Price),
    header(view, "Stock", SortField::StockQuantity),
  );
  let _ = writeln!(out, "{}", "-".repeat(71));

  if view.is_empty() {
    let _ = writeln!(out, "{:^71}", "No products found.");
  }
  for row in &view.rows {
    let p = &row.product;
    let stock = if row.low_stock {
      format!("{} !", p.stock_quantity)
    } else {
      p.stock_quantity.to_string()
    };
    let _ = writeln!(
      out,
      "{:<5} {:<28} {:<13} {:>12} {:>9}",
      p.id,
      truncate(&p.name, 28),
      p.category,
      format!("{} {}", CURRENCY, p.price),
      stock,
    );
  }
  out.push_str(&render_pager(view));
  out
}

/// `< Prev  [1] 2 3  Next >`, with unavailable arrows dimmed to dashes.
pub fn render_pager(view: &PageView) -> String {
  let prev = if view.has_prev() { "< Prev" } else { "- Prev" };
  let next = if view.has_next() { "Next >" } else { "Next -" };
  let pages: Vec<String> = view
    .page_numbers()
    .map(|n| if n == view.page { format!("[{}]", n) } else { n.to_string() })
    .collect();
  format!("{}  {}  {}\n", prev, pages.join(" "), next)
}

pub fn render_form(form: &ProductForm) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "== {} ==", form.title());
  if let FormMode::Edit { id } = form.mode() {
    let _ = writeln!(out, "  id:            {}", id);
  }
  let _ = writeln!(out, "  name:          {}", form.name());
  let category = form.category().map(|c| c.to_string()).unwrap_or_else(|| "(select a category)".to_string());
  let _ = writeln!(out, "  category:      {}", category);
  let _ = writeln!(out, "  price:         {}", form.price());
  let _ = writeln!(out, "  stockQuantity: {}", form.stock_quantity());
  let options: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
  let _ = writeln!(out, "  categories:    {}", options.join(", "));
  out
}

fn truncate(text: &str, width: usize) -> String {
  if text.chars().count() <= width {
    return text.to_string();
  }
  let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
  cut.push('…');
  cut
}
