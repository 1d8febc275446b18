use chrono::Utc;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use inventory::{Category, InMemoryProductRepository, Product, ProductDraft, ProductStore, SortField, ViewState};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::runtime::Runtime; // To run async code within Criterion

// --- Fixtures ---
fn make_products(count: usize) -> Vec<Product> {
  (0..count)
    .map(|i| {
      let draft = ProductDraft {
        name: format!("Product {:05}", (i * 7919) % count.max(1)),
        category: Category::ALL[i % Category::ALL.len()],
        price: Decimal::new(((i * 37) % 10_000) as i64, 2),
        stock_quantity: (i % 50) as i32,
      };
      Product::from_draft(i as i64 + 1, draft, Utc::now())
    })
    .collect()
}

// --- Benchmark Functions ---

fn bench_render_pipeline(c: &mut Criterion) {
  let mut group = c.benchmark_group("ViewRender");

  for size in [10usize, 1_000, 10_000].iter() {
    let products = make_products(*size);
    let states = [
      ("identity", ViewState::new()),
      ("search", ViewState::new().with_search("00")),
      ("sort_price_desc", ViewState::new().toggle_sort(SortField::Price).toggle_sort(SortField::Price)),
      (
        "search_sort_name",
        ViewState::new().with_search("1").toggle_sort(SortField::Name),
      ),
    ];

    group.throughput(Throughput::Elements(*size as u64));
    for (label, state) in states.iter() {
      group.bench_with_input(BenchmarkId::new(*label, size), &products, |b, products| {
        b.iter(|| state.render(products));
      });
    }
  }
  group.finish();
}

fn bench_store_create(c: &mut Criterion) {
  let mut group = c.benchmark_group("StoreCreate");
  let rt = Runtime::new().unwrap();

  group.bench_function("in_memory", |b| {
    b.to_async(&rt).iter_batched(
      || ProductStore::new(Arc::new(InMemoryProductRepository::new())),
      |store| async move {
        let draft = ProductDraft {
          name: "Pen".to_string(),
          category: Category::Books,
          price: Decimal::new(200, 2),
          stock_quantity: 10,
        };
        store.create(draft).await.unwrap()
      },
      criterion::BatchSize::SmallInput,
    );
  });
  group.finish();
}

criterion_group!(benches, bench_render_pipeline, bench_store_create);
criterion_main!(benches);
