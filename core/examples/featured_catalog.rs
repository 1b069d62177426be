// vitrina_core/examples/featured_catalog.rs

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use vitrina::{
  CatalogLoader, Notifier, NoticeKind, Product, ProductPage, ProductQuery, ProductsApi,
  StockStatus,
};

struct ConsoleToasts;

impl Notifier for ConsoleToasts {
  fn notify(&self, kind: NoticeKind, message: &str) {
    println!("[toast:{:?}] {}", kind, message);
  }
}

// A catalog that serves a fixed page, like a seeded dev backend.
struct SeededCatalog;

#[async_trait]
impl ProductsApi for SeededCatalog {
  async fn list_products(&self, query: ProductQuery) -> anyhow::Result<ProductPage> {
    info!(per_page = ?query.per_page, "serving seeded catalog page");
    let products = vec![
      seeded("Cafetera Italiana", 79_900, 12),
      seeded("Molino Manual", 45_000, 4),
      seeded("Taza Esmaltada", 9_900, 0),
    ];
    let total = products.len() as u64;
    Ok(ProductPage { products, total, page: 1 })
  }
}

fn seeded(name: &str, price_cents: i64, stock: u32) -> Product {
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price_cents,
    original_price_cents: None,
    discount_percent: None,
    stock,
    category: Some("cocina".to_string()),
    rating: Some(4.8),
    review_count: Some(32),
    image_url: None,
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Featured Catalog Example ---");

  let loader = CatalogLoader::new(Arc::new(SeededCatalog), Arc::new(ConsoleToasts));
  loader.load_featured(8).await;

  for product in loader.featured() {
    let status = StockStatus::classify(product.stock);
    println!(
      "{} — {} [{}]",
      product.name,
      product.display_price(),
      status.label()
    );
  }
}
