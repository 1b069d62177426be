// vitrina_core/examples/add_to_cart_flow.rs

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use vitrina::{
  AddToCartRequest, CartApi, CartSynchronizer, Navigator, Notifier, NoticeKind, Product,
  StoreHandle, UserProfile,
};

// 1. Wire trivial surfaces: toasts and navigation land on stdout.
struct ConsoleToasts;

impl Notifier for ConsoleToasts {
  fn notify(&self, kind: NoticeKind, message: &str) {
    println!("[toast:{:?}] {}", kind, message);
  }
}

struct ConsoleRouter;

impl Navigator for ConsoleRouter {
  fn navigate_to(&self, path: &str) {
    println!("[router] -> {}", path);
  }
}

// 2. A remote cart service that always confirms.
struct AlwaysConfirms;

#[async_trait]
impl CartApi for AlwaysConfirms {
  async fn add_to_cart(&self, request: AddToCartRequest) -> anyhow::Result<()> {
    info!(product_id = %request.product_id, request.quantity, "remote cart confirmed");
    Ok(())
  }
}

fn demo_product(name: &str, price_cents: i64, stock: u32) -> Product {
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price_cents,
    original_price_cents: None,
    discount_percent: None,
    stock,
    category: Some("demo".to_string()),
    rating: None,
    review_count: None,
    image_url: None,
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Add To Cart Flow Example ---");

  let store = StoreHandle::new();
  let sync = CartSynchronizer::new(
    store.clone(),
    Arc::new(AlwaysConfirms),
    Arc::new(ConsoleToasts),
    Arc::new(ConsoleRouter),
  );

  let coffee = demo_product("Café de Origen", 25_000, 12);
  let sold_out = demo_product("Edición Agotada", 99_900, 0);

  // Anonymous: gated before any remote call, redirected to login.
  sync.add_to_cart(&coffee, 1).await;

  // Sign in and retry.
  store.session.sign_in(UserProfile {
    id: Uuid::new_v4(),
    email: "cliente@example.com".to_string(),
    display_name: None,
  });
  sync.add_to_cart(&coffee, 2).await;

  // Out of stock: gated, remote never called.
  sync.add_to_cart(&sold_out, 1).await;

  for line in store.cart.lines() {
    println!(
      "cart line {}: {} x{} = {}",
      line.id,
      line.product.name,
      line.quantity,
      vitrina::format_price(line.subtotal_cents())
    );
  }
  println!("cart total: {}", vitrina::format_price(store.cart.total_cents()));
}
