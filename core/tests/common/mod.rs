// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::Level;
use uuid::Uuid;
use vitrina::{
  AddToCartRequest, CartApi, CartSynchronizer, Navigator, Notifier, NoticeKind, Product,
  ProductPage, ProductQuery, ProductsApi, Session, StoreHandle, UserProfile,
};

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixture builders ---

pub fn product(name: &str, price_cents: i64, stock: u32) -> Product {
  Product {
    id: Uuid::new_v4(),
    name: name.to_string(),
    description: None,
    price_cents,
    original_price_cents: None,
    discount_percent: None,
    stock,
    category: Some("general".to_string()),
    rating: None,
    review_count: None,
    image_url: None,
  }
}

pub fn test_user() -> UserProfile {
  UserProfile {
    id: Uuid::new_v4(),
    email: "cliente@example.com".to_string(),
    display_name: Some("Cliente de Prueba".to_string()),
  }
}

pub fn authenticated_store() -> StoreHandle {
  StoreHandle::with_session(Session::signed_in(test_user()))
}

pub fn anonymous_store() -> StoreHandle {
  StoreHandle::with_session(Session::anonymous())
}

// --- Recording surfaces ---

#[derive(Default)]
pub struct RecordingNotifier {
  notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
  pub fn notices(&self) -> Vec<(NoticeKind, String)> {
    self.notices.lock().clone()
  }

  pub fn count(&self, kind: NoticeKind) -> usize {
    self.notices.lock().iter().filter(|(k, _)| *k == kind).count()
  }

  pub fn total(&self) -> usize {
    self.notices.lock().len()
  }
}

impl Notifier for RecordingNotifier {
  fn notify(&self, kind: NoticeKind, message: &str) {
    tracing::debug!(target: "test_surfaces", ?kind, message, "notification recorded");
    self.notices.lock().push((kind, message.to_string()));
  }
}

#[derive(Default)]
pub struct RecordingNavigator {
  visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
  pub fn visited(&self) -> Vec<String> {
    self.visited.lock().clone()
  }
}

impl Navigator for RecordingNavigator {
  fn navigate_to(&self, path: &str) {
    tracing::debug!(target: "test_surfaces", path, "navigation recorded");
    self.visited.lock().push(path.to_string());
  }
}

// --- Scripted remote APIs ---

type CallHook = Box<dyn Fn() + Send + Sync>;

/// Cart endpoint double. Succeeds by default; can be scripted to fail with a
/// fixed message, to suspend for a while mid-call, or to run a hook right
/// before resolving (for teardown-mid-flight tests).
#[derive(Default)]
pub struct ScriptedCartApi {
  calls: AtomicUsize,
  last_request: Mutex<Option<AddToCartRequest>>,
  fail_with: Mutex<Option<String>>,
  delay: Mutex<Option<Duration>>,
  before_resolve: Mutex<Option<CallHook>>,
}

impl ScriptedCartApi {
  pub fn succeeding() -> Self {
    Self::default()
  }

  pub fn failing(message: &str) -> Self {
    let api = Self::default();
    *api.fail_with.lock() = Some(message.to_string());
    api
  }

  pub fn with_delay(self, delay: Duration) -> Self {
    *self.delay.lock() = Some(delay);
    self
  }

  pub fn on_call(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
    *self.before_resolve.lock() = Some(Box::new(hook));
    self
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn last_request(&self) -> Option<AddToCartRequest> {
    self.last_request.lock().clone()
  }
}

#[async_trait]
impl CartApi for ScriptedCartApi {
  async fn add_to_cart(&self, request: AddToCartRequest) -> anyhow::Result<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    *self.last_request.lock() = Some(request);

    let delay = *self.delay.lock();
    if let Some(delay) = delay {
      tokio::time::sleep(delay).await;
    }
    if let Some(hook) = self.before_resolve.lock().as_ref() {
      hook();
    }

    let failure = self.fail_with.lock().clone();
    match failure {
      Some(message) => Err(anyhow::anyhow!(message)),
      None => Ok(()),
    }
  }
}

/// Catalog endpoint double.
#[derive(Default)]
pub struct ScriptedProductsApi {
  calls: AtomicUsize,
  last_query: Mutex<Option<ProductQuery>>,
  products: Mutex<Vec<Product>>,
  fail_with: Mutex<Option<String>>,
}

impl ScriptedProductsApi {
  pub fn serving(products: Vec<Product>) -> Self {
    let api = Self::default();
    *api.products.lock() = products;
    api
  }

  pub fn failing(message: &str) -> Self {
    let api = Self::default();
    *api.fail_with.lock() = Some(message.to_string());
    api
  }

  pub fn set_failure(&self, message: Option<&str>) {
    *self.fail_with.lock() = message.map(str::to_string);
  }

  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }

  pub fn last_query(&self) -> Option<ProductQuery> {
    self.last_query.lock().clone()
  }
}

#[async_trait]
impl ProductsApi for ScriptedProductsApi {
  async fn list_products(&self, query: ProductQuery) -> anyhow::Result<ProductPage> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    *self.last_query.lock() = Some(query);

    let failure = self.fail_with.lock().clone();
    if let Some(message) = failure {
      return Err(anyhow::anyhow!(message));
    }

    let products = self.products.lock().clone();
    let total = products.len() as u64;
    Ok(ProductPage { products, total, page: 1 })
  }
}

// --- Synchronizer harness ---

/// Wires a `CartSynchronizer` to recording surfaces and a scripted cart API
/// so each test owns a fully isolated storefront.
pub struct Harness {
  pub store: StoreHandle,
  pub notifier: Arc<RecordingNotifier>,
  pub navigator: Arc<RecordingNavigator>,
  pub cart_api: Arc<ScriptedCartApi>,
  pub sync: CartSynchronizer,
}

impl Harness {
  pub fn new(store: StoreHandle, cart_api: ScriptedCartApi) -> Self {
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let cart_api = Arc::new(cart_api);
    let sync = CartSynchronizer::new(
      store.clone(),
      cart_api.clone(),
      notifier.clone(),
      navigator.clone(),
    );
    Self {
      store,
      notifier,
      navigator,
      cart_api,
      sync,
    }
  }

  pub fn authenticated() -> Self {
    Self::new(authenticated_store(), ScriptedCartApi::succeeding())
  }

  pub fn anonymous() -> Self {
    Self::new(anonymous_store(), ScriptedCartApi::succeeding())
  }
}
