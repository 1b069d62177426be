// vitrina/src/sync/catalog.rs

use crate::api::{ProductQuery, ProductsApi};
use crate::model::Product;
use crate::store::{BusyFlag, StateCell};
use crate::surface::{Notifier, NoticeKind};
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Loads the landing page's featured-products strip.
///
/// A failed fetch keeps whatever was previously loaded and surfaces one
/// error toast; the page stays usable either way.
#[derive(Clone)]
pub struct CatalogLoader {
  products_api: Arc<dyn ProductsApi>,
  notifier: Arc<dyn Notifier>,
  featured: StateCell<Vec<Product>>,
  busy: BusyFlag,
}

impl CatalogLoader {
  pub fn new(products_api: Arc<dyn ProductsApi>, notifier: Arc<dyn Notifier>) -> Self {
    Self {
      products_api,
      notifier,
      featured: StateCell::default(),
      busy: BusyFlag::new(),
    }
  }

  pub fn featured(&self) -> Vec<Product> {
    self.featured.read().clone()
  }

  pub fn is_loading(&self) -> bool {
    self.busy.is_set()
  }

  /// Fetches the first page of featured products. Returns whether the
  /// featured list was refreshed.
  #[instrument(name = "CatalogLoader::load_featured", skip(self))]
  pub async fn load_featured(&self, per_page: u32) -> bool {
    let Some(_busy) = self.busy.acquire() else {
      event!(Level::DEBUG, "featured load already in flight, skipping");
      return false;
    };

    match self.products_api.list_products(ProductQuery::first_page(per_page)).await {
      Ok(page) => {
        event!(
          Level::INFO,
          fetched = page.products.len(),
          total = page.total,
          "featured products loaded"
        );
        self.featured.replace(page.products);
        true
      }
      Err(err) => {
        event!(Level::ERROR, error = %err, "failed to load featured products");
        self
          .notifier
          .notify(NoticeKind::Error, "Error al cargar productos destacados");
        false
      }
    }
  }
}
