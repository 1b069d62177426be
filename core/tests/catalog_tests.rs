// tests/catalog_tests.rs
mod common;
use common::*;

use std::sync::Arc;
use vitrina::{CatalogLoader, NoticeKind};

#[tokio::test]
async fn successful_load_replaces_featured_list() {
  setup_tracing();
  let api = Arc::new(ScriptedProductsApi::serving(vec![
    product("Destacado A", 10_000, 5),
    product("Destacado B", 20_000, 8),
  ]));
  let notifier = Arc::new(RecordingNotifier::default());
  let loader = CatalogLoader::new(api.clone(), notifier.clone());

  assert!(loader.load_featured(8).await);

  let featured = loader.featured();
  assert_eq!(featured.len(), 2);
  assert_eq!(featured[0].name, "Destacado A");
  assert_eq!(notifier.total(), 0);

  let query = api.last_query().expect("query recorded");
  assert_eq!(query.per_page, Some(8));
  assert_eq!(query.page, Some(1));
  assert!(!loader.is_loading());
}

#[tokio::test]
async fn failed_load_keeps_previous_list_and_notifies() {
  setup_tracing();
  let api = Arc::new(ScriptedProductsApi::serving(vec![product(
    "Destacado", 10_000, 5,
  )]));
  let notifier = Arc::new(RecordingNotifier::default());
  let loader = CatalogLoader::new(api.clone(), notifier.clone());

  assert!(loader.load_featured(8).await);
  assert_eq!(loader.featured().len(), 1);

  api.set_failure(Some("backend caído"));
  assert!(!loader.load_featured(8).await);

  // Previous contents survive a failed refresh.
  assert_eq!(loader.featured().len(), 1);
  assert_eq!(notifier.total(), 1);
  assert_eq!(
    notifier.notices()[0],
    (
      NoticeKind::Error,
      "Error al cargar productos destacados".to_string()
    )
  );
  assert!(!loader.is_loading());
}
