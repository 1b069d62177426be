// vitrina/src/sync/wishlist.rs

use crate::config::StorefrontConfig;
use crate::model::Product;
use crate::store::StoreHandle;
use crate::surface::{routes, Navigator, Notifier, NoticeKind};
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Terminal state of one wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
  /// Product is now wishlisted.
  Added,
  /// Product was wishlisted and is no longer.
  Removed,
  /// Unauthenticated; the user was redirected to login instead.
  Rejected,
}

/// Auth-gated wishlist toggle behind the heart button on a product card.
///
/// Unlike add-to-cart this flow is purely local: there is no remote wishlist
/// endpoint, so the gate is the only precondition and the flip takes effect
/// immediately.
#[derive(Clone)]
pub struct WishlistToggle {
  store: StoreHandle,
  notifier: Arc<dyn Notifier>,
  navigator: Arc<dyn Navigator>,
  login_route: String,
}

impl WishlistToggle {
  pub fn new(store: StoreHandle, notifier: Arc<dyn Notifier>, navigator: Arc<dyn Navigator>) -> Self {
    Self {
      store,
      notifier,
      navigator,
      login_route: routes::LOGIN.to_string(),
    }
  }

  /// Applies configured routing, overriding the default login redirect.
  pub fn with_config(mut self, config: &StorefrontConfig) -> Self {
    self.login_route = config.login_route.clone();
    self
  }

  #[instrument(name = "WishlistToggle::toggle", skip(self, product), fields(product_id = %product.id))]
  pub fn toggle(&self, product: &Product) -> ToggleOutcome {
    if !self.store.session.is_authenticated() {
      event!(Level::INFO, "wishlist toggle rejected: unauthenticated");
      self
        .notifier
        .notify(NoticeKind::Info, "Inicia sesión para agregar a favoritos");
      self.navigator.navigate_to(&self.login_route);
      return ToggleOutcome::Rejected;
    }

    if self.store.wishlist.toggle(product.id) {
      self.notifier.notify(NoticeKind::Success, "Agregado a favoritos");
      ToggleOutcome::Added
    } else {
      self.notifier.notify(NoticeKind::Success, "Eliminado de favoritos");
      ToggleOutcome::Removed
    }
  }
}
