// vitrina/src/sync/add_to_cart.rs

//! The add-to-cart synchronizer: gates a user's add intent, confirms it with
//! the remote cart service, and only then merges a locally synthesized line
//! into the client cart snapshot.

use crate::api::{describe_api_error, AddToCartRequest, CartApi};
use crate::config::StorefrontConfig;
use crate::error::CartError;
use crate::model::{CartLine, Product};
use crate::store::{BusyFlag, StoreHandle};
use crate::surface::{routes, Navigator, Notifier, NoticeKind};
use crate::sync::liveness::LivenessToken;
use std::sync::Arc;
use tracing::{event, instrument, Level};

/// Terminal state of one add-to-cart invocation.
///
/// The synchronizer never returns `Err`: every failure mode ends in a
/// notification and one of these values, leaving the UI stable and
/// retriable.
#[derive(Debug)]
pub enum AddOutcome {
  /// Remote call confirmed; the returned line was appended locally.
  Added(CartLine),
  /// A local gate refused the intent before any remote call was made.
  Rejected(CartError),
  /// The remote call was made and failed; local state is untouched.
  Failed(CartError),
  /// The remote call resolved (either way) after the invoking view was torn
  /// down, so both the local merge and the toast were suppressed.
  Abandoned,
}

impl AddOutcome {
  pub fn is_added(&self) -> bool {
    matches!(self, AddOutcome::Added(_))
  }
}

/// Coordinates one UI control's add-to-cart submissions.
///
/// One synchronizer per control instance: its busy flag is what the control
/// binds its `disabled` state to, and its liveness token is revoked when the
/// owning view unmounts. Collaborators are injected explicitly; there is no
/// ambient store lookup.
#[derive(Clone)]
pub struct CartSynchronizer {
  store: StoreHandle,
  cart_api: Arc<dyn CartApi>,
  notifier: Arc<dyn Notifier>,
  navigator: Arc<dyn Navigator>,
  login_route: String,
  busy: BusyFlag,
  liveness: LivenessToken,
}

impl CartSynchronizer {
  pub fn new(
    store: StoreHandle,
    cart_api: Arc<dyn CartApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
  ) -> Self {
    Self {
      store,
      cart_api,
      notifier,
      navigator,
      login_route: routes::LOGIN.to_string(),
      busy: BusyFlag::new(),
      liveness: LivenessToken::new(),
    }
  }

  /// Applies configured routing, overriding the default login redirect.
  pub fn with_config(mut self, config: &StorefrontConfig) -> Self {
    self.login_route = config.login_route.clone();
    self
  }

  /// Loading flag for the owning control. Set only while a remote call is in
  /// flight; gated aborts never touch it.
  pub fn is_busy(&self) -> bool {
    self.busy.is_set()
  }

  /// Token the owning view revokes on unmount.
  pub fn liveness(&self) -> LivenessToken {
    self.liveness.clone()
  }

  /// Adds `quantity` units of `product` to the cart.
  ///
  /// Gates run in order and short-circuit: authentication (info toast plus a
  /// redirect to the login view), non-zero stock, then `1..=stock` bounds on
  /// the quantity. Only after all gates pass is the remote call issued; only
  /// after it confirms is the local line appended. A failed call leaves the
  /// local cart untouched and surfaces exactly one error toast.
  #[instrument(
    name = "CartSynchronizer::add_to_cart",
    skip(self, product),
    fields(product_id = %product.id, quantity, stock = product.stock)
  )]
  pub async fn add_to_cart(&self, product: &Product, quantity: u32) -> AddOutcome {
    if let Err(refusal) = self.gate(product, quantity) {
      event!(Level::INFO, refusal = %refusal, "add-to-cart rejected before remote call");
      self.surface_refusal(&refusal);
      return AddOutcome::Rejected(refusal);
    }

    // The flag is acquired only after gating, so gated aborts never flash
    // the loading state. The guard clears it on every exit path below.
    let Some(_busy) = self.busy.acquire() else {
      // The control is disabled while in flight; a second submission can
      // only come from a caller bypassing the UI. Refuse it silently.
      event!(Level::WARN, "overlapping submission refused");
      return AddOutcome::Rejected(CartError::SubmissionInFlight);
    };

    let request = AddToCartRequest {
      product_id: product.id,
      quantity,
    };

    match self.cart_api.add_to_cart(request).await {
      Ok(()) => {
        if !self.liveness.is_alive() {
          event!(
            Level::WARN,
            "view torn down mid-flight; suppressing local cart merge"
          );
          return AddOutcome::Abandoned;
        }
        // Write-through-after-confirm: the server said yes, but the local
        // line is synthesized from the product snapshot we validated
        // against, not from the response body.
        let line = self.store.cart.append(product, quantity);
        self
          .notifier
          .notify(NoticeKind::Success, &format!("{} agregado al carrito", product.name));
        event!(Level::INFO, line_id = %line.id, "add-to-cart fulfilled");
        AddOutcome::Added(line)
      }
      Err(err) => {
        event!(Level::ERROR, error = %err, "remote add-to-cart failed");
        if !self.liveness.is_alive() {
          event!(
            Level::WARN,
            "view torn down mid-flight; suppressing error toast"
          );
          return AddOutcome::Abandoned;
        }
        let message = describe_api_error(&err);
        self.notifier.notify(NoticeKind::Error, &message);
        AddOutcome::Failed(CartError::Remote { source: err })
      }
    }
  }

  // Gate order matters: authentication first, then stock, then bounds.
  fn gate(&self, product: &Product, quantity: u32) -> Result<(), CartError> {
    if !self.store.session.is_authenticated() {
      return Err(CartError::NotAuthenticated);
    }
    if product.stock == 0 {
      return Err(CartError::OutOfStock {
        product_id: product.id,
      });
    }
    // Checked synchronously against the snapshot handed to this call, never
    // against a stale read. The stepper enforces the same bound at the input
    // layer, but not every call site goes through a stepper.
    if quantity == 0 || quantity > product.stock {
      return Err(CartError::QuantityOutOfRange {
        requested: quantity,
        available: product.stock,
      });
    }
    Ok(())
  }

  fn surface_refusal(&self, refusal: &CartError) {
    match refusal {
      CartError::NotAuthenticated => {
        self
          .notifier
          .notify(NoticeKind::Info, "Inicia sesión para agregar productos al carrito");
        self.navigator.navigate_to(&self.login_route);
      }
      CartError::OutOfStock { .. } => {
        self.notifier.notify(NoticeKind::Error, "Producto sin stock");
      }
      CartError::QuantityOutOfRange { available, .. } => {
        self.notifier.notify(
          NoticeKind::Error,
          &format!("Solo hay {} unidades disponibles", available),
        );
      }
      other => {
        self.notifier.notify(NoticeKind::Error, &other.to_string());
      }
    }
  }
}
