// vitrina/src/store/mod.rs

//! The injected client store: session, cart snapshot, wishlist, and the
//! busy flags that back disabled controls.
//!
//! The upstream client reached all of this through an ambient singleton
//! (`useStore()`); here it is an explicit handle passed into whatever needs
//! it, so tests can inject a fake store per case.

pub mod cart;
pub mod session;
pub mod state_cell;
pub mod wishlist;

pub use cart::CartStore;
pub use session::{Session, UserProfile};
pub use state_cell::StateCell;
pub use wishlist::Wishlist;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Transient loading flag behind a disabled UI control.
///
/// Doubles as the in-flight latch: `acquire` refuses while a previous guard
/// is still alive, which is the programmatic twin of the control being
/// disabled while a submission is in flight.
#[derive(Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_set(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }

  /// Sets the flag, returning a guard that clears it on drop. `None` if the
  /// flag was already set.
  pub fn acquire(&self) -> Option<BusyGuard> {
    if self.0.swap(true, Ordering::AcqRel) {
      None
    } else {
      Some(BusyGuard(self.0.clone()))
    }
  }
}

/// Clears the owning `BusyFlag` when dropped, so every exit path out of a
/// remote call (success, failure, panic unwind) clears the loading state.
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
  fn drop(&mut self) {
    self.0.store(false, Ordering::Release);
  }
}

/// Handle to the whole client store, cheap to clone and share.
#[derive(Clone, Default)]
pub struct StoreHandle {
  pub session: Session,
  pub cart: CartStore,
  pub wishlist: Wishlist,
  /// Page-level loading flag (the old `actions.setLoading`), distinct from
  /// the per-control flags owned by individual synchronizers.
  pub busy: BusyFlag,
}

impl StoreHandle {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_session(session: Session) -> Self {
    Self {
      session,
      ..Self::default()
    }
  }
}
