// vitrina/src/store/state_cell.rs

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared, interior-mutable slice of client state.
///
/// Every piece of the injected store (session, cart lines, wishlist,
/// featured list) lives inside one of these. Cloning is cheap and aliases
/// the same underlying state.
///
/// IMPORTANT: the guards are blocking `parking_lot` guards and MUST NOT be
/// held across an `.await` suspension point. Read what you need into locals,
/// drop the guard, then suspend.
#[derive(Debug)]
pub struct StateCell<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> StateCell<T> {
  pub fn new(value: T) -> Self {
    StateCell(Arc::new(RwLock::new(value)))
  }

  /// Acquires a read guard. Drop it before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// Acquires a write guard. Drop it before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Swaps in a whole new value, returning the previous one. Used where a
  /// flow replaces a slice wholesale (session sign-in/out, a refreshed
  /// featured list) rather than editing it in place.
  pub fn replace(&self, value: T) -> T {
    std::mem::replace(&mut *self.write(), value)
  }
}

impl<T: Send + Sync + 'static> Clone for StateCell<T> {
  fn clone(&self) -> Self {
    StateCell(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for StateCell<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}
