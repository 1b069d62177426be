// vitrina/src/store/wishlist.rs

use crate::store::state_cell::StateCell;
use std::collections::HashSet;
use uuid::Uuid;

/// Locally held set of wishlisted product ids. Purely client-side state; the
/// backend has no wishlist endpoint.
#[derive(Clone, Default)]
pub struct Wishlist {
  ids: StateCell<HashSet<Uuid>>,
}

impl Wishlist {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contains(&self, product_id: Uuid) -> bool {
    self.ids.read().contains(&product_id)
  }

  /// Flips membership for `product_id`; returns `true` when the product is
  /// wishlisted after the flip.
  pub fn toggle(&self, product_id: Uuid) -> bool {
    let mut guard = self.ids.write();
    if guard.remove(&product_id) {
      false
    } else {
      guard.insert(product_id);
      true
    }
  }

  pub fn len(&self) -> usize {
    self.ids.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.read().is_empty()
  }
}
