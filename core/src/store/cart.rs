// vitrina/src/store/cart.rs

use crate::model::{CartLine, LineId, Product};
use crate::store::state_cell::StateCell;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{event, Level};

/// Locally held cart snapshot.
///
/// The store is the single writer of the line collection within this crate;
/// line removal and quantity edits belong to other parts of the client and
/// are not modeled here. Insertion order is preserved for display, which
/// under concurrent in-flight adds means completion order, not trigger order.
#[derive(Clone)]
pub struct CartStore {
  lines: StateCell<Vec<CartLine>>,
  // Owned by the store so every line id comes from one monotonic source.
  next_line_id: Arc<AtomicU64>,
}

impl CartStore {
  pub fn new() -> Self {
    Self {
      lines: StateCell::new(Vec::new()),
      next_line_id: Arc::new(AtomicU64::new(1)),
    }
  }

  /// Appends a freshly synthesized line for `product` and returns it.
  ///
  /// Each call produces a new line, even for a product already in the cart;
  /// the backend may instead merge same-product lines server-side, in which
  /// case this local snapshot diverges from the authoritative cart until the
  /// next full cart fetch. That divergence is inherited from the upstream
  /// client behavior and is deliberately not papered over here.
  pub fn append(&self, product: &Product, quantity: u32) -> CartLine {
    let id = LineId(self.next_line_id.fetch_add(1, Ordering::Relaxed));
    let line = CartLine {
      id,
      product_id: product.id,
      product: product.clone(),
      quantity,
      added_at: Utc::now(),
    };
    self.lines.write().push(line.clone());
    event!(
      Level::DEBUG,
      line_id = %id,
      product_id = %product.id,
      quantity,
      "cart line appended"
    );
    line
  }

  /// Current lines, in insertion order.
  pub fn lines(&self) -> Vec<CartLine> {
    self.lines.read().clone()
  }

  pub fn len(&self) -> usize {
    self.lines.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.read().is_empty()
  }

  /// Sum of line subtotals in cents.
  pub fn total_cents(&self) -> i64 {
    self.lines.read().iter().map(CartLine::subtotal_cents).sum()
  }
}

impl Default for CartStore {
  fn default() -> Self {
    Self::new()
  }
}
