// vitrina/src/model/cart_line.rs

use crate::model::product::Product;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Surrogate identifier for a locally held cart line.
///
/// Assigned by the cart store from a monotonic counter, so two adds that
/// complete arbitrarily close together still get distinct ids. (The ids are
/// unique within the local cart session only; the server assigns its own.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl std::fmt::Display for LineId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// One line of the locally held cart snapshot.
///
/// Created only after the remote add-to-cart call has confirmed, synthesized
/// from local data rather than from the server's response body. Never mutated
/// after creation.
#[derive(Debug, Clone, Serialize)]
pub struct CartLine {
  pub id: LineId,
  pub product_id: Uuid,
  /// Denormalized snapshot of the product at add time. Later catalog
  /// mutations do not propagate into existing lines.
  pub product: Product,
  pub quantity: u32,
  pub added_at: DateTime<Utc>,
}

impl CartLine {
  /// Line subtotal in cents, from the snapshotted unit price.
  pub fn subtotal_cents(&self) -> i64 {
    self.product.price_cents * i64::from(self.quantity)
  }
}
