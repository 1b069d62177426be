// vitrina/src/model/product.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog product as served by the backend.
///
/// Read-only to this crate: the core never mutates a `Product`, it only
/// snapshots one into a cart line at add time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  /// Unit price in cents.
  pub price_cents: i64,
  /// Pre-discount price in cents, when a discount applies.
  pub original_price_cents: Option<i64>,
  pub discount_percent: Option<u8>,
  /// Units available. Gating reads this synchronously at add time, never a
  /// stale copy.
  pub stock: u32,
  pub category: Option<String>,
  pub rating: Option<f32>,
  pub review_count: Option<u32>,
  pub image_url: Option<String>,
}

impl Product {
  /// Display price for the card, formatted with the crate's price helper.
  pub fn display_price(&self) -> String {
    crate::model::price::format_price(self.price_cents)
  }
}
