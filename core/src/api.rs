// vitrina/src/api.rs

//! Collaborator contracts for the backend REST API.
//!
//! The HTTP client itself is not implemented here; the storefront wires a
//! concrete transport in at startup and tests inject scripted fakes. From
//! this crate's perspective a remote call either succeeds or fails with one
//! opaque error — stock conflicts, auth expiry and network faults all arrive
//! through the same channel.

use crate::model::Product;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for the add-to-cart endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest {
  pub product_id: Uuid,
  pub quantity: u32,
}

/// Query parameters for product listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQuery {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub per_page: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub search: Option<String>,
}

impl ProductQuery {
  pub fn first_page(per_page: u32) -> Self {
    Self {
      page: Some(1),
      per_page: Some(per_page),
      ..Self::default()
    }
  }
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPage {
  pub products: Vec<Product>,
  pub total: u64,
  pub page: u32,
}

/// Remote cart service.
#[async_trait]
pub trait CartApi: Send + Sync {
  /// Adds `quantity` units of a product to the authenticated user's server
  /// cart. The success body carries server-assigned line data, but the
  /// client synthesizes its local line from local state instead, so the
  /// response is reduced to unit here.
  async fn add_to_cart(&self, request: AddToCartRequest) -> anyhow::Result<()>;
}

/// Remote product catalog.
#[async_trait]
pub trait ProductsApi: Send + Sync {
  async fn list_products(&self, query: ProductQuery) -> anyhow::Result<ProductPage>;
}

/// Fallback shown when a remote error carries no usable message.
pub const GENERIC_API_ERROR: &str = "Ocurrió un error inesperado. Inténtalo de nuevo.";

/// Turns a remote error into a user-facing message.
///
/// Shared by every flow that surfaces a remote failure as a notification, so
/// the user never sees a raw error chain or debug formatting.
pub fn describe_api_error(err: &anyhow::Error) -> String {
  let message = err.to_string();
  if message.trim().is_empty() {
    GENERIC_API_ERROR.to_string()
  } else {
    message
  }
}
