// vitrina/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;
use uuid::Uuid;

/// Everything that can go wrong inside the cart core.
///
/// Gating variants are detected locally and never reach the remote boundary.
/// Whatever the remote call surfaces (stock conflict, auth expiry, network
/// fault) arrives collapsed into the single `Remote` channel; this layer does
/// not distinguish the cause further.
#[derive(Debug, Error)]
pub enum CartError {
  #[error("caller is not authenticated")]
  NotAuthenticated,

  #[error("product {product_id} is out of stock")]
  OutOfStock { product_id: Uuid },

  #[error("requested quantity {requested} outside 1..={available}")]
  QuantityOutOfRange { requested: u32, available: u32 },

  #[error("a submission from this control is already in flight")]
  SubmissionInFlight,

  #[error("remote cart service rejected the operation: {source}")]
  Remote {
    #[source]
    source: AnyhowError,
  },

  #[error("configuration error: {0}")]
  Config(String),
}

// API collaborators report through anyhow; fold those into the one
// remote channel.
impl From<AnyhowError> for CartError {
  fn from(err: AnyhowError) -> Self {
    CartError::Remote { source: err }
  }
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
