// src/lib.rs

//! Vitrina: the client-side domain core of a storefront UI.
//!
//! The crate owns the logic a rendering front-end calls into:
//!  - An add-to-cart synchronizer with ordered gating (auth, stock,
//!    quantity bounds) and write-through-after-confirm local cart merges.
//!  - A locally held cart snapshot with store-owned monotonic line ids.
//!  - An auth-gated wishlist toggle and a featured-catalog loader.
//!  - Stock-badge classification, price formatting, and the quantity
//!    stepper behind product cards.
//!
//! Rendering, routing tables, and the HTTP client are collaborator traits
//! (`Notifier`, `Navigator`, `CartApi`, `ProductsApi`) injected at startup,
//! never ambient singletons, so every flow is testable with fakes.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod surface;
pub mod sync;

// --- Re-exports for the Public API ---

pub use crate::api::{
  describe_api_error, AddToCartRequest, CartApi, ProductPage, ProductQuery, ProductsApi,
};
pub use crate::config::StorefrontConfig;
pub use crate::error::{CartError, CartResult};
pub use crate::model::{format_price, CartLine, LineId, Product, StockStatus};
pub use crate::store::{
  BusyFlag, CartStore, Session, StateCell, StoreHandle, UserProfile, Wishlist,
};
pub use crate::surface::{routes, Navigator, Notifier, NoticeKind};
pub use crate::sync::{
  AddOutcome, CartSynchronizer, CatalogLoader, LivenessToken, QuantityStepper, ToggleOutcome,
  WishlistToggle,
};
