// vitrina/src/sync/mod.rs

//! User-initiated flows that coordinate local store state with the backend:
//! the add-to-cart synchronizer, the wishlist toggle, and the featured
//! catalog loader, plus the small pieces they lean on (liveness tokens and
//! the quantity stepper).

pub mod add_to_cart;
pub mod catalog;
pub mod liveness;
pub mod quantity;
pub mod wishlist;

pub use add_to_cart::{AddOutcome, CartSynchronizer};
pub use catalog::CatalogLoader;
pub use liveness::LivenessToken;
pub use quantity::QuantityStepper;
pub use wishlist::{ToggleOutcome, WishlistToggle};
