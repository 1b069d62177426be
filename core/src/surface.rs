// vitrina/src/surface.rs

//! Outbound UI surfaces: toast notifications and navigation.
//!
//! Both are fire-and-forget from the core's point of view; nothing here
//! waits for an acknowledgment or consumes a return value.

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
  Info,
  Success,
  Error,
}

/// Toast surface. The storefront wires this to its notification widget;
/// tests record emissions for assertion.
pub trait Notifier: Send + Sync {
  fn notify(&self, kind: NoticeKind, message: &str);
}

/// View-transition surface over the client router.
pub trait Navigator: Send + Sync {
  fn navigate_to(&self, path: &str);
}

/// Route paths the core navigates to.
pub mod routes {
  use uuid::Uuid;

  pub const LOGIN: &str = "/login";

  /// Detail page for a product, used by quick view and card links.
  pub fn product_detail(product_id: Uuid) -> String {
    format!("/product/{product_id}")
  }
}
