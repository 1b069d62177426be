// vitrina/src/sync/liveness.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifetime token for the UI instance that triggered an operation.
///
/// A remote call has no cancellation path: if the triggering view is torn
/// down while the call is in flight, the future still resolves. Holders of a
/// clone check the token after the await and suppress the local state
/// mutation once the view is gone, instead of mutating state nobody renders.
#[derive(Debug, Clone)]
pub struct LivenessToken(Arc<AtomicBool>);

impl LivenessToken {
  pub fn new() -> Self {
    LivenessToken(Arc::new(AtomicBool::new(true)))
  }

  /// Marks the owning view as torn down. Idempotent.
  pub fn revoke(&self) {
    self.0.store(false, Ordering::Release);
  }

  pub fn is_alive(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }
}

impl Default for LivenessToken {
  fn default() -> Self {
    Self::new()
  }
}
