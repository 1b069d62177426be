// vitrina/src/sync/quantity.rs

/// Quantity stepper backing the +/- control on the detailed product card.
///
/// Keeps the selection inside `1..=stock` at the input layer. The
/// synchronizer re-validates the same bound as a hard precondition, so a
/// caller that bypasses the stepper still cannot over-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
  quantity: u32,
  max: u32,
}

impl QuantityStepper {
  /// Starts at one unit. A zero-stock product still yields a stepper pinned
  /// at 1; the add gate is what refuses it.
  pub fn new(stock: u32) -> Self {
    Self {
      quantity: 1,
      max: stock.max(1),
    }
  }

  pub fn quantity(&self) -> u32 {
    self.quantity
  }

  pub fn max(&self) -> u32 {
    self.max
  }

  /// Saturates at the stock ceiling.
  pub fn increment(&mut self) {
    if self.quantity < self.max {
      self.quantity += 1;
    }
  }

  /// Saturates at one unit.
  pub fn decrement(&mut self) {
    if self.quantity > 1 {
      self.quantity -= 1;
    }
  }

  /// Direct entry, clamped into `1..=max`.
  pub fn set(&mut self, quantity: u32) {
    self.quantity = quantity.clamp(1, self.max);
  }

  pub fn at_max(&self) -> bool {
    self.quantity >= self.max
  }

  pub fn at_min(&self) -> bool {
    self.quantity <= 1
  }
}
