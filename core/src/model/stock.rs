// vitrina/src/model/stock.rs

//! Stock-threshold classification for the product card badge.

/// Default threshold at or below which stock counts as "last units".
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;
/// Default threshold at or below which stock counts as "limited".
pub const DEFAULT_LIMITED_STOCK_THRESHOLD: u32 = 10;

/// Badge category derived from a product's remaining stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
  OutOfStock,
  LastUnits,
  Limited,
  InStock,
}

impl StockStatus {
  /// Classifies with the default thresholds (0 / 5 / 10).
  pub fn classify(stock: u32) -> Self {
    Self::classify_with(stock, DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_LIMITED_STOCK_THRESHOLD)
  }

  /// Classifies with explicit thresholds, e.g. from `StorefrontConfig`.
  pub fn classify_with(stock: u32, low: u32, limited: u32) -> Self {
    if stock == 0 {
      StockStatus::OutOfStock
    } else if stock <= low {
      StockStatus::LastUnits
    } else if stock <= limited {
      StockStatus::Limited
    } else {
      StockStatus::InStock
    }
  }

  /// Badge copy shown on the card.
  pub fn label(&self) -> &'static str {
    match self {
      StockStatus::OutOfStock => "Sin stock",
      StockStatus::LastUnits => "¡Últimas unidades!",
      StockStatus::Limited => "Stock limitado",
      StockStatus::InStock => "En stock",
    }
  }

  /// Whether the card surfaces the badge at all. The full card only shows it
  /// once stock has dropped into the limited range.
  pub fn is_scarce(&self) -> bool {
    !matches!(self, StockStatus::InStock)
  }
}
