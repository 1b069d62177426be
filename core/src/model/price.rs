// vitrina/src/model/price.rs

//! Price display formatting shared by cards and cart views.

/// Formats a price in cents as `$1,234.56`.
///
/// Negative amounts (refund lines, price adjustments) keep the sign in front
/// of the currency symbol.
pub fn format_price(cents: i64) -> String {
  let negative = cents < 0;
  let abs = cents.unsigned_abs();
  let whole = (abs / 100).to_string();
  let frac = abs % 100;

  let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
  for (idx, digit) in whole.chars().enumerate() {
    if idx > 0 && (whole.len() - idx) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(digit);
  }

  format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, frac)
}
