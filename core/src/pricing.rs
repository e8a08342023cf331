// core/src/pricing.rs

//! Pure pricing math: subtotals, discount application, and the milestone
//! predicate. No state, no side effects — everything here is a plain
//! function over its arguments so it can be tested in isolation.

use crate::models::{CartLine, DiscountKind, Product};

/// Sums `price * quantity` over the cart lines against a catalog snapshot.
///
/// Lines referencing a product absent from the snapshot contribute zero.
/// That leniency is deliberate (the product may have been retired after the
/// line was added), not an oversight.
pub fn subtotal(lines: &[CartLine], products: &[Product]) -> i64 {
  lines
    .iter()
    .filter_map(|line| {
      products
        .iter()
        .find(|p| p.id == line.product_id)
        .map(|p| p.price_cents * line.quantity)
    })
    .sum()
}

/// Applies an optional discount to `amount` (cents) and returns the final
/// amount.
///
/// - `None` leaves the amount unchanged.
/// - `Percentage` takes `value` percent off, integer arithmetic. Values
///   over 100 are not rejected here, but the result is clamped at zero.
/// - `Fixed` subtracts `value` cents, floored at zero.
pub fn apply_discount(amount: i64, discount: Option<(DiscountKind, i64)>) -> i64 {
  match discount {
    None => amount,
    Some((DiscountKind::Percentage, value)) => (amount - amount * value / 100).max(0),
    Some((DiscountKind::Fixed, value)) => (amount - value).max(0),
  }
}

/// The milestone predicate: true when `count` completed orders is a
/// positive multiple of `n`.
pub fn is_nth_order(count: u64, n: u64) -> bool {
  count > 0 && count % n == 0
}
