// core/src/models/discount.rs

use serde::{Deserialize, Serialize};

/// How a discount code reduces an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
  /// `value` is percent points off the subtotal (10 = 10% off).
  Percentage,
  /// `value` is a flat amount off, in cents.
  Fixed,
}

/// A single-use discount code.
///
/// `is_used` transitions false -> true exactly once, the instant the code is
/// consumed by a checkout, and never reverts. Codes are never deleted; used
/// ones stay in the registry for the admin history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountCode {
  pub code: String,
  #[serde(rename = "discountType")]
  pub kind: DiscountKind,
  pub value: i64,
  pub is_used: bool,
}

impl DiscountCode {
  pub fn new(code: impl Into<String>, kind: DiscountKind, value: i64) -> Self {
    Self {
      code: code.into(),
      kind,
      value,
      is_used: false,
    }
  }
}
