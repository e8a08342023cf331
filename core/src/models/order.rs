// core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::CartLine;

/// A committed order. Created once, atomically, by the checkout
/// orchestrator; immutable thereafter; appended to the order ledger and
/// never removed.
///
/// `items` is a snapshot of the cart lines at checkout time, not a live
/// reference to the cart — the cart is cleared right after commit and the
/// order must not observe that.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  pub user_id: String,
  pub items: Vec<CartLine>,
  /// Final charge, post-discount, floored at zero.
  #[serde(rename = "totalAmount")]
  pub total_amount_cents: i64,
  /// Amount taken off the subtotal; zero when no code was applied.
  #[serde(rename = "discountAmount")]
  pub discount_amount_cents: i64,
  /// The code string that was consumed, if any. A copy, not a live pointer
  /// into the registry.
  pub discount_code: Option<String>,
  pub created_at: DateTime<Utc>,
}
