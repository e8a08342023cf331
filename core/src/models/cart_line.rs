// core/src/models/cart_line.rs

use serde::{Deserialize, Serialize};

/// One line of a user's cart: a product reference and how many of it.
///
/// Invariant: any line actually stored in a cart has `quantity > 0`. A line
/// whose quantity drops to zero or below is removed from the cart entirely,
/// never retained at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
  pub product_id: String,
  pub quantity: i64,
}
