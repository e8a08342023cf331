// core/src/models/product.rs

use serde::{Deserialize, Serialize};

/// A purchasable product. Seeded once at startup and immutable afterwards;
/// products are never mutated or deleted at runtime.
///
/// Prices are integer minor units (cents) to keep money arithmetic exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price_cents: i64,
  pub image_url: String,
}
