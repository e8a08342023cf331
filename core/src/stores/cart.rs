// core/src/stores/cart.rs

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::StoreResult;
use crate::models::CartLine;

/// Per-user cart ledger.
#[async_trait]
pub trait CartStore: Send + Sync {
  /// The user's current cart lines, in insertion order. Empty vec for a
  /// user who has never touched a cart.
  async fn get(&self, user_id: &str) -> StoreResult<Vec<CartLine>>;

  /// Applies a quantity delta for one product as a single atomic merge and
  /// returns the updated cart:
  ///
  /// - product not in the cart and `delta > 0`: insert a new line;
  /// - product not in the cart and `delta <= 0`: no-op;
  /// - product already in the cart: add `delta` to its quantity, and drop
  ///   the line entirely if the result is zero or less.
  ///
  /// "Remove one", "remove all" and "decrement" are all expressed through
  /// negative deltas; there is no separate removal operation.
  async fn add_or_merge(&self, user_id: &str, product_id: &str, delta: i64) -> StoreResult<Vec<CartLine>>;

  /// Resets the user's cart to an empty sequence. The key persists, the
  /// cart is emptied rather than deleted.
  async fn clear(&self, user_id: &str) -> StoreResult<()>;
}

/// In-memory cart ledger. One mutex over the whole map; every merge runs
/// inside the critical section, so concurrent mutations to the same user's
/// cart (rapid double-click adds) cannot lose updates.
#[derive(Debug, Default)]
pub struct InMemoryCartStore {
  carts: Mutex<HashMap<String, Vec<CartLine>>>,
}

impl InMemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
  async fn get(&self, user_id: &str) -> StoreResult<Vec<CartLine>> {
    Ok(self.carts.lock().get(user_id).cloned().unwrap_or_default())
  }

  async fn add_or_merge(&self, user_id: &str, product_id: &str, delta: i64) -> StoreResult<Vec<CartLine>> {
    let mut carts = self.carts.lock();
    let cart = carts.entry(user_id.to_string()).or_default();

    match cart.iter().position(|line| line.product_id == product_id) {
      Some(idx) => {
        let merged = cart[idx].quantity + delta;
        if merged <= 0 {
          cart.remove(idx);
        } else {
          cart[idx].quantity = merged;
        }
      }
      None if delta > 0 => cart.push(CartLine {
        product_id: product_id.to_string(),
        quantity: delta,
      }),
      None => {
        debug!(user_id, product_id, delta, "Non-positive delta for absent cart line; nothing to do.");
      }
    }

    Ok(cart.clone())
  }

  async fn clear(&self, user_id: &str) -> StoreResult<()> {
    self.carts.lock().insert(user_id.to_string(), Vec::new());
    Ok(())
  }
}
