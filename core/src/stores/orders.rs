// core/src/stores/orders.rs

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::error::StoreResult;
use crate::models::Order;

/// Append-only ledger of completed orders plus the global completed-order
/// counter.
#[async_trait]
pub trait OrderStore: Send + Sync {
  /// Appends the order and increments the global counter in the same
  /// atomic operation, returning the post-increment count.
  ///
  /// The append and the increment must share one critical section so that
  /// concurrent checkouts are linearized: no two commits may observe the
  /// same count, and no multiple of the reward interval can be skipped.
  async fn commit(&self, order: Order) -> StoreResult<u64>;

  /// Full order history, oldest first.
  async fn all(&self) -> StoreResult<Vec<Order>>;

  /// Current value of the global counter, without modifying it.
  async fn count(&self) -> StoreResult<u64>;
}

/// In-memory ledger. The counter lives under the same mutex as the order
/// list, which is what makes `commit` linearizable.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
  inner: Mutex<Ledger>,
}

#[derive(Debug, Default)]
struct Ledger {
  orders: Vec<Order>,
  order_count: u64,
}

impl InMemoryOrderStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
  async fn commit(&self, order: Order) -> StoreResult<u64> {
    let mut ledger = self.inner.lock();
    info!(order_id = %order.id, user_id = %order.user_id, total_cents = order.total_amount_cents, "Committing order.");
    ledger.orders.push(order);
    ledger.order_count += 1;
    Ok(ledger.order_count)
  }

  async fn all(&self) -> StoreResult<Vec<Order>> {
    Ok(self.inner.lock().orders.clone())
  }

  async fn count(&self) -> StoreResult<u64> {
    Ok(self.inner.lock().order_count)
  }
}
