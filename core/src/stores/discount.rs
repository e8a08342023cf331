// core/src/stores/discount.rs

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::models::{DiscountCode, DiscountKind};

/// Registry of single-use discount codes.
#[async_trait]
pub trait DiscountStore: Send + Sync {
  /// Inserts a new, unused code. Fails with `DuplicateCode` if the code
  /// string is already registered (used or not).
  async fn issue(&self, code: &str, kind: DiscountKind, value: i64) -> StoreResult<()>;

  /// Looks up an *unused* code by exact, case-sensitive match and returns
  /// its kind and value without consuming it. An absent code and an
  /// already-used code both fail `InvalidDiscountCode` — callers cannot
  /// tell the two apart.
  async fn validate(&self, code: &str) -> StoreResult<(DiscountKind, i64)>;

  /// Validates and marks the code used in one atomic operation, returning
  /// its kind and value. Failure condition is identical to [`validate`].
  ///
  /// Must never be implemented as a separate read followed by a write:
  /// two concurrent consumers of the same code race otherwise, and exactly
  /// one of them is allowed to win.
  ///
  /// [`validate`]: DiscountStore::validate
  async fn consume(&self, code: &str) -> StoreResult<(DiscountKind, i64)>;

  /// Every code ever issued, used or not, for the admin history view.
  async fn list(&self) -> StoreResult<Vec<DiscountCode>>;
}

/// In-memory registry. A single mutex over the code list makes
/// check-and-mark in `consume` one critical section.
#[derive(Debug, Default)]
pub struct InMemoryDiscountStore {
  codes: Mutex<Vec<DiscountCode>>,
}

impl InMemoryDiscountStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl DiscountStore for InMemoryDiscountStore {
  async fn issue(&self, code: &str, kind: DiscountKind, value: i64) -> StoreResult<()> {
    let mut codes = self.codes.lock();
    if codes.iter().any(|c| c.code == code) {
      return Err(StoreError::DuplicateCode(code.to_string()));
    }
    codes.push(DiscountCode::new(code, kind, value));
    info!(code, ?kind, value, "Issued discount code.");
    Ok(())
  }

  async fn validate(&self, code: &str) -> StoreResult<(DiscountKind, i64)> {
    self
      .codes
      .lock()
      .iter()
      .find(|c| c.code == code && !c.is_used)
      .map(|c| (c.kind, c.value))
      .ok_or(StoreError::InvalidDiscountCode)
  }

  async fn consume(&self, code: &str) -> StoreResult<(DiscountKind, i64)> {
    let mut codes = self.codes.lock();
    match codes.iter_mut().find(|c| c.code == code && !c.is_used) {
      Some(entry) => {
        entry.is_used = true;
        debug!(code, "Discount code consumed.");
        Ok((entry.kind, entry.value))
      }
      None => Err(StoreError::InvalidDiscountCode),
    }
  }

  async fn list(&self) -> StoreResult<Vec<DiscountCode>> {
    Ok(self.codes.lock().clone())
  }
}
