// core/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors the engine surfaces to its caller.
///
/// Validation and not-found conditions carry enough detail to be shown to
/// the caller verbatim; `Internal` wraps anything unexpected and is meant to
/// be logged and converted to a generic failure at the transport boundary.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Cart is empty")]
  EmptyCart,

  /// Covers both "no such code" and "code already used" — the two are
  /// deliberately indistinguishable so callers cannot enumerate which
  /// codes exist or have been spent.
  #[error("Invalid or expired discount code")]
  InvalidDiscountCode,

  #[error("Discount code '{0}' already exists")]
  DuplicateCode(String),

  #[error("Product not found: {0}")]
  ProductNotFound(String),

  /// The on-demand reward generation was requested while the order count
  /// is not a positive multiple of the reward interval. Carries both
  /// values for diagnostic display.
  #[error("Order count {current} is not a positive multiple of {n}")]
  RewardConditionNotMet { current: u64, n: u64 },

  #[error("Internal storefront error. Source: {source}")]
  Internal {
    #[source]
    source: AnyhowError,
  },
}

impl From<AnyhowError> for StoreError {
  fn from(err: AnyhowError) -> Self {
    StoreError::Internal { source: err }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
