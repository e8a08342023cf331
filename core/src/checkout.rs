// core/src/checkout.rs

//! The checkout orchestrator: the one component that ties catalog, carts,
//! discounts, the order ledger, and the reward trigger together.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::{CartLine, DiscountCode, DiscountKind, Order, Product};
use crate::pricing;
use crate::rewards;
use crate::stores::{Catalog, CartStore, DiscountStore, OrderStore};

/// What a successful checkout hands back to the caller.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
  pub order_id: Uuid,
  /// Final charge after any discount, in cents.
  pub total_amount_cents: i64,
  /// How much the applied code took off, in cents. Zero without a code.
  pub discount_amount_cents: i64,
  /// Present when this checkout crossed a reward milestone and a fresh
  /// code was minted into the registry.
  pub reward_code: Option<String>,
}

/// The storefront engine. Explicitly constructed with injected
/// repositories — there is no global state; tests build a fresh one each.
///
/// A checkout request moves through Pending -> Priced -> Discounted ->
/// Committed, or ends Rejected at any step before commit. Every failure
/// before the order commit leaves carts, the discount registry, and the
/// order ledger untouched.
pub struct Storefront {
  catalog: Arc<dyn Catalog>,
  carts: Arc<dyn CartStore>,
  discounts: Arc<dyn DiscountStore>,
  orders: Arc<dyn OrderStore>,
  reward_interval: u64,
}

impl Storefront {
  pub fn new(
    catalog: Arc<dyn Catalog>,
    carts: Arc<dyn CartStore>,
    discounts: Arc<dyn DiscountStore>,
    orders: Arc<dyn OrderStore>,
    reward_interval: u64,
  ) -> Self {
    Self {
      catalog,
      carts,
      discounts,
      orders,
      reward_interval,
    }
  }

  /// Catalog snapshot for the product listing.
  pub async fn products(&self) -> StoreResult<Vec<Product>> {
    self.catalog.list().await
  }

  /// The user's current cart.
  pub async fn cart(&self, user_id: &str) -> StoreResult<Vec<CartLine>> {
    self.carts.get(user_id).await
  }

  /// Applies a quantity delta to the user's cart after checking the
  /// product actually exists in the catalog.
  #[instrument(name = "storefront::add_to_cart", skip(self))]
  pub async fn add_to_cart(&self, user_id: &str, product_id: &str, delta: i64) -> StoreResult<Vec<CartLine>> {
    if self.catalog.get(product_id).await?.is_none() {
      warn!(product_id, "Rejected cart mutation for unknown product.");
      return Err(StoreError::ProductNotFound(product_id.to_string()));
    }
    self.carts.add_or_merge(user_id, product_id, delta).await
  }

  /// Checks a discount code without consuming it.
  pub async fn validate_code(&self, code: &str) -> StoreResult<(DiscountKind, i64)> {
    self.discounts.validate(code).await
  }

  /// Runs one checkout end to end: price the cart, consume the optional
  /// discount code, commit the order, fire the milestone reward check,
  /// and clear the cart.
  #[instrument(name = "storefront::checkout", skip(self, discount_code), fields(has_code = discount_code.is_some()))]
  pub async fn checkout(&self, user_id: &str, discount_code: Option<&str>) -> StoreResult<CheckoutReceipt> {
    // Load. An absent cart and an empty one are the same rejection.
    let lines = self.carts.get(user_id).await?;
    if lines.is_empty() {
      return Err(StoreError::EmptyCart);
    }

    // Price against the current catalog snapshot.
    let products = self.catalog.list().await?;
    let subtotal = pricing::subtotal(&lines, &products);

    // Resolve the discount. Consuming validates and marks used in one
    // atomic step; a bad code rejects the whole checkout, and nothing has
    // been mutated yet at that point.
    let discount = match discount_code {
      Some(code) => match self.discounts.consume(code).await {
        Ok(applied) => Some(applied),
        Err(StoreError::InvalidDiscountCode) => {
          warn!("Checkout rejected: invalid or expired discount code.");
          return Err(StoreError::InvalidDiscountCode);
        }
        Err(other) => return Err(other),
      },
      None => None,
    };

    let total = pricing::apply_discount(subtotal, discount);
    let discount_amount = subtotal - total;

    // Commit. From here on the order exists; counter increment, reward
    // check, and cart clear all follow unconditionally.
    let order = Order {
      id: Uuid::new_v4(),
      user_id: user_id.to_string(),
      items: lines.clone(),
      total_amount_cents: total,
      discount_amount_cents: discount_amount,
      discount_code: discount_code.map(str::to_string),
      created_at: Utc::now(),
    };
    let order_id = order.id;
    let count = self.orders.commit(order).await?;

    let reward_code = if pricing::is_nth_order(count, self.reward_interval) {
      let code = rewards::checkout_reward_code();
      let (kind, value) = rewards::CHECKOUT_REWARD;
      self.discounts.issue(&code, kind, value).await?;
      info!(order_count = count, %code, "Milestone reached; minted reward code.");
      Some(code)
    } else {
      None
    };

    self.carts.clear(user_id).await?;

    info!(%order_id, total_cents = total, discount_cents = discount_amount, "Checkout completed.");
    Ok(CheckoutReceipt {
      order_id,
      total_amount_cents: total,
      discount_amount_cents: discount_amount,
      reward_code,
    })
  }

  /// The on-demand admin reward path. Reads the *current* counter without
  /// incrementing it; mints a fixed-amount code only if the count is
  /// already a positive multiple of the interval, otherwise reports the
  /// counter state back for diagnostic display.
  #[instrument(name = "storefront::generate_reward_code", skip(self))]
  pub async fn generate_reward_code(&self) -> StoreResult<String> {
    let current = self.orders.count().await?;
    if !pricing::is_nth_order(current, self.reward_interval) {
      return Err(StoreError::RewardConditionNotMet {
        current,
        n: self.reward_interval,
      });
    }

    let code = rewards::admin_reward_code();
    let (kind, value) = rewards::ADMIN_REWARD;
    self.discounts.issue(&code, kind, value).await?;
    info!(order_count = current, %code, "Admin-triggered reward code minted.");
    Ok(code)
  }

  /// Read-only aggregate over the order ledger and the discount registry
  /// for the admin dashboard.
  pub async fn stats(&self) -> StoreResult<ShopStats> {
    let orders = self.orders.all().await?;
    let order_count = self.orders.count().await?;
    let codes = self.discounts.list().await?;

    let total_items_purchased: i64 = orders
      .iter()
      .map(|o| o.items.iter().map(|line| line.quantity).sum::<i64>())
      .sum();
    let total_revenue_cents: i64 = orders.iter().map(|o| o.total_amount_cents).sum();
    let total_discount_given_cents: i64 = orders.iter().map(|o| o.discount_amount_cents).sum();

    Ok(ShopStats {
      total_items_purchased,
      total_revenue_cents,
      total_discount_given_cents,
      order_count,
      orders,
      discount_codes: codes,
    })
  }
}

/// Aggregate numbers for the admin dashboard. Pure summation over the two
/// ledgers, no logic of its own.
#[derive(Debug, Clone)]
pub struct ShopStats {
  pub total_items_purchased: i64,
  pub total_revenue_cents: i64,
  pub total_discount_given_cents: i64,
  pub order_count: u64,
  pub orders: Vec<Order>,
  pub discount_codes: Vec<DiscountCode>,
}
