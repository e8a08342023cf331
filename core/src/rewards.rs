// core/src/rewards.rs

//! Reward code shapes for the two issuance paths.
//!
//! The automatic milestone trigger (fired inline by checkout) mints a
//! percentage code; the on-demand admin path mints a fixed-amount code.
//! The asymmetry between the two paths is intentional product behavior,
//! not an accident (see DESIGN.md).

use uuid::Uuid;

use crate::models::DiscountKind;

/// Default milestone interval: every 3rd completed order mints a reward.
pub const DEFAULT_REWARD_INTERVAL: u64 = 3;

/// Shape of the code minted automatically on every Nth checkout: 10% off.
pub const CHECKOUT_REWARD: (DiscountKind, i64) = (DiscountKind::Percentage, 10);

/// Shape of the code minted by the on-demand admin action: 50 currency
/// units off, in cents.
pub const ADMIN_REWARD: (DiscountKind, i64) = (DiscountKind::Fixed, 5000);

/// Fresh `DISCOUNT-XXXXXXXX` code string for checkout-triggered rewards.
pub fn checkout_reward_code() -> String {
  format!("DISCOUNT-{}", code_suffix())
}

/// Fresh `LUCKY-XXXXXXXX` code string for admin-triggered rewards.
pub fn admin_reward_code() -> String {
  format!("LUCKY-{}", code_suffix())
}

fn code_suffix() -> String {
  Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}
