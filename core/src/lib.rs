// core/src/lib.rs

//! Storefront core: the order/discount/reward engine.
//!
//! The engine turns per-user carts into committed orders:
//!  - A read-only product catalog, seeded once at startup.
//!  - A per-user cart ledger with atomic merge-delta semantics.
//!  - A registry of single-use discount codes with atomic
//!    validate-and-consume.
//!  - Pure pricing math (subtotal, discount application, milestone
//!    predicate).
//!  - An append-only order ledger sharing a critical section with the
//!    global order counter.
//!  - A milestone reward trigger that mints fresh codes on every Nth
//!    completed order, plus an on-demand admin variant.
//!
//! Everything is wired together by [`Storefront`], which owns nothing but
//! `Arc`s to repository traits — swap any store implementation without
//! touching checkout logic.

// Declare modules according to the planned structure
pub mod checkout;
pub mod error;
pub mod models;
pub mod pricing;
pub mod rewards;
pub mod stores;

// --- Re-exports for the Public API ---

pub use crate::checkout::{CheckoutReceipt, ShopStats, Storefront};
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{CartLine, DiscountCode, DiscountKind, Order, Product};
pub use crate::stores::{
  Catalog, CartStore, DiscountStore, InMemoryCartStore, InMemoryCatalog, InMemoryDiscountStore, InMemoryOrderStore,
  OrderStore,
};
