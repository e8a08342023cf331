// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;

use storefront_core::{
  DiscountKind, InMemoryCartStore, InMemoryCatalog, InMemoryDiscountStore, InMemoryOrderStore, Product, Storefront,
};

pub fn setup_tracing() {
  // try_init: the first test in the binary wins, the rest are no-ops.
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// A fresh engine plus direct handles to its concrete stores, so tests can
/// pre-populate carts and codes without going through the public API.
pub struct TestShop {
  pub storefront: Arc<Storefront>,
  pub carts: Arc<InMemoryCartStore>,
  pub discounts: Arc<InMemoryDiscountStore>,
  pub orders: Arc<InMemoryOrderStore>,
}

/// Small fixed catalog with round prices, in cents.
pub fn test_products() -> Vec<Product> {
  let product = |id: &str, name: &str, price_cents: i64| Product {
    id: id.to_string(),
    name: name.to_string(),
    description: format!("{name} (test)"),
    price_cents,
    image_url: format!("https://img.example/{id}.jpg"),
  };
  vec![
    product("p1", "Widget", 1000),
    product("p2", "Gadget", 2500),
    product("p3", "Doodad", 499),
  ]
}

/// Builds a fresh, isolated shop with the test catalog and the given
/// reward interval. Every test gets its own state; nothing is global.
pub fn fresh_shop(reward_interval: u64) -> TestShop {
  let catalog = Arc::new(InMemoryCatalog::new(test_products()));
  let carts = Arc::new(InMemoryCartStore::new());
  let discounts = Arc::new(InMemoryDiscountStore::new());
  let orders = Arc::new(InMemoryOrderStore::new());

  let storefront = Arc::new(Storefront::new(
    catalog,
    carts.clone(),
    discounts.clone(),
    orders.clone(),
    reward_interval,
  ));

  TestShop {
    storefront,
    carts,
    discounts,
    orders,
  }
}

/// Issues a code directly into the registry, panicking on duplicates.
pub async fn seed_code(shop: &TestShop, code: &str, kind: DiscountKind, value: i64) {
  use storefront_core::DiscountStore;
  shop
    .discounts
    .issue(code, kind, value)
    .await
    .expect("seeding a fresh code must succeed");
}
