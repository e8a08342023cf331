// tests/cart_store_tests.rs
mod common; // Reference the common module

use common::{fresh_shop, setup_tracing};
use storefront_core::{CartStore, StoreError};

#[tokio::test]
async fn get_for_unknown_user_is_empty() {
  setup_tracing();
  let shop = fresh_shop(3);
  assert!(shop.storefront.cart("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn add_inserts_then_merges() {
  setup_tracing();
  let shop = fresh_shop(3);

  let cart = shop.storefront.add_to_cart("u1", "p1", 2).await.unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart[0].quantity, 2);

  let cart = shop.storefront.add_to_cart("u1", "p1", 3).await.unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart[0].quantity, 5);
}

#[tokio::test]
async fn negative_delta_decrements_and_removes_at_zero() {
  setup_tracing();
  let shop = fresh_shop(3);

  shop.storefront.add_to_cart("u1", "p1", 3).await.unwrap();
  let cart = shop.storefront.add_to_cart("u1", "p1", -1).await.unwrap();
  assert_eq!(cart[0].quantity, 2);

  // Dropping to exactly zero removes the line, it is never kept at zero.
  let cart = shop.storefront.add_to_cart("u1", "p1", -2).await.unwrap();
  assert!(cart.is_empty());

  // Overshooting below zero removes it too.
  shop.storefront.add_to_cart("u1", "p2", 1).await.unwrap();
  let cart = shop.storefront.add_to_cart("u1", "p2", -99).await.unwrap();
  assert!(cart.is_empty());
}

#[tokio::test]
async fn non_positive_delta_for_absent_line_is_a_noop() {
  setup_tracing();
  let shop = fresh_shop(3);

  let cart = shop.storefront.add_to_cart("u1", "p1", 0).await.unwrap();
  assert!(cart.is_empty());
  let cart = shop.storefront.add_to_cart("u1", "p1", -4).await.unwrap();
  assert!(cart.is_empty());
}

#[tokio::test]
async fn unknown_product_is_rejected_before_any_mutation() {
  setup_tracing();
  let shop = fresh_shop(3);

  let err = shop.storefront.add_to_cart("u1", "not-a-product", 1).await.unwrap_err();
  assert!(matches!(err, StoreError::ProductNotFound(id) if id == "not-a-product"));
  assert!(shop.storefront.cart("u1").await.unwrap().is_empty());
}

#[tokio::test]
async fn lines_keep_insertion_order_across_users() {
  setup_tracing();
  let shop = fresh_shop(3);

  shop.storefront.add_to_cart("u1", "p2", 1).await.unwrap();
  shop.storefront.add_to_cart("u1", "p1", 1).await.unwrap();
  shop.storefront.add_to_cart("u2", "p3", 7).await.unwrap();

  let cart = shop.storefront.cart("u1").await.unwrap();
  assert_eq!(cart[0].product_id, "p2");
  assert_eq!(cart[1].product_id, "p1");

  let other = shop.storefront.cart("u2").await.unwrap();
  assert_eq!(other.len(), 1);
  assert_eq!(other[0].quantity, 7);
}

#[tokio::test]
async fn clear_empties_but_retains_the_key() {
  setup_tracing();
  let shop = fresh_shop(3);

  shop.storefront.add_to_cart("u1", "p1", 2).await.unwrap();
  shop.carts.clear("u1").await.unwrap();
  assert!(shop.storefront.cart("u1").await.unwrap().is_empty());

  // The cart is still usable afterwards.
  let cart = shop.storefront.add_to_cart("u1", "p1", 1).await.unwrap();
  assert_eq!(cart.len(), 1);
}

#[tokio::test]
async fn concurrent_merges_to_one_cart_lose_nothing() {
  setup_tracing();
  let shop = fresh_shop(3);
  let sf = shop.storefront.clone();

  let mut handles = Vec::new();
  for _ in 0..20 {
    let sf = sf.clone();
    handles.push(tokio::spawn(async move { sf.add_to_cart("u1", "p1", 1).await }));
  }
  for handle in handles {
    handle.await.unwrap().unwrap();
  }

  let cart = shop.storefront.cart("u1").await.unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart[0].quantity, 20);
}
