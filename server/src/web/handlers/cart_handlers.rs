// server/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

// --- Request DTOs ---
//
// Fields are optional so that a missing field produces this API's own
// `{success: false, message}` shape instead of the framework's generic
// deserialization error.

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GetCartQuery {
  pub user_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequestPayload {
  pub user_id: Option<String>,
  pub product_id: Option<String>,
  /// Quantity delta: positive adds, negative removes, zero-or-below
  /// results drop the line.
  pub quantity: Option<i64>,
}

// --- Handler Implementations ---

#[instrument(name = "handler::get_cart", skip(app_state, query))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  query: web::Query<GetCartQuery>,
) -> Result<HttpResponse, AppError> {
  let user_id = query
    .user_id
    .as_deref()
    .filter(|id| !id.is_empty())
    .ok_or_else(|| AppError::Validation("Missing userId query parameter".to_string()))?;

  let cart = app_state.storefront.cart(user_id).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "cart": cart
  })))
}

#[instrument(name = "handler::update_cart", skip(app_state, payload))]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<UpdateCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let (user_id, product_id, quantity) = match (&payload.user_id, &payload.product_id, payload.quantity) {
    (Some(user_id), Some(product_id), Some(quantity)) if !user_id.is_empty() && !product_id.is_empty() => {
      (user_id.as_str(), product_id.as_str(), quantity)
    }
    _ => {
      warn!("Cart update rejected: missing userId, productId, or quantity.");
      return Err(AppError::Validation(
        "Missing userId, productId, or quantity".to_string(),
      ));
    }
  };

  let cart = app_state.storefront.add_to_cart(user_id, product_id, quantity).await?;
  info!(user_id, product_id, quantity, "Cart updated; {} line(s) now in cart.", cart.len());

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "cart": cart
  })))
}
