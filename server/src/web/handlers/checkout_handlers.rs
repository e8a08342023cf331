// server/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestPayload {
  pub user_id: Option<String>,
  pub discount_code: Option<String>,
}

#[instrument(name = "handler::checkout", skip(app_state, payload))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CheckoutRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let user_id = payload
    .user_id
    .as_deref()
    .filter(|id| !id.is_empty())
    .ok_or_else(|| AppError::Validation("Missing userId".to_string()))?;

  let receipt = match app_state
    .storefront
    .checkout(user_id, payload.discount_code.as_deref())
    .await
  {
    Ok(receipt) => receipt,
    Err(err) => {
      warn!(user_id, "Checkout failed: {err}");
      return Err(err.into());
    }
  };

  info!(
    user_id,
    order_id = %receipt.order_id,
    reward_minted = receipt.reward_code.is_some(),
    "Order placed successfully."
  );

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "orderId": receipt.order_id,
      "message": "Order placed successfully",
      "rewardCode": receipt.reward_code, // Client should show this if present
  })))
}
