// server/src/web/handlers/discount_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ValidateCodeRequestPayload {
  pub code: Option<String>,
}

/// Checks a discount code without consuming it, so the client can preview
/// the reduction before committing to checkout. A nonexistent code and an
/// already-used one are answered identically.
#[instrument(name = "handler::validate_code", skip(app_state, payload))]
pub async fn validate_code_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ValidateCodeRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let code = payload
    .code
    .as_deref()
    .filter(|c| !c.is_empty())
    .ok_or_else(|| AppError::Validation("Code is required".to_string()))?;

  let (kind, value) = app_state.storefront.validate_code(code).await?;

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "discountType": kind,
      "value": value
  })))
}
