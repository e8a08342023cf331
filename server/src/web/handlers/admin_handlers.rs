// server/src/web/handlers/admin_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

/// Read-only aggregate over the order ledger and the discount registry.
#[instrument(name = "handler::admin_stats", skip(app_state))]
pub async fn stats_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let stats = app_state.storefront.stats().await?;

  let discount_codes: Vec<_> = stats
    .discount_codes
    .iter()
    .map(|c| json!({"code": c.code, "isUsed": c.is_used}))
    .collect();

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "stats": {
          "totalItemsPurchased": stats.total_items_purchased,
          "totalRevenue": stats.total_revenue_cents,
          "totalDiscountGiven": stats.total_discount_given_cents,
          "discountCodes": discount_codes,
          "orderCount": stats.order_count,
          "orders": stats.orders, // Expose orders for history view
      }
  })))
}

/// The on-demand reward path: mints a fixed-amount code if the current
/// order count already sits on a milestone, without touching the counter.
#[instrument(name = "handler::admin_generate_discount", skip(app_state))]
pub async fn generate_discount_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let code = app_state.storefront.generate_reward_code().await?;
  info!(%code, "Admin generated a discount code.");

  Ok(HttpResponse::Ok().json(json!({
      "success": true,
      "message": "Discount code generated successfully",
      "code": code
  })))
}
