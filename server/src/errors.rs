// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use storefront_core::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Storefront Error: {source}")]
  Store {
    #[from] // Allows conversion from StoreError
    source: StoreError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Allow anyhow::Error to be converted into AppError::Internal for convenience in handlers
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"success": false, "message": m})),
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"success": false, "message": m})),
      AppError::Config(m) => HttpResponse::InternalServerError()
        .json(json!({"success": false, "message": "Configuration issue", "detail": m})),
      AppError::Store { source } => store_error_response(source),
      AppError::Internal(_) => {
        // Internal detail is logged above, never sent to the caller.
        HttpResponse::InternalServerError().json(json!({"success": false, "message": "Processing failed"}))
      }
    }
  }
}

/// Maps engine errors onto the HTTP contract: 400 for caller/validation and
/// state-conflict errors, 404 for missing referenced entities, 500 for
/// anything unexpected.
fn store_error_response(err: &StoreError) -> HttpResponse {
  match err {
    StoreError::EmptyCart => HttpResponse::BadRequest().json(json!({"success": false, "message": "Cart is empty"})),
    StoreError::InvalidDiscountCode => {
      HttpResponse::BadRequest().json(json!({"success": false, "message": "Invalid or expired discount code"}))
    }
    StoreError::ProductNotFound(id) => {
      HttpResponse::NotFound().json(json!({"success": false, "message": format!("Product not found: {id}")}))
    }
    // The diagnostic counter state surfaces in the body so the admin view
    // can display how far away the next milestone is.
    StoreError::RewardConditionNotMet { current, n } => HttpResponse::BadRequest().json(json!({
      "success": false,
      "message": "Condition not met (Order count is not a multiple of n)",
      "currentCount": current,
      "n": n,
    })),
    StoreError::DuplicateCode(_) | StoreError::Internal { .. } => {
      HttpResponse::InternalServerError().json(json!({"success": false, "message": "Processing failed"}))
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
