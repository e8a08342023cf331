// server/src/state.rs

use crate::config::AppConfig;
use std::sync::Arc;
use storefront_core::Storefront;

#[derive(Clone)]
pub struct AppState {
  pub storefront: Arc<Storefront>,
  pub config: Arc<AppConfig>, // Share loaded config
}
