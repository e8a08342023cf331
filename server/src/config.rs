// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;

use storefront_core::rewards::DEFAULT_REWARD_INTERVAL;

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Milestone interval N: every Nth completed order mints a reward code.
  /// Fixed for the lifetime of the process, not adjustable at runtime.
  pub reward_interval: u64,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let reward_interval = get_env("REWARD_INTERVAL")
      .unwrap_or_else(|_| DEFAULT_REWARD_INTERVAL.to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid REWARD_INTERVAL: {}", e)))?;
    if reward_interval == 0 {
      return Err(AppError::Config("REWARD_INTERVAL must be at least 1".to_string()));
    }

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      reward_interval,
    })
  }
}
