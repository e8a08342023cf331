// server/src/main.rs

use storefront_server::config::AppConfig;
use storefront_server::state::AppState;
use storefront_server::web;

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;
use storefront_core::{InMemoryCartStore, InMemoryCatalog, InMemoryDiscountStore, InMemoryOrderStore, Storefront};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

// Main function
#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Build the engine: seeded catalog, empty ledgers, injected into the
  // orchestrator. Seeding happens exactly once, here.
  let storefront = Arc::new(Storefront::new(
    Arc::new(InMemoryCatalog::seeded()),
    Arc::new(InMemoryCartStore::new()),
    Arc::new(InMemoryDiscountStore::new()),
    Arc::new(InMemoryOrderStore::new()),
    app_config.reward_interval,
  ));
  tracing::info!(
    reward_interval = app_config.reward_interval,
    "Storefront engine initialized with seeded catalog."
  );

  // Create AppState
  let app_state = AppState {
    storefront,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::routes::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
