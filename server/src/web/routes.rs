// server/src/web/routes.rs

use actix_web::web;

// Simple liveness probe; the engine is in-process memory, so there is no
// downstream dependency to check.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by the route tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Catalog
      .route(
        "/products",
        web::get().to(crate::web::handlers::product_handlers::list_products_handler),
      )
      // Cart Routes
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::get_cart_handler))
          .route(
            "",
            web::post().to(crate::web::handlers::cart_handlers::update_cart_handler),
          ),
      )
      // Discount validation (non-consuming preview)
      .route(
        "/validate-code",
        web::post().to(crate::web::handlers::discount_handlers::validate_code_handler),
      )
      // Checkout
      .route(
        "/checkout",
        web::post().to(crate::web::handlers::checkout_handlers::checkout_handler),
      )
      // Admin Routes
      .service(
        web::scope("/admin")
          .route(
            "/stats",
            web::get().to(crate::web::handlers::admin_handlers::stats_handler),
          )
          .route(
            "/discount",
            web::post().to(crate::web::handlers::admin_handlers::generate_discount_handler),
          ),
      ),
  );
}
