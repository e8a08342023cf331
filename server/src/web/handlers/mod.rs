// server/src/web/handlers/mod.rs

pub mod admin_handlers;
pub mod cart_handlers;
pub mod checkout_handlers;
pub mod discount_handlers;
pub mod product_handlers;
