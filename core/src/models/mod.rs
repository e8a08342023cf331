// core/src/models/mod.rs

//! Data structures shared by the stores and the checkout orchestrator.

pub mod cart_line;
pub mod discount;
pub mod order;
pub mod product;

pub use cart_line::CartLine;
pub use discount::{DiscountCode, DiscountKind};
pub use order::Order;
pub use product::Product;
