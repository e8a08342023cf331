// core/src/stores/mod.rs

//! Repository traits and their in-memory implementations.
//!
//! The orchestrator only ever sees the traits; the in-memory variants here
//! are one implementation, and a durable backend can be substituted without
//! touching any checkout logic. The in-memory stores guard their state with
//! `parking_lot` locks and never hold a lock across an await point.

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod orders;

pub use cart::{CartStore, InMemoryCartStore};
pub use catalog::{Catalog, InMemoryCatalog};
pub use discount::{DiscountStore, InMemoryDiscountStore};
pub use orders::{InMemoryOrderStore, OrderStore};
