// core/src/stores/catalog.rs

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::Product;

/// Read-only product catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
  /// Full catalog snapshot.
  async fn list(&self) -> StoreResult<Vec<Product>>;

  /// Single product lookup by id.
  async fn get(&self, product_id: &str) -> StoreResult<Option<Product>>;
}

/// In-memory catalog, fixed at construction time.
///
/// Seeding happens exactly once, explicitly, when the process entry point
/// calls [`InMemoryCatalog::seeded`] (or hands its own product list to
/// [`InMemoryCatalog::new`]). There is no implicit re-seed on access.
#[derive(Debug)]
pub struct InMemoryCatalog {
  products: Vec<Product>,
}

impl InMemoryCatalog {
  pub fn new(products: Vec<Product>) -> Self {
    Self { products }
  }

  /// The demo catalog: six products, prices in cents.
  pub fn seeded() -> Self {
    let product = |id: &str, name: &str, description: &str, price_cents: i64, image_url: &str| Product {
      id: id.to_string(),
      name: name.to_string(),
      description: description.to_string(),
      price_cents,
      image_url: image_url.to_string(),
    };

    Self::new(vec![
      product(
        "p1",
        "Wireless Noise-Canceling Headphones",
        "Immerse yourself in music with industry-leading noise cancellation.",
        29999,
        "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=800&q=80",
      ),
      product(
        "p2",
        "Smart Fitness Watch",
        "Track your health, workouts, and sleep with precision.",
        14950,
        "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800&q=80",
      ),
      product(
        "p3",
        "Portable Bluetooth Speaker",
        "Powerful sound in a compact, waterproof design.",
        7999,
        "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=800&q=80",
      ),
      product(
        "p4",
        "4K Ultra HD Action Camera",
        "Capture your adventures in stunning detail.",
        19900,
        "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=800&q=80",
      ),
      product(
        "p5",
        "Professional USB Microphone",
        "Studio-quality audio for podcasting, streaming, and recording.",
        15900,
        "https://images.unsplash.com/photo-1590602847861-f357a9332bbc?w=800&q=80",
      ),
      product(
        "p6",
        "Minimalist Leather Backpack",
        "Stylish and durable, perfect for daily commute.",
        8995,
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=800&q=80",
      ),
    ])
  }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
  async fn list(&self) -> StoreResult<Vec<Product>> {
    Ok(self.products.clone())
  }

  async fn get(&self, product_id: &str) -> StoreResult<Option<Product>> {
    Ok(self.products.iter().find(|p| p.id == product_id).cloned())
  }
}
