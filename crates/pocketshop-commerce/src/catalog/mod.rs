//! Product catalog module.
//!
//! Contains the product record and the fetched catalog it lives in.

mod product;

pub use product::{format_price, Product, Rating, MAX_RATING};

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The full product list, as fetched from the product source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from fetched products, keeping source order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a JSON array of product records.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_slice(bytes)?;
        Ok(Self::new(products))
    }

    /// Look up a product by ID.
    pub fn get(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
