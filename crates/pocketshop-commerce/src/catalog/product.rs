//! Product record types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Highest value a rating can take.
pub const MAX_RATING: f64 = 5.0;

/// Aggregate customer rating of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average score in `[0, 5]`.
    pub rate: f64,
    /// Number of ratings behind the average.
    pub count: u64,
}

impl Rating {
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }

    /// Whole stars to light when rendering, rounding half up like the
    /// storefront's star row does.
    pub fn rounded_stars(&self) -> u8 {
        let clamped = self.rate.clamp(0.0, MAX_RATING);
        (clamped + 0.5).floor() as u8
    }
}

/// A product in the catalog.
///
/// Records are produced by the product source and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Category name (free text, e.g. "men's clothing").
    pub category: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Customer rating.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Create a product with empty description and image.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.into(),
            category: category.into(),
            price,
            description: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating::new(rate, count);
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Price formatted for display, e.g. `$109.95` or `$20`.
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price the way product cards show it: a dollar sign followed by
/// the shortest decimal form of the number.
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}
