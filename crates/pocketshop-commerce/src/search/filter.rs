//! Search filter types.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Minimum-rating choices offered by the filter panel.
pub const RATING_CHOICES: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

/// Label for a minimum-rating choice: `All` for zero, `n+` otherwise.
pub fn rating_choice_label(min_rating: f64) -> String {
    if min_rating <= 0.0 {
        "All".to_string()
    } else {
        format!("{}+", min_rating)
    }
}

/// Parse a price typed into a filter field.
///
/// Blank, non-numeric and non-finite input all mean "unset".
pub fn parse_price(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Price and rating criteria, as entered by the user.
///
/// Prices are kept as raw field text so a draft can be shown back to the user
/// exactly as typed; [`FilterCriteria::effective_min`] and
/// [`FilterCriteria::effective_max`] do the parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Minimum price field text.
    pub min_price: String,
    /// Maximum price field text.
    pub max_price: String,
    /// Minimum average rating.
    pub min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_price: String::new(),
            max_price: String::new(),
            min_rating: 0.0,
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum price field.
    pub fn with_min_price(mut self, text: impl Into<String>) -> Self {
        self.min_price = text.into();
        self
    }

    /// Set the maximum price field.
    pub fn with_max_price(mut self, text: impl Into<String>) -> Self {
        self.max_price = text.into();
        self
    }

    /// Set the minimum rating.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Lower price bound; zero when unset.
    pub fn effective_min(&self) -> f64 {
        parse_price(&self.min_price).unwrap_or(0.0)
    }

    /// Upper price bound; infinite when unset.
    pub fn effective_max(&self) -> f64 {
        parse_price(&self.max_price).unwrap_or(f64::INFINITY)
    }

    /// Whether every field is at its default.
    pub fn is_default(&self) -> bool {
        parse_price(&self.min_price).is_none()
            && parse_price(&self.max_price).is_none()
            && self.min_rating <= 0.0
    }

    /// Build the filters these criteria stand for.
    pub fn filters(&self) -> [Filter; 2] {
        [
            Filter::price_range(self.effective_min(), self.effective_max()),
            Filter::rating(self.min_rating),
        ]
    }
}

/// A single predicate over products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Case-insensitive substring match on title or category.
    /// Holds the needle already lowercased.
    Text(String),
    /// Inclusive price range.
    PriceRange { min: f64, max: f64 },
    /// Minimum average rating.
    Rating { min: f64 },
}

impl Filter {
    /// Create a text filter.
    pub fn text(query: &str) -> Self {
        Filter::Text(query.to_lowercase())
    }

    /// Create a price range filter.
    pub fn price_range(min: f64, max: f64) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a rating filter.
    pub fn rating(min: f64) -> Self {
        Filter::Rating { min }
    }

    /// Check a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => {
                needle.is_empty()
                    || product.title.to_lowercase().contains(needle.as_str())
                    || product.category.to_lowercase().contains(needle.as_str())
            }
            Filter::PriceRange { min, max } => product.price >= *min && product.price <= *max,
            Filter::Rating { min } => product.rating.rate >= *min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoe() -> Product {
        Product::new(1, "Red Shoe", "shoes", 20.0).with_rating(4.5, 10)
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price(" 7 "), Some(7.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("NaN"), None);
    }

    #[test]
    fn test_effective_bounds() {
        let criteria = FilterCriteria::new();
        assert_eq!(criteria.effective_min(), 0.0);
        assert_eq!(criteria.effective_max(), f64::INFINITY);

        let criteria = FilterCriteria::new().with_min_price("5").with_max_price("50");
        assert_eq!(criteria.effective_min(), 5.0);
        assert_eq!(criteria.effective_max(), 50.0);
    }

    #[test]
    fn test_invalid_min_price_equals_unset() {
        let invalid = FilterCriteria::new().with_min_price("abc");
        let unset = FilterCriteria::new();
        assert_eq!(invalid.filters(), unset.filters());
        assert!(invalid.is_default());
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        assert!(Filter::text("SHOE").matches(&shoe()));
        assert!(Filter::text("Shoes").matches(&shoe()));
        assert!(!Filter::text("hat").matches(&shoe()));
        assert!(Filter::text("").matches(&shoe()));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        assert!(Filter::price_range(20.0, 20.0).matches(&shoe()));
        assert!(!Filter::price_range(20.01, 100.0).matches(&shoe()));
        assert!(!Filter::price_range(30.0, 10.0).matches(&shoe()));
    }

    #[test]
    fn test_rating_filter() {
        assert!(Filter::rating(4.5).matches(&shoe()));
        assert!(!Filter::rating(4.6).matches(&shoe()));
    }

    #[test]
    fn test_rating_choice_labels() {
        let labels: Vec<String> = RATING_CHOICES.iter().map(|r| rating_choice_label(*r)).collect();
        assert_eq!(labels, vec!["All", "1+", "2+", "3+", "4+"]);
    }
}
