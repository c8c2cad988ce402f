//! Product card and product detail view models.

use crate::cart::CartProvider;
use crate::catalog::Product;
use serde::Serialize;

/// Lines of description shown while collapsed.
pub const COLLAPSED_DESCRIPTION_LINES: usize = 3;

/// Number of stars in a rating row.
pub const STAR_COUNT: usize = 5;

/// A product tile in the catalog grid.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    product: &'a Product,
    liked: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            liked: false,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Flip the heart. Likes are local to the card and not stored anywhere.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn price_label(&self) -> String {
        self.product.price_label()
    }
}

/// State of the add-to-cart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddToCartButton {
    /// Product not in cart; pressing adds it.
    Enabled,
    /// Product already in cart; the button is inert.
    Added,
}

impl AddToCartButton {
    pub fn label(&self) -> &'static str {
        match self {
            AddToCartButton::Enabled => "ADD TO CART",
            AddToCartButton::Added => "ADDED TO CART",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, AddToCartButton::Enabled)
    }
}

/// Product detail screen.
#[derive(Debug, Clone)]
pub struct ProductDetail<'a> {
    product: &'a Product,
    liked: bool,
    description_expanded: bool,
}

impl<'a> ProductDetail<'a> {
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            liked: false,
            description_expanded: false,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Lit state for each of the five stars.
    pub fn stars(&self) -> [bool; STAR_COUNT] {
        let lit = self.product.rating.rounded_stars() as usize;
        let mut stars = [false; STAR_COUNT];
        for (i, star) in stars.iter_mut().enumerate() {
            *star = i < lit;
        }
        stars
    }

    /// Rating count as shown next to the stars, e.g. `(120)`.
    pub fn rating_count_label(&self) -> String {
        format!("({})", self.product.rating.count)
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn toggle_description(&mut self) {
        self.description_expanded = !self.description_expanded;
    }

    pub fn is_description_expanded(&self) -> bool {
        self.description_expanded
    }

    /// Line limit for the description, `None` when expanded.
    pub fn description_line_limit(&self) -> Option<usize> {
        (!self.description_expanded).then_some(COLLAPSED_DESCRIPTION_LINES)
    }

    pub fn description_toggle_label(&self) -> &'static str {
        if self.description_expanded {
            "Show less"
        } else {
            "Read more"
        }
    }

    pub fn button(&self, carts: &CartProvider) -> AddToCartButton {
        if carts.is_in_cart(self.product.id) {
            AddToCartButton::Added
        } else {
            AddToCartButton::Enabled
        }
    }

    /// Press the add-to-cart button.
    ///
    /// The button is disabled once the product is in the cart, so this only
    /// adds when the product is absent. Returns `true` if an entry was added.
    pub fn press_add_to_cart(&self, carts: &mut CartProvider) -> bool {
        if !self.button(carts).is_enabled() {
            return false;
        }
        carts.add_to_cart(self.product.id);
        true
    }

    /// Confirmation shown once the product is in the cart.
    pub fn success_message(&self, carts: &CartProvider) -> Option<&'static str> {
        carts
            .is_in_cart(self.product.id)
            .then_some("✓ Added to cart successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(7, "Rain Jacket", "women's clothing", 39.99)
            .with_rating(3.6, 145)
            .with_description("Lightweight and waterproof")
    }

    #[test]
    fn test_stars_follow_rounded_rating() {
        let p = product();
        let detail = ProductDetail::new(&p);
        assert_eq!(detail.stars(), [true, true, true, true, false]);
        assert_eq!(detail.rating_count_label(), "(145)");
    }

    #[test]
    fn test_description_toggle() {
        let p = product();
        let mut detail = ProductDetail::new(&p);
        assert_eq!(detail.description_line_limit(), Some(3));
        assert_eq!(detail.description_toggle_label(), "Read more");

        detail.toggle_description();
        assert_eq!(detail.description_line_limit(), None);
        assert_eq!(detail.description_toggle_label(), "Show less");
    }

    #[test]
    fn test_add_to_cart_disables_button() {
        let p = product();
        let detail = ProductDetail::new(&p);
        let mut carts = CartProvider::new();

        assert_eq!(detail.button(&carts).label(), "ADD TO CART");
        assert_eq!(detail.success_message(&carts), None);

        assert!(detail.press_add_to_cart(&mut carts));
        assert!(!detail.press_add_to_cart(&mut carts));
        assert_eq!(carts.cart_count(), 1);
        assert_eq!(detail.button(&carts), AddToCartButton::Added);
        assert_eq!(detail.button(&carts).label(), "ADDED TO CART");
        assert!(detail.success_message(&carts).is_some());
    }

    #[test]
    fn test_card_like_is_local() {
        let p = product();
        let mut card = ProductCard::new(&p);
        card.toggle_like();
        assert!(card.is_liked());
        assert!(!ProductCard::new(&p).is_liked());
        assert_eq!(card.price_label(), "$39.99");
    }
}
