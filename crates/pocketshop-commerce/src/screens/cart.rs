//! Cart screen and cart badge.

use crate::cart::Cart;
use crate::ids::ProductId;
use serde::Serialize;

/// One row on the cart screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    /// Stable row key: duplicates of the same product get distinct keys.
    pub key: String,
    pub product_id: ProductId,
}

/// What the cart screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CartScreen {
    Empty {
        title: &'static str,
        subtitle: &'static str,
    },
    Items {
        title: &'static str,
        subtitle: String,
        rows: Vec<CartRow>,
    },
}

impl CartScreen {
    pub fn from_cart(cart: &Cart) -> Self {
        if cart.is_empty() {
            return CartScreen::Empty {
                title: "Your cart is empty",
                subtitle: "Add products to get started",
            };
        }

        let rows = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, id)| CartRow {
                key: format!("{}-{}", id, index),
                product_id: *id,
            })
            .collect();

        CartScreen::Items {
            title: "Shopping Cart",
            subtitle: format!("{} items", cart.cart_count()),
            rows,
        }
    }
}

/// Badge text for the cart tab; hidden when the cart is empty.
pub fn cart_badge(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_screen() {
        let screen = CartScreen::from_cart(&Cart::new());
        assert!(matches!(screen, CartScreen::Empty { title: "Your cart is empty", .. }));
    }

    #[test]
    fn test_rows_keyed_by_id_and_position() {
        let mut cart = Cart::new();
        cart.add_to_cart(ProductId::new(3));
        cart.add_to_cart(ProductId::new(3));
        cart.add_to_cart(ProductId::new(8));

        match CartScreen::from_cart(&cart) {
            CartScreen::Items { subtitle, rows, .. } => {
                assert_eq!(subtitle, "3 items");
                let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
                assert_eq!(keys, vec!["3-0", "3-1", "8-2"]);
            }
            other => panic!("expected items, got {:?}", other),
        }
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        assert_eq!(cart_badge(0), None);
        assert_eq!(cart_badge(4), Some("4".to_string()));
    }
}
