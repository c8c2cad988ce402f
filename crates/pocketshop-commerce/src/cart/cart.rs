//! Cart store.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// The cart is an ordered sequence of product IDs. Adding the same product
/// twice yields two entries; there is no quantity field. Entries are never
/// edited in place, only appended or filtered out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: Vec<ProductId>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product. No duplicate check and no catalog lookup.
    pub fn add_to_cart(&mut self, product_id: ProductId) {
        self.items.push(product_id);
    }

    /// Remove every entry for a product.
    ///
    /// Returns how many entries were removed; zero means the product was not
    /// in the cart and nothing changed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> usize {
        let len_before = self.items.len();
        self.items.retain(|id| *id != product_id);
        len_before - self.items.len()
    }

    /// Number of entries, counting duplicates.
    pub fn cart_count(&self) -> usize {
        self.items.len()
    }

    /// Check whether a product has at least one entry.
    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.items.contains(&product_id)
    }

    /// Number of entries for a single product.
    pub fn occurrences(&self, product_id: ProductId) -> usize {
        self.items.iter().filter(|id| **id == product_id).count()
    }

    /// Entries in the order they were added.
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_to_cart(id(1));

        assert_eq!(cart.cart_count(), 1);
        assert!(cart.is_in_cart(id(1)));
        assert!(!cart.is_in_cart(id(2)));
    }

    #[test]
    fn test_add_same_item_twice_keeps_both_entries() {
        let mut cart = Cart::new();
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(1));

        assert_eq!(cart.cart_count(), 2);
        assert_eq!(cart.occurrences(id(1)), 2);
        assert_eq!(cart.items(), &[id(1), id(1)]);
    }

    #[test]
    fn test_remove_deletes_all_occurrences() {
        let mut cart = Cart::new();
        cart.add_to_cart(id(1));
        cart.add_to_cart(id(1));

        assert_eq!(cart.remove_from_cart(id(1)), 2);
        assert!(cart.is_empty());
        assert!(!cart.is_in_cart(id(1)));
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(id(3));
        let before = cart.clone();

        assert_eq!(cart.remove_from_cart(id(9)), 0);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_order_preserved_after_remove() {
        let mut cart = Cart::new();
        for n in [4, 1, 2, 1, 3] {
            cart.add_to_cart(id(n));
        }
        cart.remove_from_cart(id(1));
        assert_eq!(cart.items(), &[id(4), id(2), id(3)]);
    }

    #[test]
    fn test_count_tracks_arbitrary_sequences() {
        // Replay a fixed op sequence against a plain Vec model.
        let ops: [(bool, u64); 12] = [
            (true, 1),
            (true, 2),
            (true, 1),
            (false, 3),
            (true, 3),
            (false, 1),
            (true, 2),
            (true, 5),
            (false, 2),
            (true, 1),
            (false, 5),
            (true, 5),
        ];
        let mut cart = Cart::new();
        let mut model: Vec<u64> = Vec::new();

        for (add, n) in ops {
            if add {
                cart.add_to_cart(id(n));
                model.push(n);
            } else {
                cart.remove_from_cart(id(n));
                model.retain(|m| *m != n);
            }
            assert_eq!(cart.cart_count(), model.len());
            for candidate in 1..=5 {
                assert_eq!(cart.is_in_cart(id(candidate)), model.contains(&candidate));
            }
        }
    }
}
