//! Explicitly owned cart scope.
//!
//! The application creates one [`CartProvider`] at start and hands it to the
//! screens that need the cart. Screens only reach the cart through the
//! provider's accessors, so every mutation goes through [`Cart`]'s own
//! operations.

use crate::cart::Cart;
use crate::ids::ProductId;

/// Panic message for cart access through a scope that never received a cart.
pub const MISSING_PROVIDER: &str = "cart accessed outside of a CartProvider";

/// Owner of the process-wide cart.
#[derive(Debug)]
pub struct CartProvider {
    cart: Option<Cart>,
}

impl CartProvider {
    /// Create a provider holding an empty cart.
    pub fn new() -> Self {
        Self {
            cart: Some(Cart::new()),
        }
    }

    /// Create a provider around an existing cart.
    pub fn with_cart(cart: Cart) -> Self {
        Self { cart: Some(cart) }
    }

    /// A scope with no cart installed. Any cart access through it panics.
    pub fn detached() -> Self {
        Self { cart: None }
    }

    /// Whether a cart is installed.
    pub fn is_initialized(&self) -> bool {
        self.cart.is_some()
    }

    /// Read access to the cart.
    ///
    /// # Panics
    ///
    /// Panics when the provider holds no cart. This is a wiring bug, never a
    /// runtime condition to recover from.
    pub fn cart(&self) -> &Cart {
        match &self.cart {
            Some(cart) => cart,
            None => panic!("{}", MISSING_PROVIDER),
        }
    }

    /// Write access to the cart.
    ///
    /// # Panics
    ///
    /// Panics when the provider holds no cart.
    pub fn cart_mut(&mut self) -> &mut Cart {
        match &mut self.cart {
            Some(cart) => cart,
            None => panic!("{}", MISSING_PROVIDER),
        }
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) {
        self.cart_mut().add_to_cart(product_id);
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> usize {
        self.cart_mut().remove_from_cart(product_id)
    }

    pub fn cart_count(&self) -> usize {
        self.cart().cart_count()
    }

    pub fn is_in_cart(&self, product_id: ProductId) -> bool {
        self.cart().is_in_cart(product_id)
    }
}

impl Default for CartProvider {
    fn default() -> Self {
        Self::new()
    }
}
