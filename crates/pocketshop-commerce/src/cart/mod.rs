//! Shopping cart module.
//!
//! Contains the cart store and the provider that owns it.

mod cart;
mod provider;

pub use cart::Cart;
pub use provider::{CartProvider, MISSING_PROVIDER};
