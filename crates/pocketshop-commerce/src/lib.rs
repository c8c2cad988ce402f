//! Storefront domain types and logic for Pocketshop.
//!
//! This crate holds the parts of the storefront that have rules worth testing:
//!
//! - **Catalog**: Product records and the fetched catalog
//! - **Cart**: The cart store and the provider that owns it
//! - **Search**: Text/price/rating filters, draft and applied criteria,
//!   incremental reveal
//! - **Screens**: View models for product cards, detail, cart and the
//!   placeholder tabs
//!
//! # Example
//!
//! ```rust
//! use pocketshop_commerce::prelude::*;
//!
//! let mut browser = CatalogBrowser::new();
//! browser.set_catalog(Catalog::new(vec![
//!     Product::new(1, "Red Shoe", "shoes", 20.0).with_rating(4.5, 10),
//!     Product::new(2, "Blue Hat", "hats", 5.0).with_rating(2.0, 3),
//! ]));
//! browser.set_search("shoe");
//!
//! let mut carts = CartProvider::new();
//! for product in browser.view().items {
//!     carts.add_to_cart(product.id);
//! }
//! assert_eq!(carts.cart_count(), 1);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod screens;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Catalog, Product, Rating};

    // Cart
    pub use crate::cart::{Cart, CartProvider};

    // Search
    pub use crate::search::{
        CatalogBrowser, CatalogView, DisplayWindow, Filter, FilterCriteria, FilterPanel,
        LoadState, PAGE_SIZE,
    };

    // Screens
    pub use crate::screens::{
        cart_badge, AddToCartButton, CartScreen, FavoritesScreen, ProductCard, ProductDetail,
        ProfileScreen,
    };
}
