//! Screen view models.
//!
//! Plain state for rendering collaborators. Nothing here draws anything.

mod cart;
mod detail;
mod placeholders;

pub use cart::{cart_badge, CartRow, CartScreen};
pub use detail::{
    AddToCartButton, ProductCard, ProductDetail, COLLAPSED_DESCRIPTION_LINES, STAR_COUNT,
};
pub use placeholders::{FavoritesScreen, ProfileScreen};
