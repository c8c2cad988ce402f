//! Data access for the Pocketshop storefront.
//!
//! This crate provides:
//! - `FetchClient` - Plain HTTP GET client for the product API
//! - `CatalogSource` - Where the catalog comes from (HTTP, file, memory)
//! - `load_catalog` - One-shot fetch into the catalog screen

mod client;
mod loader;
mod source;

pub use client::*;
pub use loader::*;
pub use source::*;
