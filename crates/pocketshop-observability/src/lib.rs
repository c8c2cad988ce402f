//! Observability for the Pocketshop storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier for one run of the storefront
//! - `StructuredLogger` - Structured logging with session and screen context

mod logging;
mod session;

pub use logging::*;
pub use session::*;
