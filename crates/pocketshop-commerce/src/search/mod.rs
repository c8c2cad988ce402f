//! Search module.
//!
//! Contains filters, draft/applied criteria, incremental reveal and the
//! catalog query engine that ties them together.

mod browser;
mod filter;
mod panel;
mod results;

pub use browser::{filter_products, CatalogBrowser, LoadState};
pub use filter::{parse_price, rating_choice_label, Filter, FilterCriteria, RATING_CHOICES};
pub use panel::FilterPanel;
pub use results::{CatalogView, DisplayWindow, PAGE_SIZE};
