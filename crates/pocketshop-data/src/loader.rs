//! One-shot catalog loading into the catalog screen.

use std::time::Instant;

use pocketshop_commerce::search::{CatalogBrowser, LoadState};
use pocketshop_observability::StructuredLogger;

use crate::client::FetchError;
use crate::source::CatalogSource;

/// Fetch the catalog once and hand it to the browser.
///
/// On failure the error is logged, the browser is marked failed with an empty
/// catalog, and the error is returned. Nothing is retried.
pub async fn load_catalog(
    source: &dyn CatalogSource,
    browser: &mut CatalogBrowser,
    logger: &StructuredLogger,
) -> Result<LoadState, FetchError> {
    let started = Instant::now();
    logger
        .debug_builder("Fetching products")
        .field("source", source.describe())
        .emit();

    match source.fetch_catalog().await {
        Ok(catalog) => {
            logger
                .info_builder("Loaded products")
                .field("source", source.describe())
                .field_u64("count", catalog.len() as u64)
                .duration_ms("elapsed_ms", started.elapsed())
                .emit();
            browser.set_catalog(catalog);
            Ok(browser.load_state())
        }
        Err(e) => {
            let described = source.describe();
            logger.error_with(
                "Error fetching products",
                &[("source", &described), ("cause", &e)],
            );
            browser.mark_failed();
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FileCatalogSource, StaticCatalogSource};
    use pocketshop_commerce::catalog::Product;
    use pocketshop_observability::{LogLevel, SessionId};

    fn quiet_logger() -> StructuredLogger {
        StructuredLogger::new(SessionId::from_string("test")).with_min_level(LogLevel::Error)
    }

    #[tokio::test]
    async fn test_load_success_marks_ready() {
        let source = StaticCatalogSource::new(vec![
            Product::new(1, "Red Shoe", "shoes", 20.0),
            Product::new(2, "Blue Hat", "hats", 5.0),
        ]);
        let mut browser = CatalogBrowser::new();

        let state = load_catalog(&source, &mut browser, &quiet_logger())
            .await
            .unwrap();
        assert_eq!(state, LoadState::Ready);
        assert_eq!(browser.total_matches(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_catalog_empty() {
        let source = FileCatalogSource::new("/missing/products.json");
        let mut browser = CatalogBrowser::new();

        let result = load_catalog(&source, &mut browser, &quiet_logger()).await;
        assert!(result.is_err());
        assert_eq!(browser.load_state(), LoadState::Failed);
        assert!(browser.catalog().is_empty());
    }
}
