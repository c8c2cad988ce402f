//! Catalog query engine.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{CatalogView, DisplayWindow, Filter, FilterCriteria, FilterPanel, PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Where the catalog fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LoadState {
    /// Fetch in flight, nothing to show yet.
    #[default]
    Loading,
    /// Catalog received.
    Ready,
    /// Fetch failed; the catalog stays empty and is not retried.
    Failed,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Ready => "ready",
            LoadState::Failed => "failed",
        }
    }
}

/// Filter products by search text and criteria, keeping catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    search: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a Product> {
    let filters = build_filters(search, criteria);
    products
        .iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .collect()
}

fn build_filters(search: &str, criteria: &FilterCriteria) -> Vec<Filter> {
    let mut filters = vec![Filter::text(search)];
    filters.extend(criteria.filters());
    filters
}

/// State of the catalog screen: the fetched catalog, the search text, the
/// filter panel and the display window, plus the match list derived from
/// them.
///
/// The match list is recomputed whenever the catalog, the search text or the
/// applied criteria change. Draft edits never touch it.
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    catalog: Catalog,
    load_state: LoadState,
    search: String,
    filters: FilterPanel,
    window: DisplayWindow,
    /// Indices into `catalog` of products passing the applied criteria.
    matches: Vec<usize>,
}

impl CatalogBrowser {
    /// Create a browser waiting for its catalog.
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Create a browser with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            catalog: Catalog::empty(),
            load_state: LoadState::Loading,
            search: String::new(),
            filters: FilterPanel::new(),
            window: DisplayWindow::new(page_size),
            matches: Vec::new(),
        }
    }

    /// Install a fetched catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.load_state = LoadState::Ready;
        self.recompute();
    }

    /// Record a failed fetch. The catalog is left empty.
    pub fn mark_failed(&mut self) {
        self.catalog = Catalog::empty();
        self.load_state = LoadState::Failed;
        self.recompute();
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up a product in the loaded catalog.
    pub fn product(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.catalog.get(id)
    }

    /// Change the search text. Takes effect immediately.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search {
            self.search = text;
            self.recompute();
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterPanel {
        &self.filters
    }

    /// Open the filter panel with a draft copied from the applied criteria.
    pub fn open_filters(&mut self) {
        self.filters.open();
    }

    pub fn set_draft_min_price(&mut self, text: impl Into<String>) {
        self.filters.set_draft_min_price(text);
    }

    pub fn set_draft_max_price(&mut self, text: impl Into<String>) {
        self.filters.set_draft_max_price(text);
    }

    pub fn set_draft_min_rating(&mut self, min_rating: f64) {
        self.filters.set_draft_min_rating(min_rating);
    }

    pub fn reset_draft(&mut self) {
        self.filters.reset_draft();
    }

    /// Commit the draft, close the panel and go back to the first page.
    pub fn apply_filters(&mut self) {
        self.filters.commit();
        self.window.reset();
        self.recompute();
    }

    /// Close the panel, dropping draft edits.
    pub fn close_filters(&mut self) {
        self.filters.discard();
    }

    /// Consumer reached the end of the visible rows.
    ///
    /// Returns `true` if more rows were revealed.
    pub fn load_more(&mut self) -> bool {
        self.window.load_more(self.matches.len())
    }

    pub fn display_count(&self) -> usize {
        self.window.display_count
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    /// Every product passing the applied criteria, ignoring the window.
    pub fn matching(&self) -> impl Iterator<Item = &Product> + '_ {
        self.matches.iter().map(move |i| &self.catalog.products()[*i])
    }

    /// The current derived view.
    pub fn view(&self) -> CatalogView<'_> {
        let total = self.matches.len();
        let items = self.matching().take(self.window.visible(total)).collect();
        CatalogView {
            items,
            total_matches: total,
            has_more: self.window.has_more(total),
        }
    }

    fn recompute(&mut self) {
        let filters = build_filters(&self.search, self.filters.applied());
        self.matches = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, p)| filters.iter().all(|f| f.matches(p)))
            .map(|(i, _)| i)
            .collect();
    }
}

impl Default for CatalogBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Product::new(1, "Red Shoe", "shoes", 20.0).with_rating(4.5, 10),
            Product::new(2, "Blue Hat", "hats", 5.0).with_rating(2.0, 4),
        ])
    }

    fn ids(view: &CatalogView<'_>) -> Vec<u64> {
        view.items.iter().map(|p| p.id.get()).collect()
    }

    fn many(n: u64) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|i| Product::new(i, format!("Item {}", i), "misc", i as f64).with_rating(3.0, 1))
                .collect(),
        )
    }

    #[test]
    fn test_starts_loading_and_empty() {
        let browser = CatalogBrowser::new();
        assert_eq!(browser.load_state(), LoadState::Loading);
        assert!(browser.view().is_empty());
    }

    #[test]
    fn test_search_matches_title_or_category() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(sample());
        browser.set_search("shoe");
        assert_eq!(ids(&browser.view()), vec![1]);

        browser.set_search("HATS");
        assert_eq!(ids(&browser.view()), vec![2]);
    }

    #[test]
    fn test_min_rating_excludes_low_rated() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(sample());
        browser.open_filters();
        browser.set_draft_min_rating(3.0);
        browser.apply_filters();
        assert_eq!(ids(&browser.view()), vec![1]);
    }

    #[test]
    fn test_draft_does_not_change_view() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(sample());
        browser.open_filters();
        browser.set_draft_max_price("1");
        assert_eq!(browser.total_matches(), 2);

        browser.close_filters();
        assert_eq!(browser.total_matches(), 2);
        assert_eq!(browser.filters().draft().max_price, "");
    }

    #[test]
    fn test_min_above_max_yields_empty_view() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(sample());
        browser.open_filters();
        browser.set_draft_min_price("50");
        browser.set_draft_max_price("10");
        browser.apply_filters();
        assert!(browser.view().is_empty());
    }

    #[test]
    fn test_pagination_reveals_pages() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(many(25));
        assert_eq!(browser.view().len(), 10);
        assert!(browser.view().has_more);

        assert!(browser.load_more());
        assert_eq!(browser.view().len(), 20);
        assert!(browser.load_more());
        assert_eq!(browser.view().len(), 25);
        assert!(!browser.view().has_more);
        assert!(!browser.load_more());
        assert_eq!(browser.view().len(), 25);
    }

    #[test]
    fn test_apply_filters_resets_window() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(many(40));
        browser.load_more();
        browser.load_more();
        assert_eq!(browser.display_count(), 30);

        browser.open_filters();
        browser.set_draft_min_price("5");
        browser.apply_filters();
        assert_eq!(browser.display_count(), 10);
        assert_eq!(browser.total_matches(), 36);
    }

    #[test]
    fn test_set_catalog_reapplies_applied_criteria() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(sample());
        browser.open_filters();
        browser.set_draft_max_price("10");
        browser.apply_filters();
        assert_eq!(ids(&browser.view()), vec![2]);

        browser.set_catalog(Catalog::new(vec![
            Product::new(3, "Green Scarf", "scarves", 8.0),
            Product::new(4, "Leather Boot", "shoes", 30.0),
            Product::new(5, "Sticker", "misc", 1.0),
        ]));
        assert_eq!(ids(&browser.view()), vec![3, 5]);
        assert_eq!(browser.filters().applied().max_price, "10");
    }

    #[test]
    fn test_search_change_keeps_display_count() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(many(40));
        browser.load_more();
        browser.load_more();
        assert_eq!(browser.display_count(), 30);

        // "item 1" matches Item 1 and Item 10..=19
        browser.set_search("item 1");
        assert_eq!(browser.display_count(), 30);
        assert_eq!(browser.view().len(), 11);

        browser.set_search("");
        assert_eq!(browser.display_count(), 30);
        assert_eq!(browser.view().len(), 30);
    }

    #[test]
    fn test_mark_failed_leaves_catalog_empty() {
        let mut browser = CatalogBrowser::new();
        browser.mark_failed();
        assert_eq!(browser.load_state(), LoadState::Failed);
        assert!(browser.catalog().is_empty());
        assert_eq!(browser.view().summary(), "0 products found");
    }

    #[test]
    fn test_filter_products_is_idempotent() {
        let catalog = sample();
        let criteria = FilterCriteria::new().with_min_price("1");
        let first = filter_products(catalog.products(), "e", &criteria);
        let second = filter_products(catalog.products(), "e", &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn test_product_lookup() {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(sample());
        assert_eq!(browser.product(ProductId::new(2)).unwrap().title, "Blue Hat");
        assert!(browser.product(ProductId::new(3)).is_err());
    }
}
