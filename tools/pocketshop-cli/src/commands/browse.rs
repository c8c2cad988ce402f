//! Catalog listing command.

use anyhow::{bail, Result};
use pocketshop_commerce::catalog::Product;
use pocketshop_commerce::search::{CatalogBrowser, LoadState};
use serde::Serialize;

use super::{product_cells, BrowseArgs, PRODUCT_COLUMNS};
use crate::context::Context;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut browser = ctx.open_catalog().await;
    if browser.load_state() == LoadState::Failed {
        bail!("Could not load products");
    }

    apply_args(&mut browser, &args);
    render(&browser, ctx);
    Ok(())
}

/// Push command-line criteria through the same path the filter panel uses.
pub(crate) fn apply_args(browser: &mut CatalogBrowser, args: &BrowseArgs) {
    if let Some(search) = &args.search {
        browser.set_search(search.as_str());
    }

    if args.min_price.is_some() || args.max_price.is_some() || args.min_rating.is_some() {
        browser.open_filters();
        if let Some(min) = &args.min_price {
            browser.set_draft_min_price(min.as_str());
        }
        if let Some(max) = &args.max_price {
            browser.set_draft_max_price(max.as_str());
        }
        if let Some(rating) = args.min_rating {
            browser.set_draft_min_rating(rating);
        }
        browser.apply_filters();
    }

    for _ in 1..args.pages {
        if !browser.load_more() {
            break;
        }
    }
}

#[derive(Serialize)]
struct BrowseOutput<'a> {
    total_matches: usize,
    has_more: bool,
    products: Vec<&'a Product>,
}

fn render(browser: &CatalogBrowser, ctx: &Context) {
    let view = browser.view();

    if ctx.output.is_json() {
        ctx.output.json(&BrowseOutput {
            total_matches: view.total_matches,
            has_more: view.has_more,
            products: view.items.clone(),
        });
        return;
    }

    ctx.output.header("Products");
    ctx.output.line(&view.summary());

    if view.is_empty() {
        return;
    }

    ctx.output.line("");
    ctx.output
        .table_row(&["ID", "TITLE", "CATEGORY", "PRICE", "RATING"], &PRODUCT_COLUMNS);
    for product in &view.items {
        let cells = product_cells(product);
        let cols: Vec<&str> = cells.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &PRODUCT_COLUMNS);
    }

    if view.has_more {
        ctx.output.line("");
        ctx.output.info(&format!(
            "Showing {} of {}. Use --pages to see more.",
            view.len(),
            view.total_matches
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketshop_commerce::catalog::Catalog;

    fn args() -> BrowseArgs {
        BrowseArgs {
            search: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            pages: 1,
        }
    }

    fn browser_with(n: u64) -> CatalogBrowser {
        let mut browser = CatalogBrowser::new();
        browser.set_catalog(Catalog::new(
            (1..=n)
                .map(|i| Product::new(i, format!("Item {}", i), "misc", i as f64).with_rating(3.0, 1))
                .collect(),
        ));
        browser
    }

    #[test]
    fn test_pages_reveal_more_rows() {
        let mut browser = browser_with(25);
        apply_args(&mut browser, &BrowseArgs { pages: 5, ..args() });
        assert_eq!(browser.view().len(), 25);
    }

    #[test]
    fn test_price_args_go_through_panel() {
        let mut browser = browser_with(25);
        apply_args(
            &mut browser,
            &BrowseArgs {
                min_price: Some("abc".to_string()),
                max_price: Some("12".to_string()),
                ..args()
            },
        );
        assert_eq!(browser.total_matches(), 12);
        assert_eq!(browser.filters().applied().min_price, "abc");
    }
}
