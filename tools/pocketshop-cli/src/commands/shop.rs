//! Interactive storefront session.
//!
//! One cart lives for the whole session; every screen reads it through the
//! same [`CartProvider`].

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use pocketshop_commerce::cart::CartProvider;
use pocketshop_commerce::screens::{
    cart_badge, CartRow, CartScreen, FavoritesScreen, ProductDetail, ProfileScreen,
};
use pocketshop_commerce::search::{
    rating_choice_label, CatalogBrowser, FilterCriteria, LoadState, RATING_CHOICES,
};
use pocketshop_observability::StructuredLogger;

use super::show::print_detail;
use super::{product_cells, ShopArgs, PRODUCT_COLUMNS};
use crate::context::Context;

/// Actions offered on the product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainAction {
    Search,
    Filters,
    LoadMore,
    OpenProduct,
    Cart,
    Favorites,
    Profile,
    Quit,
}

impl MainAction {
    fn label(&self, carts: &CartProvider) -> String {
        match self {
            Self::Search => "Search".to_string(),
            Self::Filters => "Filters".to_string(),
            Self::LoadMore => "Load more".to_string(),
            Self::OpenProduct => "Open a product".to_string(),
            Self::Cart => match cart_badge(carts.cart_count()) {
                Some(badge) => format!("Cart ({})", badge),
                None => "Cart".to_string(),
            },
            Self::Favorites => "Favorites".to_string(),
            Self::Profile => "Profile".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// Actions offered on a product detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    AddToCart,
    Like,
    Description,
    Back,
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("shop is interactive and cannot write JSON output");
    }

    let mut browser = ctx.open_catalog().await;
    if let Some(search) = args.search {
        browser.set_search(search);
    }

    let mut carts = CartProvider::new();
    let logger = ctx.logger.for_screen("Shop");
    let theme = ColorfulTheme::default();

    loop {
        print_list(&browser, ctx);

        let actions = main_actions(&browser);
        let labels: Vec<String> = actions.iter().map(|a| a.label(&carts)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            MainAction::Search => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Search products")
                    .with_initial_text(browser.search())
                    .allow_empty(true)
                    .interact_text()?;
                browser.set_search(text);
            }
            MainAction::Filters => edit_filters(&mut browser, &theme, &logger)?,
            MainAction::LoadMore => {
                browser.load_more();
            }
            MainAction::OpenProduct => open_product(&browser, &mut carts, ctx, &theme, &logger)?,
            MainAction::Cart => cart_screen(&browser, &mut carts, ctx, &theme, &logger)?,
            MainAction::Favorites => print_favorites(ctx),
            MainAction::Profile => print_profile(ctx),
            MainAction::Quit => break,
        }
    }

    Ok(())
}

fn main_actions(browser: &CatalogBrowser) -> Vec<MainAction> {
    let view = browser.view();
    let mut actions = vec![MainAction::Search, MainAction::Filters];
    if view.has_more {
        actions.push(MainAction::LoadMore);
    }
    if !view.is_empty() {
        actions.push(MainAction::OpenProduct);
    }
    actions.extend([
        MainAction::Cart,
        MainAction::Favorites,
        MainAction::Profile,
        MainAction::Quit,
    ]);
    actions
}

fn print_list(browser: &CatalogBrowser, ctx: &Context) {
    ctx.output.header("Products");

    match browser.load_state() {
        LoadState::Loading => {
            ctx.output.line("Loading products...");
            return;
        }
        LoadState::Failed => ctx.output.warn("Could not load products"),
        LoadState::Ready => {}
    }

    if !browser.search().is_empty() {
        ctx.output.kv("Search", browser.search());
    }
    let applied = browser.filters().applied();
    if !applied.is_default() {
        ctx.output.kv("Filters", &describe_criteria(applied));
    }

    let view = browser.view();
    ctx.output.line(&view.summary());
    if view.is_empty() {
        return;
    }

    for product in &view.items {
        let cells = product_cells(product);
        let cols: Vec<&str> = cells.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &PRODUCT_COLUMNS);
    }
    if let Some(footer) = view.footer() {
        ctx.output.line(footer);
    }
}

fn describe_criteria(criteria: &FilterCriteria) -> String {
    format!(
        "price {} to {}, rating {}",
        price_or_any(&criteria.min_price),
        price_or_any(&criteria.max_price),
        rating_choice_label(criteria.min_rating)
    )
}

fn price_or_any(text: &str) -> &str {
    if text.trim().is_empty() {
        "any"
    } else {
        text
    }
}

fn filter_menu_items(draft: &FilterCriteria) -> Vec<String> {
    vec![
        format!("Min price: {}", price_or_any(&draft.min_price)),
        format!("Max price: {}", price_or_any(&draft.max_price)),
        format!("Minimum rating: {}", rating_choice_label(draft.min_rating)),
        "Reset".to_string(),
        "Apply Filters".to_string(),
        "Cancel".to_string(),
    ]
}

fn edit_filters(
    browser: &mut CatalogBrowser,
    theme: &ColorfulTheme,
    logger: &StructuredLogger,
) -> Result<()> {
    browser.open_filters();

    loop {
        let draft = browser.filters().draft().clone();
        let choice = Select::with_theme(theme)
            .with_prompt("Filters")
            .items(&filter_menu_items(&draft))
            .default(4)
            .interact()?;

        match choice {
            0 => {
                let text: String = Input::with_theme(theme)
                    .with_prompt("Min price")
                    .with_initial_text(draft.min_price)
                    .allow_empty(true)
                    .interact_text()?;
                browser.set_draft_min_price(text);
            }
            1 => {
                let text: String = Input::with_theme(theme)
                    .with_prompt("Max price")
                    .with_initial_text(draft.max_price)
                    .allow_empty(true)
                    .interact_text()?;
                browser.set_draft_max_price(text);
            }
            2 => {
                let labels: Vec<String> =
                    RATING_CHOICES.iter().map(|r| rating_choice_label(*r)).collect();
                let current = RATING_CHOICES
                    .iter()
                    .position(|r| *r == draft.min_rating)
                    .unwrap_or(0);
                let picked = Select::with_theme(theme)
                    .with_prompt("Minimum rating")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                browser.set_draft_min_rating(RATING_CHOICES[picked]);
            }
            3 => browser.reset_draft(),
            4 => {
                browser.apply_filters();
                logger
                    .debug_builder("Filters applied")
                    .field("criteria", describe_criteria(browser.filters().applied()))
                    .field_u64("matches", browser.total_matches() as u64)
                    .emit();
                return Ok(());
            }
            _ => {
                browser.close_filters();
                return Ok(());
            }
        }
    }
}

fn detail_actions(detail: &ProductDetail<'_>, carts: &CartProvider) -> Vec<(DetailAction, String)> {
    vec![
        (DetailAction::AddToCart, detail.button(carts).label().to_string()),
        (
            DetailAction::Like,
            if detail.is_liked() { "Unlike" } else { "Like" }.to_string(),
        ),
        (
            DetailAction::Description,
            detail.description_toggle_label().to_string(),
        ),
        (DetailAction::Back, "Back".to_string()),
    ]
}

fn open_product(
    browser: &CatalogBrowser,
    carts: &mut CartProvider,
    ctx: &Context,
    theme: &ColorfulTheme,
    logger: &StructuredLogger,
) -> Result<()> {
    let view = browser.view();
    let mut labels: Vec<String> = view
        .items
        .iter()
        .map(|p| format!("{}  {}", p.title, p.price_label()))
        .collect();
    labels.push("Back".to_string());

    let choice = Select::with_theme(theme)
        .with_prompt("Open product")
        .items(&labels)
        .default(0)
        .interact()?;
    let Some(product) = view.items.get(choice) else {
        return Ok(());
    };

    let detail_logger = logger.for_screen("ProductDetail");
    let mut detail = ProductDetail::new(product);

    loop {
        print_detail(&detail, ctx);
        if let Some(message) = detail.success_message(carts) {
            ctx.output.line(message);
        }

        let actions = detail_actions(&detail, carts);
        let labels: Vec<&str> = actions.iter().map(|(_, label)| label.as_str()).collect();
        let picked = Select::with_theme(theme)
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[picked].0 {
            DetailAction::AddToCart => {
                if detail.press_add_to_cart(carts) {
                    detail_logger
                        .info_builder("Added to cart")
                        .field_u64("product_id", product.id.get())
                        .field_u64("cart_count", carts.cart_count() as u64)
                        .emit();
                }
            }
            DetailAction::Like => detail.toggle_like(),
            DetailAction::Description => detail.toggle_description(),
            DetailAction::Back => return Ok(()),
        }
    }
}

fn cart_row_label(browser: &CatalogBrowser, row: &CartRow) -> String {
    match browser.product(row.product_id) {
        Ok(product) => format!("{}  {}", product.title, product.price_label()),
        Err(_) => format!("Product #{}", row.product_id),
    }
}

fn cart_screen(
    browser: &CatalogBrowser,
    carts: &mut CartProvider,
    ctx: &Context,
    theme: &ColorfulTheme,
    logger: &StructuredLogger,
) -> Result<()> {
    let cart_logger = logger.for_screen("Cart");

    loop {
        match CartScreen::from_cart(carts.cart()) {
            CartScreen::Empty { title, subtitle } => {
                ctx.output.header(title);
                ctx.output.line(subtitle);
                return Ok(());
            }
            CartScreen::Items {
                title,
                subtitle,
                rows,
            } => {
                ctx.output.header(title);
                ctx.output.line(&subtitle);

                let mut labels: Vec<String> =
                    rows.iter().map(|row| cart_row_label(browser, row)).collect();
                labels.push("Back".to_string());

                let choice = Select::with_theme(theme)
                    .with_prompt("Remove an item")
                    .items(&labels)
                    .default(labels.len() - 1)
                    .interact()?;
                let Some(row) = rows.get(choice) else {
                    return Ok(());
                };

                let removed = carts.remove_from_cart(row.product_id);
                cart_logger.info_with(
                    "Removed from cart",
                    &[("product_id", &row.product_id), ("removed", &removed)],
                );
            }
        }
    }
}

fn print_favorites(ctx: &Context) {
    let favorites = FavoritesScreen::default();
    ctx.output.header(favorites.title);
    ctx.output.line(favorites.empty_title);
    ctx.output.line(favorites.empty_subtitle);
}

fn print_profile(ctx: &Context) {
    let profile = ProfileScreen::default();
    ctx.output.header(profile.title);
    ctx.output.kv("Name", profile.name);
    ctx.output.kv("Email", profile.email);
    for item in &profile.menu {
        ctx.output.list_item(item);
    }
}
