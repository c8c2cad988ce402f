//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod shop;
pub mod show;

use clap::{Args, Subcommand};
use pocketshop_commerce::catalog::{Product, MAX_RATING};
use pocketshop_commerce::ProductId;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Match text in title or category (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Minimum price. Non-numeric values are ignored.
    #[arg(long)]
    pub min_price: Option<String>,

    /// Maximum price. Non-numeric values are ignored.
    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum average rating, 0 to 5.
    #[arg(long, value_parser = parse_min_rating)]
    pub min_rating: Option<f64>,

    /// Number of pages to reveal.
    #[arg(short, long, default_value = "1")]
    pub pages: usize,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: ProductId,

    /// Print the whole description.
    #[arg(long)]
    pub full: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Initial search text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// File to create; a `.json` name writes JSON.
        #[arg(long, default_value = "pocketshop.toml")]
        path: String,
    },
    /// Validate the config file.
    Validate,
}

/// Parse `--min-rating`, rejecting values no product rating can meet.
fn parse_min_rating(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", text))?;
    if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
        return Err(format!("rating must be between 0 and {}", MAX_RATING));
    }
    Ok(value)
}

/// Column widths for product tables.
pub(crate) const PRODUCT_COLUMNS: [usize; 5] = [5, 40, 20, 10, 8];

/// Table cells for one product: id, title, category, price, rating.
pub(crate) fn product_cells(product: &Product) -> [String; 5] {
    [
        product.id.to_string(),
        product.title.clone(),
        product.category.clone(),
        product.price_label(),
        format!("{:.1}", product.rating.rate),
    ]
}
