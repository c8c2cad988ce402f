//! Pocketshop CLI - a terminal storefront over the product catalog API.
//!
//! Commands:
//! - `pocketshop browse` - List products with search, filters and paging
//! - `pocketshop show` - Show one product
//! - `pocketshop shop` - Interactive session with a cart
//! - `pocketshop config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ConfigArgs, ShopArgs, ShowArgs};

/// Pocketshop CLI - Browse the catalog and fill a cart
#[derive(Parser)]
#[command(name = "pocketshop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Read products from a JSON file instead of the API
    #[arg(long, global = true)]
    fixture: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Browse(BrowseArgs),

    /// Show product details
    Show(ShowArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = context::Context::load(cli.config.as_deref(), cli.fixture.as_deref(), output)?;
    ctx.logger.debug("Session started");

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
