//! Product detail command.

use anyhow::{bail, Result};
use pocketshop_commerce::screens::ProductDetail;
use pocketshop_commerce::search::LoadState;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{star_row, wrap};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let browser = ctx.open_catalog().await;
    if browser.load_state() == LoadState::Failed {
        bail!("Could not load products");
    }

    let product = browser.product(args.id)?;
    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    let mut detail = ProductDetail::new(product);
    if args.full {
        detail.toggle_description();
    }
    print_detail(&detail, ctx);
    Ok(())
}

/// Print a product detail screen.
pub(crate) fn print_detail(detail: &ProductDetail<'_>, ctx: &Context) {
    let product = detail.product();

    ctx.output.header(&product.title);
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Price", &product.price_label());
    ctx.output.kv(
        "Rating",
        &format!("{} {}", star_row(&detail.stars()), detail.rating_count_label()),
    );

    if !product.description.is_empty() {
        ctx.output.line("");
        let width = ctx.output.term_width().clamp(40, 100) - 4;
        let lines = wrap(&product.description, width);
        let shown = detail.description_line_limit().unwrap_or(lines.len());
        for line in lines.iter().take(shown) {
            ctx.output.line(&format!("  {}", line));
        }
        if lines.len() > shown || detail.is_description_expanded() {
            ctx.output.line(&format!("  ({})", detail.description_toggle_label()));
        }
    }
}
