//! Text search command.

use anyhow::Result;

use super::SearchArgs;
use crate::commands::browse::print_products;
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let products = shop.search(&args.query)?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output
        .header(&format!("Search results for \"{}\"", args.query.trim()));
    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    print_products(&products, ctx);
    ctx.output.info("");
    ctx.output.info(&format!("{} result(s)", products.len()));

    Ok(())
}
