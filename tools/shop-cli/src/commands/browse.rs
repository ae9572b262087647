//! Catalog listing command.

use anyhow::Result;
use shop_commerce::prelude::*;

use super::BrowseArgs;
use crate::context::Context;
use crate::output::{rating_stars, truncate};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let params = FilterParams {
        category: args.category,
        new_arrivals: args.new_arrivals,
        on_sale: args.on_sale,
        min_price: args.min_price,
        max_price: args.max_price,
        colors: args.colors,
        sizes: args.sizes,
        sort: args.sort,
    };
    let per_page = args.per_page.unwrap_or(ctx.config.catalog.per_page);

    let shop = ctx.open_shop().await?;
    let listing = shop.browse_page(&params, args.page, per_page)?;

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header(&listing.title);
    print_products(&listing.products, ctx);

    let pagination = &listing.pagination;
    ctx.output.info("");
    if pagination.total == 0 {
        ctx.output.info("No products match these filters.");
    } else {
        ctx.output.info(&format!(
            "Showing {}-{} of {} product(s), sorted by {} (page {} of {})",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total,
            listing.criteria.sort.display_name(),
            pagination.page,
            pagination.total_pages
        ));
    }
    if pagination.total_pages > 1 {
        let pages: Vec<String> = pagination
            .page_numbers(7)
            .into_iter()
            .map(|n| {
                if n == pagination.page {
                    format!("[{}]", n)
                } else {
                    n.to_string()
                }
            })
            .collect();
        ctx.output.info(&format!("Pages: {}", pages.join(" ")));
    }

    Ok(())
}

/// Print products as a table.
pub fn print_products(products: &[Product], ctx: &Context) {
    if products.is_empty() {
        return;
    }

    let widths = [12, 28, 12, 10, 10, 14];
    ctx.output.table_row(
        &["ID", "NAME", "CATEGORY", "PRICE", "NOW", "RATING"],
        &widths,
    );
    ctx.output.info(&"-".repeat(92));

    for p in products {
        let price = ctx.money(p.price);
        let now = if p.is_on_sale() {
            format!("{} -{}%", ctx.money(p.discounted_price()), p.effective_discount())
        } else {
            "-".to_string()
        };
        let name = truncate(&p.name, 28);
        let rating = rating_stars(p.rating);

        ctx.output.table_row(
            &[p.id.as_str(), &name, &p.category, &price, &now, &rating],
            &widths,
        );
    }
}
