//! Product detail command.

use anyhow::Result;
use shop_commerce::prelude::*;

use super::ProductArgs;
use crate::commands::browse::print_products;
use crate::context::Context;
use crate::output::rating_stars;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let detail = shop.product_detail(&ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    let p = &detail.product;
    ctx.output.header(&p.name);
    ctx.output.kv("id", p.id.as_str());
    ctx.output.kv("category", &p.category);
    if p.is_on_sale() {
        ctx.output.kv(
            "price",
            &format!(
                "{} (was {}, -{}%)",
                ctx.money(p.discounted_price()),
                ctx.money(p.price),
                p.effective_discount()
            ),
        );
    } else {
        ctx.output.kv("price", &ctx.money(p.price));
    }
    if let Some(ref description) = p.description {
        ctx.output.kv("description", description);
    }
    ctx.output.kv("sizes", &p.sizes.join(", "));
    ctx.output.kv("colors", &p.colors.join(", "));

    let rating = &detail.rating;
    ctx.output.info("");
    ctx.output.info(&format!(
        "Rating: {} {:.1}/5 from {} review(s)",
        rating_stars(rating.average),
        rating.average,
        rating.total
    ));
    if rating.total > 0 {
        for stars in (1..=5u8).rev() {
            ctx.output.kv(
                &format!("{} star", stars),
                &format!("{} ({:.0}%)", rating.count(stars), rating.percentage(stars)),
            );
        }
    }

    if !detail.reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in detail.reviews.iter().take(args.reviews) {
            let author = review.author_name.as_deref().unwrap_or("Anonymous");
            ctx.output.list_item(&format!(
                "{} {} on {}: {}",
                review.stars(),
                author,
                review.created_at.format("%b %e, %Y"),
                review.comment
            ));
        }
        if detail.reviews.len() > args.reviews {
            ctx.output.info(&format!(
                "... and {} more",
                detail.reviews.len() - args.reviews
            ));
        }
    }

    if !detail.related.is_empty() {
        ctx.output.header("You might also like");
        print_products(&detail.related, ctx);
    }

    Ok(())
}
