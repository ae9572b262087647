//! Review submission command.

use anyhow::Result;
use shop_commerce::prelude::*;

use super::ReviewArgs;
use crate::context::Context;

/// Run the review command.
pub async fn run(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let draft = ReviewDraft {
        rating: args.rating,
        comment: args.comment,
    };

    let review = shop.submit_review(
        &UserId::new(args.user),
        &ProductId::new(args.product),
        draft,
        args.name,
    )?;
    ctx.save_shop(&shop).await?;

    if ctx.output.is_json() {
        ctx.output.json(&review);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Review {} saved for {} ({})",
        review.id,
        review.product_id,
        review.stars()
    ));

    Ok(())
}
