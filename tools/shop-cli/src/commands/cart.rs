//! Cart commands.

use anyhow::Result;
use dialoguer::Confirm;
use shop_commerce::prelude::*;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Show { user } => show_cart(&UserId::new(user), ctx).await,
        CartCommand::Add {
            user,
            product,
            size,
            color,
            quantity,
        } => {
            add_item(
                &UserId::new(user),
                &ProductId::new(product),
                quantity,
                &size,
                &color,
                ctx,
            )
            .await
        }
        CartCommand::Set {
            user,
            line,
            quantity,
        } => set_quantity(&UserId::new(user), &LineItemId::new(line), quantity, ctx).await,
        CartCommand::Remove { user, line } => {
            remove_line(&UserId::new(user), &LineItemId::new(line), ctx).await
        }
        CartCommand::Clear { user, yes } => clear_cart(&UserId::new(user), yes, ctx).await,
    }
}

async fn show_cart(user: &UserId, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let view = shop.cart(user)?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    ctx.output.header(&format!("Cart for {}", user));
    if view.entries.is_empty() {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    let widths = [14, 24, 10, 8, 4, 10, 10];
    ctx.output.table_row(
        &["LINE", "PRODUCT", "SIZE", "COLOR", "QTY", "UNIT", "TOTAL"],
        &widths,
    );
    ctx.output.info(&"-".repeat(96));

    for (entry, priced) in view.entries.iter().zip(view.summary.lines.iter()) {
        let name = truncate(&entry.product.name, 24);
        let qty = priced.quantity.to_string();
        let unit = ctx.money(priced.discounted_unit_price);
        let total = ctx.money(priced.total);
        ctx.output.table_row(
            &[
                entry.line.id.as_str(),
                &name,
                &entry.line.size,
                &entry.line.color,
                &qty,
                &unit,
                &total,
            ],
            &widths,
        );
    }

    print_summary(&view.summary, ctx);
    Ok(())
}

fn print_summary(summary: &CartSummary, ctx: &Context) {
    ctx.output.header("Order Summary");
    ctx.output.kv("Items", &summary.item_count.to_string());
    ctx.output.kv("Subtotal", &ctx.money(summary.original_subtotal()));
    if summary.has_discounts() {
        ctx.output.kv(
            &format!("Discount (-{}%)", summary.discount_percentage().round_dp(0)),
            &format!("-{}", ctx.money(summary.discount_total)),
        );
    }
    ctx.output.kv("Delivery Fee", &ctx.money(summary.delivery_fee));
    ctx.output.kv("Total", &ctx.money(summary.grand_total));
}

async fn add_item(
    user: &UserId,
    product: &ProductId,
    quantity: u32,
    size: &str,
    color: &str,
    ctx: &Context,
) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let line = shop.add_to_cart(user, product, quantity, size, color)?;
    ctx.save_shop(&shop).await?;

    if ctx.output.is_json() {
        ctx.output.json(&line);
        return Ok(());
    }

    ctx.output.success(&format!(
        "{} x {} ({}, {}) in cart as line {}",
        line.quantity, line.product_id, line.size, line.color, line.id
    ));
    Ok(())
}

async fn set_quantity(
    user: &UserId,
    line: &LineItemId,
    quantity: u32,
    ctx: &Context,
) -> Result<()> {
    let shop = ctx.open_shop().await?;
    shop.update_cart_quantity(user, line, quantity)?;
    ctx.save_shop(&shop).await?;

    if quantity == 0 {
        ctx.output.success(&format!("Removed line {}", line));
    } else {
        ctx.output
            .success(&format!("Set line {} to quantity {}", line, quantity));
    }
    Ok(())
}

async fn remove_line(user: &UserId, line: &LineItemId, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    shop.remove_from_cart(user, line)?;
    ctx.save_shop(&shop).await?;

    ctx.output.success(&format!("Removed line {}", line));
    Ok(())
}

async fn clear_cart(user: &UserId, yes: bool, ctx: &Context) -> Result<()> {
    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove every item from {}'s cart?", user))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart left unchanged");
            return Ok(());
        }
    }

    let shop = ctx.open_shop().await?;
    let removed = shop.clear_cart(user)?;
    ctx.save_shop(&shop).await?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "removed": removed }));
        return Ok(());
    }
    ctx.output.success(&format!("Removed {} line(s)", removed));
    Ok(())
}
