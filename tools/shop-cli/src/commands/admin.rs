//! Store administration commands.

use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use shop_commerce::prelude::*;

use super::{AdminArgs, AdminCommand};
use crate::context::Context;
use crate::output::status_badge;

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AdminCommand::Stats => show_stats(ctx).await,
        AdminCommand::Orders { status } => list_orders(status.as_deref(), ctx).await,
        AdminCommand::OrderStatus { order, status } => {
            set_order_status(&OrderId::new(order), &status, ctx).await
        }
        AdminCommand::AddProduct {
            name,
            category,
            price,
            discount,
            description,
            image_url,
            sizes,
            colors,
            new_arrival,
            top_selling,
        } => {
            let draft = ProductDraft {
                name,
                description,
                price,
                discount,
                image_url,
                category,
                sizes,
                colors,
                is_new_arrival: new_arrival,
                is_top_selling: top_selling,
            };
            add_product(draft, ctx).await
        }
        AdminCommand::DeleteProduct { id, yes } => {
            delete_product(&ProductId::new(id), yes, ctx).await
        }
    }
}

fn parse_status(raw: &str) -> Result<OrderStatus> {
    OrderStatus::parse(raw).ok_or_else(|| {
        let valid: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        anyhow!("Unknown order status '{}' (expected one of: {})", raw, valid.join(", "))
    })
}

async fn show_stats(ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let stats = shop.dashboard()?;

    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("Products", &stats.total_products.to_string());
    ctx.output.kv("Orders", &stats.total_orders.to_string());
    ctx.output.kv("Revenue", &ctx.money(stats.total_revenue));
    for status in OrderStatus::ALL {
        ctx.output
            .kv(status.display_name(), &stats.count_for(status).to_string());
    }

    if !stats.recent_orders.is_empty() {
        ctx.output.header("Recent Orders");
        print_orders(&stats.recent_orders, ctx);
    }

    Ok(())
}

async fn list_orders(status: Option<&str>, ctx: &Context) -> Result<()> {
    let filter = status.map(parse_status).transpose()?;

    let shop = ctx.open_shop().await?;
    let mut orders = shop.store().orders()?;
    if let Some(wanted) = filter {
        orders.retain(|o| o.status == wanted);
    }
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if ctx.output.is_json() {
        ctx.output.json(&orders);
        return Ok(());
    }

    ctx.output.header("Orders");
    if orders.is_empty() {
        ctx.output.info("No orders found.");
        return Ok(());
    }
    print_orders(&orders, ctx);
    ctx.output.info("");
    ctx.output.info(&format!("Total: {} order(s)", orders.len()));

    Ok(())
}

fn print_orders(orders: &[Order], ctx: &Context) {
    let widths = [12, 12, 24, 12, 12, 18];
    ctx.output.table_row(
        &["ID", "NUMBER", "CUSTOMER", "TOTAL", "STATUS", "PLACED"],
        &widths,
    );
    ctx.output.info(&"-".repeat(100));

    for order in orders {
        let customer = order.customer_email.as_deref().unwrap_or(order.user_id.as_str());
        let total = ctx.money(order.total);
        let status = status_badge(order.status);
        let placed = order.created_at.format("%Y-%m-%d %H:%M").to_string();

        ctx.output.table_row(
            &[
                order.id.as_str(),
                &order.order_number,
                customer,
                &total,
                &status,
                &placed,
            ],
            &widths,
        );
    }
}

async fn set_order_status(order: &OrderId, raw_status: &str, ctx: &Context) -> Result<()> {
    let status = parse_status(raw_status)?;

    let shop = ctx.open_shop().await?;
    shop.set_order_status(order, status)?;
    ctx.save_shop(&shop).await?;

    ctx.output
        .success(&format!("Order {} is now {}", order, status_badge(status)));
    Ok(())
}

async fn add_product(draft: ProductDraft, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;
    let product = shop.create_product(draft)?;
    ctx.save_shop(&shop).await?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output
        .success(&format!("Created product {} ({})", product.id, product.name));
    Ok(())
}

async fn delete_product(id: &ProductId, yes: bool, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop().await?;

    if !yes && !ctx.output.is_json() {
        let name = shop
            .store()
            .product(id)?
            .map(|p| p.name)
            .unwrap_or_else(|| id.to_string());
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete product '{}'?", name))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Deletion cancelled");
            return Ok(());
        }
    }

    shop.delete_product(id)?;
    ctx.save_shop(&shop).await?;

    ctx.output.success(&format!("Deleted product {}", id));
    Ok(())
}
