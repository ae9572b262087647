//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use shop_commerce::Money;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ShopConfig};
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let pricing = &ctx.config.pricing;
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv("delivery_fee", &pricing.delivery_fee.to_string());
    ctx.output.kv("currency_symbol", &pricing.currency_symbol);
    ctx.output
        .kv("display_decimals", &pricing.display_decimals.to_string());

    let catalog = &ctx.config.catalog;
    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv("data_file", &catalog.data_file);
    ctx.output.kv("per_page", &catalog.per_page.to_string());
    ctx.output
        .kv("resolved data path", &ctx.data_path().display().to_string());

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(&ctx.cwd)?;
    let path = config_path.to_string_lossy().to_string();

    let mut config = ShopConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;
    config.validate()?;
    config.save(&path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Config left unchanged");
            return Ok(());
        }
    }

    let content = generate_default_config(&ctx.config.catalog.data_file);
    fs::write(&config_path, content)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn get_config_value(config: &ShopConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["pricing", "delivery_fee"] => Ok(config.pricing.delivery_fee.to_string()),
        ["pricing", "currency_symbol"] => Ok(config.pricing.currency_symbol.clone()),
        ["pricing", "display_decimals"] => Ok(config.pricing.display_decimals.to_string()),
        ["catalog", "data_file"] => Ok(config.catalog.data_file.clone()),
        ["catalog", "per_page"] => Ok(config.catalog.per_page.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut ShopConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["pricing", "delivery_fee"] => {
            config.pricing.delivery_fee = value
                .parse::<Money>()
                .map_err(|e| anyhow::anyhow!("Invalid amount '{}': {}", value, e))?
        }
        ["pricing", "currency_symbol"] => config.pricing.currency_symbol = value.to_string(),
        ["pricing", "display_decimals"] => config.pricing.display_decimals = value.parse()?,
        ["catalog", "data_file"] => config.catalog.data_file = value.to_string(),
        ["catalog", "per_page"] => config.catalog.per_page = value.parse()?,
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &std::path::Path) -> Result<PathBuf> {
    for name in &CONFIG_NAMES {
        let path = cwd.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("No config file found. Run `shop config init` to create one.")
}
