//! CLI configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use shop_commerce::cart::{PricingConfig, DEFAULT_DELIVERY_FEE};
use shop_commerce::Money;

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Cart pricing and money display.
    #[serde(default)]
    pub pricing: PricingSection,

    /// Catalog data and listing layout.
    #[serde(default)]
    pub catalog: CatalogSection,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Reject values the storefront cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.pricing.delivery_fee.is_negative() {
            bail!("pricing.delivery_fee must not be negative");
        }
        if self.pricing.display_decimals > 8 {
            bail!("pricing.display_decimals must be at most 8");
        }
        if self.catalog.per_page == 0 {
            bail!("catalog.per_page must be at least 1");
        }
        if self.catalog.data_file.trim().is_empty() {
            bail!("catalog.data_file is required");
        }
        Ok(())
    }

    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            delivery_fee: self.pricing.delivery_fee,
        }
    }

    /// Format an amount for display, e.g. "$25.47".
    pub fn money(&self, amount: Money) -> String {
        amount.display(&self.pricing.currency_symbol, self.pricing.display_decimals)
    }
}

/// Pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSection {
    /// Flat fee added to every non-empty cart.
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: Money,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Decimal places shown for money. Totals are never rounded internally.
    #[serde(default = "default_display_decimals")]
    pub display_decimals: u32,
}

fn default_delivery_fee() -> Money {
    Money::from_units(DEFAULT_DELIVERY_FEE)
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_display_decimals() -> u32 {
    2
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            delivery_fee: default_delivery_fee(),
            currency_symbol: default_currency_symbol(),
            display_decimals: default_display_decimals(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// JSON snapshot holding products, carts, reviews and orders.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Products per listing page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_data_file() -> String {
    "shop-data.json".to_string()
}

fn default_per_page() -> usize {
    9
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            per_page: default_per_page(),
        }
    }
}

/// Generate a default shop.toml config file.
pub fn generate_default_config(data_file: &str) -> String {
    format!(
        r#"# Shop storefront configuration

[pricing]
delivery_fee = 15
currency_symbol = "$"
display_decimals = 2

[catalog]
data_file = "{data_file}"
per_page = 9
"#,
        data_file = data_file
    )
}
