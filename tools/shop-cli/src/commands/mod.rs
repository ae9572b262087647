//! CLI command implementations.

pub mod admin;
pub mod browse;
pub mod cart;
pub mod config;
pub mod product;
pub mod review;
pub mod search;

use clap::{Args, Subcommand};

/// Arguments for the browse command.
///
/// Flags mirror the listing query parameters and are passed through as raw
/// strings so they are validated the same way.
#[derive(Args)]
pub struct BrowseArgs {
    /// Exact category, e.g. "shirts".
    #[arg(long)]
    pub category: Option<String>,

    /// Only new arrivals ("true" or "false").
    #[arg(long = "new", value_name = "BOOL")]
    pub new_arrivals: Option<String>,

    /// Only discounted products ("true" or "false").
    #[arg(long = "on-sale", value_name = "BOOL")]
    pub on_sale: Option<String>,

    /// Lowest list price, inclusive.
    #[arg(long = "min-price", value_name = "AMOUNT")]
    pub min_price: Option<String>,

    /// Highest list price, inclusive.
    #[arg(long = "max-price", value_name = "AMOUNT")]
    pub max_price: Option<String>,

    /// Comma-separated colors; any match qualifies.
    #[arg(long)]
    pub colors: Option<String>,

    /// Comma-separated sizes; any match qualifies.
    #[arg(long)]
    pub sizes: Option<String>,

    /// newest, price-asc, price-desc or rating.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page to show.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Products per page (default: from config).
    #[arg(long)]
    pub per_page: Option<usize>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in names and descriptions.
    pub query: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,

    /// Show at most N reviews.
    #[arg(short, long, default_value = "5")]
    pub reviews: usize,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the priced cart.
    Show {
        /// User ID.
        user: String,
    },
    /// Add a product selection.
    Add {
        /// User ID.
        user: String,
        /// Product ID.
        product: String,
        #[arg(short, long)]
        size: String,
        #[arg(long)]
        color: String,
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Set a line's quantity (0 removes it).
    Set {
        /// User ID.
        user: String,
        /// Cart line ID.
        line: String,
        quantity: u32,
    },
    /// Remove a line.
    Remove {
        /// User ID.
        user: String,
        /// Cart line ID.
        line: String,
    },
    /// Remove every line.
    Clear {
        /// User ID.
        user: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    /// Product ID.
    pub product: String,

    /// Reviewing user ID.
    #[arg(short, long)]
    pub user: String,

    /// Stars, 1 to 5.
    #[arg(short, long)]
    pub rating: u8,

    /// Review text.
    #[arg(short = 'm', long)]
    pub comment: String,

    /// Display name shown with the review.
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Show dashboard statistics.
    Stats,
    /// List orders, newest first.
    Orders {
        /// Only orders with this status.
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Set an order's status.
    OrderStatus {
        /// Order ID.
        order: String,
        /// pending, processing, shipped, delivered or cancelled.
        status: String,
    },
    /// Create a product.
    AddProduct {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: String,
        /// Percentage off, 0 to 100.
        #[arg(long)]
        discount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        /// Comma-separated.
        #[arg(long)]
        sizes: String,
        /// Comma-separated.
        #[arg(long)]
        colors: String,
        #[arg(long)]
        new_arrival: bool,
        #[arg(long)]
        top_selling: bool,
    },
    /// Delete a product.
    DeleteProduct {
        /// Product ID.
        id: String,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Overwrite an existing config without asking.
        #[arg(short, long)]
        force: bool,
    },
}
