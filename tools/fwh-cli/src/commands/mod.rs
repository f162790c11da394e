//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod deals;
pub mod quote;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,

    /// Search titles and tags.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter by category (men, women, sports, custom).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Filter by product type (boutique, custom).
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Show only customizable products.
    #[arg(long)]
    pub customizable: bool,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products.
    List,
    /// Show details for a specific product.
    Show {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the deals command.
#[derive(Args)]
pub struct DealsArgs {}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Number of shirts to quote.
    pub quantity: u32,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Catalog seed file (JSON) to shop from.
    #[arg(long)]
    pub catalog: Option<String>,
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
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
