//! Console configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use marketplace_app::domain::products::ProductDraft;
use rust_decimal::Decimal;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Marketplace console configuration
#[derive(Debug, Parser)]
#[command(name = "marketplace-console", about = "Marketplace listings console", long_about = None)]
pub struct ConsoleConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// YAML document used to seed the store
    #[arg(long, env = "FIXTURE_PATH")]
    pub fixture: Option<PathBuf>,

    /// Signed-in user id; browse signed out when omitted
    #[arg(long, env = "MARKETPLACE_USER")]
    pub user: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl ConsoleConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show every listed product
    Listings,

    /// Show a product's detail page
    Product(ProductArgs),

    /// Create a product
    Create(CreateArgs),
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product key
    pub id: String,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Product name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Product description
    #[arg(long, default_value = "")]
    pub desc: String,

    /// Asking price
    #[arg(long, allow_negative_numbers = true)]
    pub price: Option<Decimal>,

    /// Image URL; repeat for more images
    #[arg(long = "image")]
    pub images: Vec<String>,

    /// Condition label, e.g. "like new"
    #[arg(long)]
    pub condition: Option<String>,

    /// Color label
    #[arg(long)]
    pub color: Option<String>,
}

impl From<CreateArgs> for ProductDraft {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            desc: args.desc,
            price: args.price,
            images: args.images,
            condition: args.condition,
            color: args.color,
        }
    }
}
