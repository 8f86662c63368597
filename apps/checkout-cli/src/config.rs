//! # Configuration
//!
//! Settings resolved once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`CHECKOUT_*`)
//! 3. Defaults (this file)
//!
//! Flags and environment variables are merged by clap; this module turns the
//! raw strings into typed settings.

use chrono::NaiveDate;
use clap::Parser;

use checkout_core::validation::parse_date;

/// Store name printed at the top of the ticket when none is configured.
pub const DEFAULT_STORE_NAME: &str = "Birthday Discount Store";

/// Command-line interface.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "checkout",
    version,
    about = "Interactive checkout with age and birthday discounts"
)]
pub struct Cli {
    /// Store name printed on the ticket
    #[arg(long, env = "CHECKOUT_STORE_NAME")]
    pub store_name: Option<String>,

    /// Date used as "today" for age and birthday calculations
    #[arg(long, env = "CHECKOUT_TODAY", value_name = "DD/MM/YYYY")]
    pub today: Option<String>,

    /// Print the receipt as JSON instead of a ticket
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How the receipt is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable ticket
    #[default]
    Text,
    /// Pretty-printed JSON receipt
    Json,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Printed at the top of the ticket
    pub store_name: String,

    /// "Today" for every calculation in the session
    pub reference_date: NaiveDate,

    pub output: OutputFormat,
}

impl CheckoutConfig {
    /// Default configuration for the given reference date.
    pub fn new(reference_date: NaiveDate) -> Self {
        CheckoutConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            reference_date,
            output: OutputFormat::Text,
        }
    }

    /// Resolves flags/env over defaults.
    ///
    /// `today` is the system date, used when no reference date is given.
    pub fn from_cli(cli: &Cli, today: NaiveDate) -> Result<Self, ConfigError> {
        let mut config = CheckoutConfig::new(today);

        if let Some(store_name) = cli.store_name.as_deref().map(str::trim) {
            if !store_name.is_empty() {
                config.store_name = store_name.to_string();
            }
        }

        if let Some(raw) = &cli.today {
            config.reference_date = parse_date(raw).map_err(|e| ConfigError::InvalidValue {
                name: "CHECKOUT_TODAY".to_string(),
                reason: e.to_string(),
            })?;
        }

        if cli.json {
            config.output = OutputFormat::Json;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
