//! # Birthday Checkout Entry Point
//!
//! ```bash
//! # Interactive checkout using today's date
//! cargo run -p checkout-cli
//!
//! # Fixed reference date, JSON receipt, debug logs
//! cargo run -p checkout-cli -- --today 03/03/2024 --json -v
//! ```

use anyhow::Context;
use clap::Parser;

use checkout_cli::config::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    checkout_cli::init_tracing(cli.verbose);

    checkout_cli::run(&cli).context("checkout failed")
}
