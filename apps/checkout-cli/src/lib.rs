//! # Checkout CLI Library
//!
//! The console collaborator around `checkout-core`.
//!
//! ## Module Organization
//! ```text
//! checkout_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & run)
//! ├── config.rs       ◄─── Flags, env vars, defaults
//! ├── prompt.rs       ◄─── Re-prompt loops over stdin
//! ├── session.rs      ◄─── One customer, start to finish
//! ├── ticket.rs       ◄─── Receipt rendering
//! └── error.rs        ◄─── AppError
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod session;
pub mod ticket;

use std::io;

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{CheckoutConfig, Cli};
use error::AppResult;
use prompt::Prompter;

/// Runs one interactive checkout on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Resolve configuration (flags → env → defaults)
/// 2. Run the session
/// 3. Print the receipt
pub fn run(cli: &Cli) -> AppResult<()> {
    let config = CheckoutConfig::from_cli(cli, Local::now().date_naive())?;
    info!(
        store = %config.store_name,
        reference_date = %config.reference_date,
        output = ?config.output,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    session::checkout(&mut prompter, &config)?;

    info!("Checkout complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging on stderr.
///
/// ## Log Levels
/// - `RUST_LOG` always wins when set
/// - Default: `warn`, so prompts and the ticket stay uncluttered
/// - `--verbose`: debug for the checkout crates
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,checkout_cli=debug,checkout_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
