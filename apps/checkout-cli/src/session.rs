//! # Checkout Session
//!
//! One customer, start to finish.
//!
//! ```text
//! banner ──► name ──► birth date ──► products ──► DiscountCalculator
//!                                                        │
//!                                   ticket / JSON ◄── Receipt
//! ```

use std::io::{BufRead, Write};

use tracing::info;

use checkout_core::{DiscountCalculator, Receipt};

use crate::config::{CheckoutConfig, OutputFormat};
use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::ticket;

/// Runs a full session and prints the receipt in the configured format.
pub fn checkout<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CheckoutConfig,
) -> AppResult<Receipt> {
    prompter.say("--- Birthday Discount Checkout ---")?;

    let customer = prompter.ask_customer_name()?;
    let birth_date = prompter.ask_birth_date(config.reference_date)?;
    let items = prompter.ask_line_items()?;

    let breakdown = DiscountCalculator::new(birth_date, config.reference_date).breakdown();
    let receipt = Receipt::new(customer, items, breakdown);

    info!(
        items = receipt.items.len(),
        gross_cents = receipt.gross.cents(),
        total_discount_bps = breakdown.total_discount.bps(),
        amount_due_cents = receipt.amount_due.cents(),
        "Receipt issued"
    );

    match config.output {
        OutputFormat::Text => {
            prompter.say("")?;
            prompter.say(ticket::render(&receipt, config).trim_end())?;
        }
        OutputFormat::Json => {
            prompter.say("")?;
            prompter.say(serde_json::to_string_pretty(&receipt)?)?;
        }
    }

    Ok(receipt)
}
