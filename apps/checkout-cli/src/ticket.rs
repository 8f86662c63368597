//! # Ticket Rendering
//!
//! Formats a [`Receipt`] as the printed purchase ticket.
//!
//! ## Layout
//! ```text
//! =============================================
//!            Birthday Discount Store
//!           PURCHASE & DISCOUNT TICKET
//! =============================================
//! Customer: Ana López
//! Date: 03/03/2024
//! Calculated age: 33 years
//! ---------------------------------------------
//! Products:
//!   Bread (2 units @ 1.20 €) -> Subtotal: 2.40 €
//! ---------------------------------------------
//! Gross amount:                         2.40 €
//! Age discount (0%):                    0.00 €
//! ...
//! ```

use std::fmt::Write;

use checkout_core::validation::format_date;
use checkout_core::{BirthdayGreeting, DiscountRate, Money, Receipt};

use crate::config::CheckoutConfig;

/// Ticket width in characters.
pub const TICKET_WIDTH: usize = 45;

const LABEL_WIDTH: usize = 32;

fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(TICKET_WIDTH).collect()
}

fn amount_line(label: &str, amount: String) -> String {
    format!(
        "{:<lw$}{:>aw$}",
        label,
        amount,
        lw = LABEL_WIDTH,
        aw = TICKET_WIDTH - LABEL_WIDTH
    )
}

fn plural(n: u32, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// The personalised message for a greeting.
pub fn greeting_text(greeting: BirthdayGreeting) -> String {
    match greeting {
        BirthdayGreeting::Imminent => format!(
            "Happy early birthday! Enjoy your special {} discount.",
            DiscountRate::BIRTHDAY_WEEK
        ),
        BirthdayGreeting::Approaching => format!(
            "Your birthday is coming up! Enjoy your special {} discount.",
            DiscountRate::BIRTHDAY_FORTNIGHT
        ),
    }
}

/// Renders the full ticket, ending with a newline.
pub fn render(receipt: &Receipt, config: &CheckoutConfig) -> String {
    let b = &receipt.breakdown;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{:^width$}", config.store_name, width = TICKET_WIDTH);
    let _ = writeln!(out, "{:^width$}", "PURCHASE & DISCOUNT TICKET", width = TICKET_WIDTH);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "Customer: {}", receipt.customer);
    let _ = writeln!(out, "Date: {}", format_date(config.reference_date));
    let _ = writeln!(
        out,
        "Calculated age: {} {}",
        b.age_years,
        plural(b.age_years, "year", "years")
    );
    let _ = writeln!(out, "{}", rule('-'));

    let _ = writeln!(out, "Products:");
    if receipt.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in &receipt.items {
        let _ = writeln!(
            out,
            "  {} ({} {} @ {}) -> Subtotal: {}",
            item.name(),
            item.quantity(),
            plural(item.quantity(), "unit", "units"),
            item.unit_price(),
            item.subtotal()
        );
    }
    let _ = writeln!(out, "{}", rule('-'));

    let _ = writeln!(out, "{}", amount_line("Gross amount:", receipt.gross.to_string()));
    let _ = writeln!(
        out,
        "{}",
        amount_line(
            &format!("Age discount ({}):", b.age_discount),
            receipt.age_discount_amount.to_string()
        )
    );
    let _ = writeln!(
        out,
        "{}",
        amount_line(
            &format!("Birthday discount ({}):", b.birthday_discount),
            receipt.birthday_discount_amount.to_string()
        )
    );
    let _ = writeln!(out, "{}", rule('-'));

    let _ = writeln!(
        out,
        "TOTAL DISCOUNT APPLIED (max {}): ({})",
        DiscountRate::MAX_TOTAL,
        b.total_discount
    );
    let _ = writeln!(
        out,
        "{}",
        amount_line("Total discount:", negated(receipt.total_discount_amount))
    );
    let _ = writeln!(out, "{}", rule('-'));
    let _ = writeln!(out, "{}", amount_line("AMOUNT DUE:", receipt.amount_due.to_string()));
    let _ = writeln!(out, "{}", rule('='));

    if let Some(greeting) = b.birthday_greeting() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Special message!");
        let _ = writeln!(out, "{}", greeting_text(greeting));
    }

    out
}

/// `-6.77 €`; zero stays `0.00 €`.
fn negated(amount: Money) -> String {
    if amount.is_zero() {
        amount.to_string()
    } else {
        (Money::zero() - amount).to_string()
    }
}
