//! # Prompter
//!
//! Line-at-a-time console input with re-prompt loops.
//!
//! ## Retry Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  write prompt ──► read line ──► parse (checkout_core::validation)      │
//! │       ▲              │              │                                   │
//! │       │          EOF ▼              ├── Ok(value) ──► return            │
//! │       │     AppError::InputClosed   │                                   │
//! │       │                             └── Err(e) ──► print "Error: e"    │
//! │       └────────────────────────────────────────────┘                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests drive it with in-memory buffers.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::{info, warn};

use checkout_core::validation::{
    is_end_of_list, parse_date, parse_price, parse_quantity, validate_birth_date,
    validate_customer_name, validate_line_item_count, validate_product_name, ValidationResult,
};
use checkout_core::LineItem;

use crate::error::{AppError, AppResult};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Gives back the writer, e.g. to inspect what a test session printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its terminator.
    fn read_line(&mut self, prompt: &str, what: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed(what.to_string()));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Asks until `parse` accepts the answer.
    pub fn ask<T, F>(&mut self, prompt: &str, what: &str, mut parse: F) -> AppResult<T>
    where
        F: FnMut(&str) -> ValidationResult<T>,
    {
        loop {
            let line = self.read_line(prompt, what)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!(field = what, error = %e, "Rejected input");
                    self.say(format!("Error: {}. Please try again.", e))?;
                }
            }
        }
    }

    pub fn ask_customer_name(&mut self) -> AppResult<String> {
        self.ask("Enter your full name: ", "customer name", validate_customer_name)
    }

    /// Asks for a `DD/MM/YYYY` birth date no later than `reference_date`.
    pub fn ask_birth_date(&mut self, reference_date: NaiveDate) -> AppResult<NaiveDate> {
        self.ask(
            "Enter your birth date (DD/MM/YYYY): ",
            "birth date",
            |line| {
                let birth_date = parse_date(line)?;
                validate_birth_date(birth_date, reference_date)?;
                Ok(birth_date)
            },
        )
    }

    /// Collects products until an empty name or `done` / `fin`.
    pub fn ask_line_items(&mut self) -> AppResult<Vec<LineItem>> {
        let mut items: Vec<LineItem> = Vec::new();
        self.say("")?;
        self.say("--- Product Registration ---")?;

        loop {
            if let Err(e) = validate_line_item_count(items.len()) {
                warn!(items = items.len(), "Line item limit reached");
                self.say(format!("{}. Closing the product list.", e))?;
                break;
            }

            // End of input at this prompt closes the list like `done` does.
            let raw_name = match self.read_line("Product name (or 'done' to finish): ", "product name") {
                Ok(line) => line,
                Err(AppError::InputClosed(_)) => break,
                Err(e) => return Err(e),
            };
            if is_end_of_list(&raw_name) {
                break;
            }
            let name = match validate_product_name(&raw_name) {
                Ok(name) => name,
                Err(e) => {
                    warn!(field = "product name", error = %e, "Rejected input");
                    self.say(format!("Error: {}. Please try again.", e))?;
                    continue;
                }
            };

            let unit_price = self.ask(&format!("Unit price of {}: ", name), "price", parse_price)?;
            let quantity = self.ask(&format!("Quantity of {}: ", name), "quantity", parse_quantity)?;

            let item = LineItem::new(name, unit_price, quantity);
            info!(
                product = item.name(),
                unit_price_cents = unit_price.cents(),
                quantity,
                "Line item added"
            );
            self.say(format!("Product added. Subtotal: {}", item.subtotal()))?;
            items.push(item);
        }

        if items.is_empty() {
            self.say("No products were registered.")?;
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()
    }

    #[test]
    fn test_customer_name_reprompts_when_blank() {
        let mut p = prompter("\n  Ana López \n");
        assert_eq!(p.ask_customer_name().unwrap(), "Ana López");

        let out = printed(p);
        assert_eq!(out.matches("Enter your full name: ").count(), 2);
        assert!(out.contains("Error: customer name is required. Please try again."));
    }

    #[test]
    fn test_birth_date_reprompts_until_valid() {
        let mut p = prompter("1990-03-10\n31/02/1990\n10/03/2030\n10/03/1990\n");
        let birth = p.ask_birth_date(today()).unwrap();
        assert_eq!(birth, NaiveDate::from_ymd_opt(1990, 3, 10).unwrap());

        let out = printed(p);
        assert_eq!(out.matches("Error:").count(), 3);
        assert!(out.contains("cannot be after 03/03/2024"));
    }

    #[test]
    fn test_birth_date_handles_crlf() {
        let mut p = prompter("10/03/1990\r\n");
        assert!(p.ask_birth_date(today()).is_ok());
    }

    #[test]
    fn test_input_closed_while_prompting() {
        let mut p = prompter("not a date\n");
        let err = p.ask_birth_date(today()).unwrap_err();
        assert!(matches!(err, AppError::InputClosed(ref what) if what == "birth date"));
    }

    #[test]
    fn test_line_items_with_retries() {
        let input = "Bread\n-1\nabc\n1.20\n0\n2\nWine\n8,99\n3\ndone\n";
        let mut p = prompter(input);
        let items = p.ask_line_items().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], LineItem::new("Bread", checkout_core::Money::from_cents(120), 2));
        assert_eq!(items[1].subtotal().cents(), 2697);

        let out = printed(p);
        assert!(out.contains("Error: price cannot be negative. Please try again."));
        assert!(out.contains("Error: price has invalid format"));
        assert!(out.contains("Error: quantity must be positive. Please try again."));
        assert!(out.contains("Product added. Subtotal: 2.40 €"));
        assert!(out.contains("Product added. Subtotal: 26.97 €"));
    }

    #[test]
    fn test_line_items_stop_on_blank_line() {
        let mut p = prompter("Cake\n10\n1\n\nignored\n");
        let items = p.ask_line_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Cake");
    }

    #[test]
    fn test_no_line_items() {
        let mut p = prompter("FIN\n");
        assert!(p.ask_line_items().unwrap().is_empty());
        assert!(printed(p).contains("No products were registered."));
    }

    #[test]
    fn test_line_items_input_closed_mid_product() {
        let mut p = prompter("Cake\n10\n");
        let err = p.ask_line_items().unwrap_err();
        assert!(matches!(err, AppError::InputClosed(ref what) if what == "quantity"));
    }

    #[test]
    fn test_line_items_end_of_input_at_name_closes_list() {
        let mut p = prompter("Cake\n10\n1\n");
        let items = p.ask_line_items().unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_line_items_overlong_name_reprompts() {
        let input = format!("{}\nTea\n2\n1\ndone\n", "x".repeat(201));
        let mut p = prompter(&input);
        let items = p.ask_line_items().unwrap();
        assert_eq!(items.len(), 1);
        assert!(printed(p).contains("product name must be at most 200 characters"));
    }
}
