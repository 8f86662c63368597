//! # Validation Module
//!
//! Parsing and validation of the raw text a cashier types at the console.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Flow                                         │
//! │                                                                         │
//! │  Console line (String)                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: parse_* / validate_*                                     │
//! │  ├── Err(ValidationError) → message shown, prompt repeated             │
//! │  └── Ok(typed value)                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  LineItem / DiscountCalculator (never re-validate)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function of its arguments; the console loop
//! lives in the CLI crate.
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{parse_date, parse_price, parse_quantity};
//!
//! let birth = parse_date("10/03/1990").unwrap();
//! let price = parse_price("12,50").unwrap();
//! let qty = parse_quantity("3").unwrap();
//!
//! assert_eq!(price.cents(), 1250);
//! assert_eq!(qty, 3);
//! assert!(parse_date("1990-03-10").is_err());
//! ```

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::{MAX_ITEM_QUANTITY, MAX_LINE_ITEMS, MAX_NAME_LENGTH, MAX_UNIT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Display / entry format for dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Words that end the product list (compared case-insensitively).
pub const END_OF_LIST_WORDS: &[&str] = &["done", "fin"];

// =============================================================================
// Dates
// =============================================================================

/// Parses a strict `DD/MM/YYYY` date.
///
/// ## Rules
/// - Exactly two digits for day and month, four for the year
/// - Must be a real calendar date (31/02 is rejected)
/// - Surrounding whitespace is ignored
///
/// ## Example
/// ```rust
/// use checkout_core::validation::parse_date;
///
/// assert!(parse_date("29/02/2024").is_ok());
/// assert!(parse_date("29/02/2023").is_err());
/// assert!(parse_date("1/3/2024").is_err());
/// ```
pub fn parse_date(input: &str) -> ValidationResult<NaiveDate> {
    let raw = input.trim();
    let format_error = || ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "use DD/MM/YYYY".to_string(),
    };

    let parts: Vec<&str> = raw.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(format_error());
    };

    let widths_ok = day.len() == 2 && month.len() == 2 && year.len() == 4;
    let digits_ok = [day, month, year]
        .iter()
        .all(|part| part.bytes().all(|b| b.is_ascii_digit()));
    if !widths_ok || !digits_ok {
        return Err(format_error());
    }

    // All-digit and width-checked, so these parses cannot fail.
    let (Ok(day), Ok(month), Ok(year)) = (day.parse::<u32>(), month.parse::<u32>(), year.parse::<i32>()) else {
        return Err(format_error());
    };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: format!("{} is not a calendar date", raw),
    })
}

/// Formats a date the way it is entered (`DD/MM/YYYY`).
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Rejects birth dates that lie after the reference date.
pub fn validate_birth_date(birth_date: NaiveDate, reference_date: NaiveDate) -> ValidationResult<()> {
    if birth_date > reference_date {
        return Err(ValidationError::InFuture {
            field: "birth date".to_string(),
            reference: format_date(reference_date),
        });
    }

    Ok(())
}

// =============================================================================
// Names
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name.to_string())
}

/// Validates a customer name and returns it trimmed.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    validate_name("customer name", name)
}

/// Validates a product name and returns it trimmed.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_product_name;
///
/// assert_eq!(validate_product_name("  Cake ").unwrap(), "Cake");
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    validate_name("product name", name)
}

/// True when the typed product name means "no more products".
pub fn is_end_of_list(name: &str) -> bool {
    let name = name.trim();
    name.is_empty()
        || END_OF_LIST_WORDS
            .iter()
            .any(|word| name.eq_ignore_ascii_case(word))
}

// =============================================================================
// Numbers
// =============================================================================

/// Parses a unit price into [`Money`].
///
/// ## Rules
/// - Decimal number, `.` or `,` as separator
/// - At most two decimal places
/// - Zero is allowed (free item), negative is not
/// - Must not exceed MAX_UNIT_PRICE_CENTS (1 000 000.00 €)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::parse_price;
///
/// assert_eq!(parse_price("3").unwrap().cents(), 300);
/// assert_eq!(parse_price("0.5").unwrap().cents(), 50);
/// assert!(parse_price("-1").is_err());
/// assert!(parse_price("abc").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let raw = input.trim();
    let format_error = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let normalized = unsigned.replace(',', ".");
    let (whole, fraction) = normalized
        .split_once('.')
        .unwrap_or((normalized.as_str(), ""));

    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(format_error("enter a number such as 12.50"));
    }
    if fraction.len() > 2 {
        return Err(format_error("use at most two decimal places"));
    }

    let whole_euros: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| format_error("amount is too large"))?
    };
    let fraction_cents: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| format_error("enter a number such as 12.50"))? * 10,
        _ => fraction.parse().map_err(|_| format_error("enter a number such as 12.50"))?,
    };

    let cents = whole_euros
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction_cents))
        .ok_or_else(|| format_error("amount is too large"))?;

    if negative && cents > 0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if cents > MAX_UNIT_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_CENTS / 100,
        });
    }

    Ok(Money::from_cents(cents))
}

/// Parses a quantity.
///
/// ## Rules
/// - Whole number
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn parse_quantity(input: &str) -> ValidationResult<u32> {
    let raw = input.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "enter a whole number".to_string(),
    })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty)
        .ok()
        .filter(|q| *q <= MAX_ITEM_QUANTITY)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_ITEM_QUANTITY),
        })
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Checks that one more line item may be added.
///
/// ## Rules
/// - Must not exceed MAX_LINE_ITEMS (100)
pub fn validate_line_item_count(current_items: usize) -> CoreResult<()> {
    if current_items >= MAX_LINE_ITEMS {
        return Err(CoreError::TooManyLineItems {
            max: MAX_LINE_ITEMS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("10/03/1990").unwrap(),
            NaiveDate::from_ymd_opt(1990, 3, 10).unwrap()
        );
        assert_eq!(
            parse_date("  01/01/2000 \n").unwrap(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_bad_shapes() {
        assert!(parse_date("").is_err());
        assert!(parse_date("1990-03-10").is_err());
        assert!(parse_date("10/3/1990").is_err());
        assert!(parse_date("10/03/90").is_err());
        assert!(parse_date("10/03/1990/1").is_err());
        assert!(parse_date("aa/bb/cccc").is_err());
        assert!(parse_date("+1/03/1990").is_err());
    }

    #[test]
    fn test_parse_date_rejects_impossible_dates() {
        assert!(parse_date("31/02/2020").is_err());
        assert!(parse_date("29/02/2023").is_err());
        assert!(parse_date("00/01/2020").is_err());
        assert!(parse_date("01/13/2020").is_err());
        assert!(parse_date("29/02/2024").is_ok());
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert_eq!(format_date(date), "03/03/2024");
        assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    #[test]
    fn test_validate_birth_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        assert!(validate_birth_date(today, today).is_ok());
        assert!(validate_birth_date(NaiveDate::from_ymd_opt(1990, 3, 10).unwrap(), today).is_ok());

        let err = validate_birth_date(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), today).unwrap_err();
        assert_eq!(err.to_string(), "birth date cannot be after 03/03/2024");
    }

    #[test]
    fn test_validate_names() {
        assert_eq!(validate_customer_name(" Ana García ").unwrap(), "Ana García");
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_NAME_LENGTH)).is_ok());
        assert_eq!(
            validate_product_name(&"A".repeat(MAX_NAME_LENGTH + 1)).unwrap_err(),
            ValidationError::TooLong {
                field: "product name".to_string(),
                max: MAX_NAME_LENGTH,
            }
        );
    }

    #[test]
    fn test_is_end_of_list() {
        assert!(is_end_of_list(""));
        assert!(is_end_of_list("  "));
        assert!(is_end_of_list("done"));
        assert!(is_end_of_list("DONE"));
        assert!(is_end_of_list("Fin"));
        assert!(!is_end_of_list("Finca"));
        assert!(!is_end_of_list("Bread"));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50").unwrap().cents(), 1250);
        assert_eq!(parse_price("12,5").unwrap().cents(), 1250);
        assert_eq!(parse_price("12.").unwrap().cents(), 1200);
        assert_eq!(parse_price(".99").unwrap().cents(), 99);
        assert_eq!(parse_price("+4").unwrap().cents(), 400);
        assert_eq!(parse_price("0").unwrap().cents(), 0);
        assert_eq!(parse_price("-0").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_price_errors() {
        assert!(matches!(parse_price(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_price("-3.20"), Err(ValidationError::Negative { .. })));
        assert!(matches!(parse_price("abc"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_price("."), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_price("1.2.3"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_price("1.999"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_price("1e3"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(
            parse_price("99999999999999999999"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_price_upper_bound() {
        assert_eq!(parse_price("1000000").unwrap().cents(), MAX_UNIT_PRICE_CENTS);
        assert!(matches!(
            parse_price("1000000.01"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(
            parse_price("50000000000000000").unwrap_err().to_string(),
            "price must be between 0 and 1000000"
        );
    }

    #[test]
    fn test_largest_purchase_does_not_overflow() {
        let price = parse_price("1000000").unwrap();
        let qty = parse_quantity("999").unwrap();
        let item = crate::LineItem::new("Yacht", price, qty);

        let gross: Money = std::iter::repeat(item.subtotal()).take(MAX_LINE_ITEMS).sum();
        assert_eq!(gross.cents(), MAX_UNIT_PRICE_CENTS * 999 * 100);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("1").unwrap(), 1);
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("999").unwrap(), MAX_ITEM_QUANTITY);

        assert!(matches!(parse_quantity("0"), Err(ValidationError::MustBePositive { .. })));
        assert!(matches!(parse_quantity("-2"), Err(ValidationError::MustBePositive { .. })));
        assert!(matches!(parse_quantity("1000"), Err(ValidationError::OutOfRange { .. })));
        assert!(matches!(parse_quantity("2.5"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_quantity("two"), Err(ValidationError::InvalidFormat { .. })));
        assert!(matches!(parse_quantity(""), Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_validate_line_item_count() {
        assert!(validate_line_item_count(0).is_ok());
        assert!(validate_line_item_count(MAX_LINE_ITEMS - 1).is_ok());
        assert!(matches!(
            validate_line_item_count(MAX_LINE_ITEMS),
            Err(CoreError::TooManyLineItems { .. })
        ));
    }
}
