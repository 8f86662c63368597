//! # checkout-core: Pure Business Logic for Birthday Checkout
//!
//! This crate holds the discount engine and everything it needs, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Birthday Checkout Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  checkout-cli (Console App)                     │   │
//! │  │   Name ──► Birth Date ──► Products ──► Ticket (text or JSON)    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ discount  │  │  receipt  │  │ validation│  │   │
//! │  │   │ LineItem  │  │Calculator │  │  Receipt  │  │  parsers  │  │   │
//! │  │   │DiscountRate│ │ Breakdown │  │  totals   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO ENV • PURE FUNCTIONS                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, DiscountRate, DiscountBreakdown)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - Age / birthday discount engine
//! - [`receipt`] - Purchase totals after discount
//! - [`error`] - Domain error types
//! - [`validation`] - Parsing and validation of raw user input
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use checkout_core::discount::DiscountCalculator;
//!
//! let birth = NaiveDate::from_ymd_opt(1990, 3, 10).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
//!
//! let breakdown = DiscountCalculator::new(birth, today).breakdown();
//! assert_eq!(breakdown.age_years, 33);
//! assert_eq!(breakdown.days_to_birthday, 7);
//! assert_eq!(breakdown.total_discount.percentage(), 20.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::DiscountCalculator;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use receipt::Receipt;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum line items accepted in a single purchase.
pub const MAX_LINE_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;

/// Maximum unit price in cents (1 000 000.00 €).
///
/// Keeps `price × MAX_ITEM_QUANTITY × MAX_LINE_ITEMS` well inside `i64`.
pub const MAX_UNIT_PRICE_CENTS: i64 = 100_000_000;

/// Maximum length of customer and product names.
pub const MAX_NAME_LENGTH: usize = 200;
