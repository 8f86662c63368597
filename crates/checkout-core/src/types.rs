//! # Domain Types
//!
//! Core domain types shared by the discount engine and the receipt.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │    LineItem     │   │  DiscountBreakdown  │   │  DiscountRate   │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  name           │   │  age_years          │   │  bps (u32)      │   │
//! │  │  unit_price     │   │  days_to_birthday   │   │  1000 = 10%     │   │
//! │  │  quantity       │   │  age / birthday /   │   └─────────────────┘   │
//! │  │  subtotal()     │   │  total discount     │                         │
//! │  └─────────────────┘   └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 20% is exactly `2000`.
/// Summing and capping rates stays in integers; [`DiscountRate::percentage`]
/// is only for display and for callers that want the `f64` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Under-18 discount: 10%.
    pub const MINOR: DiscountRate = DiscountRate(1000);
    /// Over-65 discount: 15%.
    pub const SENIOR: DiscountRate = DiscountRate(1500);
    /// Birthday within a week: 20%.
    pub const BIRTHDAY_WEEK: DiscountRate = DiscountRate(2000);
    /// Birthday within two weeks: 10%.
    pub const BIRTHDAY_FORTNIGHT: DiscountRate = DiscountRate(1000);
    /// Ceiling for the combined discount: 30%.
    pub const MAX_TOTAL: DiscountRate = DiscountRate(3000);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a percentage (e.g., `20.0`).
    ///
    /// Negative and NaN inputs become zero.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * 100.0).round().max(0.0) as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (`2000` → `20.0`).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

/// Renders without decimals when whole (`20%`), otherwise with two (`12.50%`).
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{:.2}%", self.percentage())
        }
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchased product.
///
/// Immutable once built. Price and quantity are validated before
/// construction (see [`crate::validation`]); this type does not re-check them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Discount Breakdown
// =============================================================================

/// Everything the engine derives from one (birth date, reference date) pair.
///
/// Built by [`crate::DiscountCalculator::breakdown`], which guarantees that
/// `total_discount` was combined from the two component rates of the same
/// calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    /// Completed years at the reference date.
    pub age_years: u32,
    /// Days until the next birthday, always in `1..=366`.
    pub days_to_birthday: u32,
    pub age_discount: DiscountRate,
    pub birthday_discount: DiscountRate,
    /// `min(age + birthday, 30%)`.
    pub total_discount: DiscountRate,
}

impl DiscountBreakdown {
    /// The personalised ticket message that applies, if any.
    pub fn birthday_greeting(&self) -> Option<BirthdayGreeting> {
        BirthdayGreeting::for_days(self.days_to_birthday)
    }
}

/// Personalised message shown when the birthday is close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthdayGreeting {
    /// Birthday within 7 days.
    Imminent,
    /// Birthday in 8 to 14 days.
    Approaching,
}

impl BirthdayGreeting {
    pub fn for_days(days_to_birthday: u32) -> Option<Self> {
        match days_to_birthday {
            0..=7 => Some(BirthdayGreeting::Imminent),
            8..=14 => Some(BirthdayGreeting::Approaching),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_from_bps() {
        let rate = DiscountRate::from_bps(1500);
        assert_eq!(rate.bps(), 1500);
        assert!((rate.percentage() - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(20.0), DiscountRate::BIRTHDAY_WEEK);
        assert_eq!(DiscountRate::from_percentage(12.5).bps(), 1250);
        assert!(DiscountRate::from_percentage(-3.0).is_zero());
    }

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(DiscountRate::MAX_TOTAL.to_string(), "30%");
        assert_eq!(DiscountRate::zero().to_string(), "0%");
        assert_eq!(DiscountRate::from_bps(1250).to_string(), "12.50%");
    }

    #[test]
    fn test_discount_rate_default() {
        assert_eq!(DiscountRate::default(), DiscountRate::zero());
    }

    #[test]
    fn test_line_item_subtotal() {
        let item = LineItem::new("Chocolate cake", Money::from_cents(1250), 3);
        assert_eq!(item.name(), "Chocolate cake");
        assert_eq!(item.unit_price().cents(), 1250);
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.subtotal().cents(), 3750);
    }

    #[test]
    fn test_free_line_item() {
        let item = LineItem::new("Balloon", Money::zero(), 10);
        assert!(item.subtotal().is_zero());
    }

    #[test]
    fn test_birthday_greeting_thresholds() {
        assert_eq!(BirthdayGreeting::for_days(1), Some(BirthdayGreeting::Imminent));
        assert_eq!(BirthdayGreeting::for_days(7), Some(BirthdayGreeting::Imminent));
        assert_eq!(BirthdayGreeting::for_days(8), Some(BirthdayGreeting::Approaching));
        assert_eq!(BirthdayGreeting::for_days(14), Some(BirthdayGreeting::Approaching));
        assert_eq!(BirthdayGreeting::for_days(15), None);
        assert_eq!(BirthdayGreeting::for_days(366), None);
    }
}
