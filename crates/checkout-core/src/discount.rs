//! # Discount Engine
//!
//! Computes the age-based and birthday-based discounts for one customer.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  birth_date ─┬──► age_in_years() ─────────────► age_discount()  ──┐    │
//! │              │                                  <18 → 10%         │    │
//! │  reference ──┤                                  >65 → 15%         │    │
//! │              │                                                    ▼    │
//! │              └──► days_until_next_birthday() ─► birthday_discount()    │
//! │                                                 ≤7  → 20%         │    │
//! │                                                 ≤14 → 10%         │    │
//! │                                                                   ▼    │
//! │                                         combine_discounts() = min(Σ, 30%)
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Leap-Day Birthdays
//! Age counts completed years: a customer born on 29 February turns a year
//! older on 1 March in common years. The days-until count observes the
//! birthday on 28 February in those years.
//!
//! ## Birthday On The Reference Date
//! A birthday that falls exactly on the reference date counts as already
//! celebrated and rolls to next year, so `days_until_next_birthday()` is
//! never 0. The minimum is 1 day and the maximum is 366.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::types::{DiscountBreakdown, DiscountRate};

/// Below this age the minor discount applies.
pub const ADULT_AGE: u32 = 18;

/// Above this age the senior discount applies.
pub const SENIOR_AGE: u32 = 65;

/// Birthday within this many days earns the week discount.
pub const BIRTHDAY_WEEK_DAYS: u32 = 7;

/// Birthday within this many days earns the fortnight discount.
pub const BIRTHDAY_FORTNIGHT_DAYS: u32 = 14;

// =============================================================================
// Calculator
// =============================================================================

/// Discount engine for one customer at one reference date.
///
/// Stateless after construction: every method is a pure read of the two
/// dates, so repeated calls always return the same values.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use checkout_core::discount::DiscountCalculator;
/// use checkout_core::types::DiscountRate;
///
/// let birth = NaiveDate::from_ymd_opt(2010, 3, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
/// let calc = DiscountCalculator::new(birth, today);
///
/// let total = DiscountCalculator::combine_discounts(
///     calc.age_discount(),      // 10%, customer is 13
///     calc.birthday_discount(), // 20%, birthday in 7 days
/// );
/// assert_eq!(total, DiscountRate::MAX_TOTAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountCalculator {
    birth_date: NaiveDate,
    reference_date: NaiveDate,
}

impl DiscountCalculator {
    /// Both dates are expected to be validated already.
    pub fn new(birth_date: NaiveDate, reference_date: NaiveDate) -> Self {
        DiscountCalculator {
            birth_date,
            reference_date,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Completed years between the birth date and the reference date.
    ///
    /// The current year only counts once the birthday has been reached in
    /// the reference year. A birth date after the reference date yields 0.
    pub fn age_in_years(&self) -> u32 {
        self.reference_date
            .years_since(self.birth_date)
            .unwrap_or(0)
    }

    /// Days from the reference date to the next birthday, in `1..=366`.
    pub fn days_until_next_birthday(&self) -> u32 {
        let reference = self.reference_date;

        let mut candidate = observed_birthday(self.birth_date, reference.year());
        if candidate <= reference {
            candidate = observed_birthday(self.birth_date, reference.year() + 1);
        }

        let days = candidate.signed_duration_since(reference).num_days();
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Age-based discount for this customer.
    pub fn age_discount(&self) -> DiscountRate {
        age_discount_for(self.age_in_years())
    }

    /// Birthday-proximity discount for this customer.
    pub fn birthday_discount(&self) -> DiscountRate {
        birthday_discount_for(self.days_until_next_birthday())
    }

    /// Sums two discounts and caps the result at [`DiscountRate::MAX_TOTAL`].
    ///
    /// The cap is a hard ceiling on the sum; components are never scaled.
    /// Callers pass rates computed from the same calculator.
    pub fn combine_discounts(age_discount: DiscountRate, birthday_discount: DiscountRate) -> DiscountRate {
        let sum = DiscountRate::from_bps(age_discount.bps().saturating_add(birthday_discount.bps()));
        sum.min(DiscountRate::MAX_TOTAL)
    }

    /// Runs every rule once and returns the consistent result set.
    pub fn breakdown(&self) -> DiscountBreakdown {
        let age_years = self.age_in_years();
        let days_to_birthday = self.days_until_next_birthday();
        let age_discount = age_discount_for(age_years);
        let birthday_discount = birthday_discount_for(days_to_birthday);
        let total_discount = Self::combine_discounts(age_discount, birthday_discount);

        debug!(
            birth_date = %self.birth_date,
            reference_date = %self.reference_date,
            age_years,
            days_to_birthday,
            age_discount_bps = age_discount.bps(),
            birthday_discount_bps = birthday_discount.bps(),
            total_discount_bps = total_discount.bps(),
            "Discount breakdown computed"
        );

        DiscountBreakdown {
            age_years,
            days_to_birthday,
            age_discount,
            birthday_discount,
            total_discount,
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Age rule: under 18 → 10%, over 65 → 15%, otherwise 0%.
pub fn age_discount_for(age_years: u32) -> DiscountRate {
    if age_years < ADULT_AGE {
        DiscountRate::MINOR
    } else if age_years > SENIOR_AGE {
        DiscountRate::SENIOR
    } else {
        DiscountRate::zero()
    }
}

/// Birthday rule: within 7 days → 20%, within 14 days → 10%, otherwise 0%.
pub fn birthday_discount_for(days_to_birthday: u32) -> DiscountRate {
    if days_to_birthday <= BIRTHDAY_WEEK_DAYS {
        DiscountRate::BIRTHDAY_WEEK
    } else if days_to_birthday <= BIRTHDAY_FORTNIGHT_DAYS {
        DiscountRate::BIRTHDAY_FORTNIGHT
    } else {
        DiscountRate::zero()
    }
}

// =============================================================================
// Calendar Helpers
// =============================================================================

/// The birthday as a date in `year`; 29 February falls back to the 28th.
fn observed_birthday(birth_date: NaiveDate, year: i32) -> NaiveDate {
    let (month, day) = match (birth_date.month(), birth_date.day()) {
        (2, 29) if !is_leap_year(year) => (2, 28),
        month_day => month_day,
    };
    // Only fails past the edge of chrono's supported range.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

// =============================================================================
// Unit Tests
// =============================================================================
