//! # Receipt
//!
//! Turns a discount breakdown and a list of line items into the amounts
//! printed on the ticket.
//!
//! ```text
//! gross             = Σ line_item.subtotal()
//! age amount        = gross × age_discount
//! birthday amount   = gross × birthday_discount
//! total discount    = gross × min(age + birthday, 30%)
//! amount due        = gross − total discount
//! ```
//!
//! The age and birthday amounts are informational. When the cap kicks in
//! they add up to more than the total discount actually taken.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{DiscountBreakdown, LineItem};

/// Totals for one purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub customer: String,
    pub breakdown: DiscountBreakdown,
    pub items: Vec<LineItem>,
    pub gross: Money,
    pub age_discount_amount: Money,
    pub birthday_discount_amount: Money,
    pub total_discount_amount: Money,
    pub amount_due: Money,
}

impl Receipt {
    pub fn new(customer: impl Into<String>, items: Vec<LineItem>, breakdown: DiscountBreakdown) -> Self {
        let gross: Money = items.iter().map(LineItem::subtotal).sum();
        let total_discount_amount = gross.percentage_of(breakdown.total_discount);

        Receipt {
            customer: customer.into(),
            breakdown,
            gross,
            age_discount_amount: gross.percentage_of(breakdown.age_discount),
            birthday_discount_amount: gross.percentage_of(breakdown.birthday_discount),
            total_discount_amount,
            amount_due: gross - total_discount_amount,
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountCalculator;
    use chrono::NaiveDate;

    fn breakdown(birth: (i32, u32, u32), today: (i32, u32, u32)) -> DiscountBreakdown {
        DiscountCalculator::new(
            NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2).unwrap(),
            NaiveDate::from_ymd_opt(today.0, today.1, today.2).unwrap(),
        )
        .breakdown()
    }

    fn basket() -> Vec<LineItem> {
        vec![
            LineItem::new("Bread", Money::from_cents(120), 2),
            LineItem::new("Cheese", Money::from_cents(450), 1),
            LineItem::new("Wine", Money::from_cents(899), 3),
        ]
    }

    #[test]
    fn test_gross_is_sum_of_subtotals() {
        let receipt = Receipt::new("Ana", basket(), breakdown((1990, 3, 10), (2024, 6, 1)));
        // 2.40 + 4.50 + 26.97
        assert_eq!(receipt.gross.cents(), 3387);
        assert!(receipt.total_discount_amount.is_zero());
        assert_eq!(receipt.amount_due, receipt.gross);
    }

    #[test]
    fn test_birthday_week_discount_amounts() {
        let receipt = Receipt::new("Ana", basket(), breakdown((1990, 3, 10), (2024, 3, 3)));
        // 20% of 33.87 = 6.774 → 6.77
        assert!(receipt.age_discount_amount.is_zero());
        assert_eq!(receipt.birthday_discount_amount.cents(), 677);
        assert_eq!(receipt.total_discount_amount.cents(), 677);
        assert_eq!(receipt.amount_due.cents(), 3387 - 677);
    }

    #[test]
    fn test_capped_total_is_less_than_component_sum() {
        let items = vec![LineItem::new("Gift", Money::from_cents(10000), 1)];
        // 15% senior + 20% birthday week, capped at 30%
        let receipt = Receipt::new("Luis", items, breakdown((1950, 6, 20), (2024, 6, 15)));

        assert_eq!(receipt.age_discount_amount.cents(), 1500);
        assert_eq!(receipt.birthday_discount_amount.cents(), 2000);
        assert_eq!(receipt.total_discount_amount.cents(), 3000);
        assert_eq!(receipt.amount_due.cents(), 7000);
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::new("Ana", Vec::new(), breakdown((2010, 3, 10), (2024, 3, 3)));
        assert!(receipt.is_empty());
        assert!(receipt.gross.is_zero());
        assert!(receipt.amount_due.is_zero());
    }

    #[test]
    fn test_receipt_serializes_to_json() {
        let receipt = Receipt::new("Ana", basket(), breakdown((2010, 3, 10), (2024, 3, 3)));
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["customer"], "Ana");
        assert_eq!(json["breakdown"]["age_years"], 13);
        assert_eq!(json["breakdown"]["total_discount"], 3000);
        assert_eq!(json["items"][2]["name"], "Wine");
        assert_eq!(json["amount_due"], 3387 - 1016);
    }
}
