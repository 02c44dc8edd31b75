use chrono::NaiveDateTime;

use super::{Cents, line_total};

/// Category used when none is given.
pub const DEFAULT_CATEGORY: &str = "General";

/// Minute-resolution timestamp format used on disk and in listings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single logged purchase.
/// Expenses are immutable once built; the line total is always derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    name: String,
    /// Price of one unit, in cents
    unit_price: Cents,
    quantity: i64,
    category: String,
    /// Local wall-clock time of the purchase
    timestamp: NaiveDateTime,
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        unit_price: Cents,
        quantity: i64,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            category: DEFAULT_CATEGORY.to_string(),
            timestamp,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Cents {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// unit price * quantity, or `None` if the product does not fit in `Cents`.
    pub fn checked_total_price(&self) -> Option<Cents> {
        line_total(self.unit_price, self.quantity)
    }

    /// unit price * quantity
    ///
    /// Panics if the product does not fit in `Cents`. A `Ledger` only admits
    /// expenses whose totals fit.
    pub fn total_price(&self) -> Cents {
        match self.checked_total_price() {
            Some(total) => total,
            None => panic!("line total of '{}' is out of range", self.name),
        }
    }

    pub fn timestamp_label(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn test_create_expense_defaults_category() {
        let expense = Expense::new("Coffee", 350, 2, at(8, 5, 0));

        assert_eq!(expense.name(), "Coffee");
        assert_eq!(expense.category(), DEFAULT_CATEGORY);
        assert_eq!(expense.total_price(), 700);
    }

    #[test]
    fn test_with_category() {
        let expense = Expense::new("Bus", 200, 1, at(9, 0, 0)).with_category("Transport");
        assert_eq!(expense.category(), "Transport");
        assert_eq!(expense.total_price(), 200);
    }

    #[test]
    fn test_zero_and_negative_are_accepted() {
        assert_eq!(Expense::new("Free", 0, 3, at(0, 0, 0)).total_price(), 0);
        assert_eq!(Expense::new("Refund", 500, -1, at(0, 0, 0)).total_price(), -500);
    }

    #[test]
    fn test_checked_total_price_out_of_range() {
        let expense = Expense::new("Huge", 100, i64::MAX, at(0, 0, 0));
        assert_eq!(expense.checked_total_price(), None);
        assert_eq!(Expense::new("Pen", 150, 4, at(0, 0, 0)).checked_total_price(), Some(600));
    }

    #[test]
    fn test_with_timestamp() {
        let expense = Expense::new("Tea", 120, 1, at(7, 4, 59)).with_timestamp(at(7, 4, 0));
        assert_eq!(expense.timestamp(), at(7, 4, 0));
    }

    #[test]
    fn test_timestamp_label_drops_seconds() {
        let expense = Expense::new("Tea", 120, 1, at(7, 4, 59));
        assert_eq!(expense.timestamp_label(), "2024-03-09 07:04");
    }
}
