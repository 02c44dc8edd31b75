use serde::Serialize;

use crate::domain::{Cents, Expense};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub category: String,
    pub total: Cents,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub categories: Vec<CategoryShare>,
    pub total: Cents,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Cents,
    pub count: usize,
    pub percentage: f64,
}

/// Running grand total and per-category totals, kept in the order in which
/// each category first shows up. Categories compare by exact text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Totals {
    total: Cents,
    categories: Vec<CategorySummary>,
}

impl Totals {
    /// Totals for a whole slice, or `None` if any sum does not fit in `Cents`.
    pub fn from_expenses(expenses: &[Expense]) -> Option<Self> {
        let mut totals = Self::default();
        for expense in expenses {
            totals.add(expense)?;
        }
        Some(totals)
    }

    /// Fold one expense in. On overflow returns `None` and leaves `self` unchanged.
    pub fn add(&mut self, expense: &Expense) -> Option<()> {
        let line = expense.checked_total_price()?;
        let total = self.total.checked_add(line)?;

        match self
            .categories
            .iter_mut()
            .find(|s| s.category == expense.category())
        {
            Some(summary) => {
                summary.total = summary.total.checked_add(line)?;
                summary.count += 1;
            }
            None => self.categories.push(CategorySummary {
                category: expense.category().to_string(),
                total: line,
                count: 1,
            }),
        }

        self.total = total;
        Some(())
    }

    pub fn total(&self) -> Cents {
        self.total
    }

    pub fn categories(&self) -> &[CategorySummary] {
        &self.categories
    }
}

impl CategoryReport {
    pub fn from_totals(totals: &Totals) -> Self {
        let total = totals.total();
        let categories = totals
            .categories()
            .iter()
            .map(|s| {
                let percentage = if total != 0 {
                    (s.total as f64 / total as f64) * 100.0
                } else {
                    0.0
                };
                CategoryShare {
                    category: s.category.clone(),
                    total: s.total,
                    count: s.count,
                    percentage,
                }
            })
            .collect();

        Self { categories, total }
    }
}
