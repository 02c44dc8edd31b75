use std::io::{self, Write};

use crate::application::{CategoryReport, CategorySummary};
use crate::domain::{Cents, Expense, format_cents};

pub const NO_EXPENSES: &str = "No expenses yet.";

pub fn write_expense_table<W: Write>(out: &mut W, expenses: &[Expense]) -> io::Result<()> {
    writeln!(
        out,
        "{:<15} {:<10} {:<10} {:<10} {:<15} {:<20}",
        "Name", "Price", "Quantity", "Total", "Category", "Date"
    )?;
    writeln!(out, "{}", "-".repeat(85))?;
    for expense in expenses {
        writeln!(
            out,
            "{:<15} {:<10} {:<10} {:<10} {:<15} {:<20}",
            truncate(expense.name(), 15),
            format_cents(expense.unit_price()),
            expense.quantity(),
            format_cents(expense.total_price()),
            truncate(expense.category(), 15),
            expense.timestamp_label()
        )?;
    }
    Ok(())
}

pub fn write_total<W: Write>(out: &mut W, total: Cents) -> io::Result<()> {
    writeln!(out, "Total Expense: {}", format_cents(total))
}

pub fn write_category_summary<W: Write>(
    out: &mut W,
    summaries: &[CategorySummary],
) -> io::Result<()> {
    writeln!(out, "Category-wise Summary:")?;
    for summary in summaries {
        writeln!(out, "{}: {}", summary.category, format_cents(summary.total))?;
    }
    Ok(())
}

/// Wider table used by the `summary` subcommand.
pub fn write_category_report<W: Write>(out: &mut W, report: &CategoryReport) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} {:>12} {:>6} {:>7}",
        "CATEGORY", "TOTAL", "COUNT", "SHARE"
    )?;
    writeln!(out, "{}", "-".repeat(48))?;
    for cat in &report.categories {
        writeln!(
            out,
            "{:<20} {:>12} {:>6} {:>6.1}%",
            truncate(&cat.category, 20),
            format_cents(cat.total),
            cat.count,
            cat.percentage
        )?;
    }
    writeln!(out, "{}", "-".repeat(48))?;
    writeln!(out, "{:<20} {:>12}", "TOTAL", format_cents(report.total))
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
