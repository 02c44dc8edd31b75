// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use spendlog::{CsvStore, Expense, FixedClock, Ledger};
use tempfile::TempDir;

/// Helper to create a ledger backed by a file in a temporary directory
pub fn test_ledger() -> (Ledger, TempDir) {
    test_ledger_at(parse_datetime("2024-01-15 09:30:45"))
}

/// Same as `test_ledger` but with a specific clock
pub fn test_ledger_at(now: NaiveDateTime) -> (Ledger, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvStore::new(expense_file(&temp_dir));
    (Ledger::with_clock(store, FixedClock(now)), temp_dir)
}

pub fn expense_file(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("expenses.csv")
}

/// Helper to parse "YYYY-MM-DD HH:MM:SS" into a NaiveDateTime
pub fn parse_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

pub fn midnight(date: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Drop seconds and sub-seconds, matching what the file keeps
pub fn truncated_to_minute(expense: &Expense) -> Expense {
    let ts = expense
        .timestamp()
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap();
    expense.clone().with_timestamp(ts)
}
