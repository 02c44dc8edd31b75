use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::application::LedgerError;
use crate::domain::{Expense, TIMESTAMP_FORMAT, format_cents, parse_cents};

/// Column labels, in the order they are written.
pub const HEADER: [&str; 5] = ["Name", "Price", "Quantity", "Category", "Date"];

/// Write the header plus one row per expense. Returns the number of rows written.
pub fn write_expenses<W: Write>(writer: W, expenses: &[Expense]) -> Result<usize, LedgerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for expense in expenses {
        csv_writer.write_record([
            expense.name(),
            format_cents(expense.unit_price()).as_str(),
            expense.quantity().to_string().as_str(),
            expense.category(),
            expense.timestamp_label().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(expenses.len())
}

/// Parse every row. The first bad field aborts the whole read.
pub fn read_expenses<R: Read>(reader: R) -> Result<Vec<Expense>, LedgerError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    // A zero-byte file holds no expenses
    if headers.is_empty() {
        return Ok(Vec::new());
    }

    let name_col = column(&headers, "Name")?;
    let price_col = column(&headers, "Price")?;
    let quantity_col = column(&headers, "Quantity")?;
    let category_col = column(&headers, "Category")?;
    let date_col = column(&headers, "Date")?;

    let mut expenses = Vec::new();
    for (row_num, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_num + 2);

        let field = |col: usize| record.get(col).unwrap_or("");

        let price_str = field(price_col);
        let unit_price =
            parse_cents(price_str).map_err(|_| LedgerError::format(line, "price", price_str))?;

        let quantity_str = field(quantity_col);
        let quantity: i64 = quantity_str
            .trim()
            .parse()
            .map_err(|_| LedgerError::format(line, "quantity", quantity_str))?;

        let date_str = field(date_col);
        let timestamp = NaiveDateTime::parse_from_str(date_str.trim(), TIMESTAMP_FORMAT)
            .map_err(|_| LedgerError::format(line, "date", date_str))?;

        expenses.push(
            Expense::new(field(name_col), unit_price, quantity, timestamp)
                .with_category(field(category_col)),
        );
    }

    Ok(expenses)
}

fn column(headers: &StringRecord, name: &'static str) -> Result<usize, LedgerError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| LedgerError::format(1, "header", name))
}

/// File-backed expense store. Each call opens and closes the file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all expenses. Returns `None` if the file does not exist.
    pub fn load(&self) -> Result<Option<Vec<Expense>>, LedgerError> {
        match File::open(&self.path) {
            Ok(file) => read_expenses(file).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the file's contents with the given expenses.
    pub fn save(&self, expenses: &[Expense]) -> Result<usize, LedgerError> {
        let file = File::create(&self.path)?;
        write_expenses(file, expenses)
    }
}
