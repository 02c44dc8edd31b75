use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::application::{Ledger, LedgerError, LoadOutcome};
use crate::domain::{DEFAULT_CATEGORY, format_cents, parse_cents};

use super::output::{NO_EXPENSES, write_category_summary, write_expense_table, write_total};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Show,
    Total,
    Summary,
    Save,
    Exit,
}

impl MenuChoice {
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Show),
            "3" => Some(MenuChoice::Total),
            "4" => Some(MenuChoice::Summary),
            "5" => Some(MenuChoice::Save),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive expense menu over any line-based input and output.
pub struct Menu<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W) -> Self {
        Self {
            ledger,
            input,
            output,
        }
    }

    /// Load the backing file, then loop until the user exits or input ends.
    /// A file that exists but cannot be read aborts before the loop starts.
    pub fn run(&mut self) -> Result<()> {
        let path = self.ledger.store().path().display().to_string();
        let outcome = self
            .ledger
            .load()
            .with_context(|| format!("Failed to load expenses from {}", path))?;
        match outcome {
            LoadOutcome::Loaded(count) => {
                writeln!(self.output, "Loaded {} expenses from {}", count, path)?
            }
            LoadOutcome::NotFound => writeln!(self.output, "No saved data found, starting fresh.")?,
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return self.exit();
            };

            match MenuChoice::from_input(&line) {
                Some(MenuChoice::Add) => self.add()?,
                Some(MenuChoice::Show) => self.show()?,
                Some(MenuChoice::Total) => {
                    writeln!(self.output)?;
                    write_total(&mut self.output, self.ledger.total())?;
                }
                Some(MenuChoice::Summary) => self.summary()?,
                Some(MenuChoice::Save) => self.save()?,
                Some(MenuChoice::Exit) => return self.exit(),
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Expense Tracker Menu ---")?;
        writeln!(self.output, "1. Add Expense")?;
        writeln!(self.output, "2. Show Expenses")?;
        writeln!(self.output, "3. Total Expense")?;
        writeln!(self.output, "4. Category Summary")?;
        writeln!(self.output, "5. Save to CSV")?;
        writeln!(self.output, "6. Exit")?;
        Ok(())
    }

    /// Print a prompt and read one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(());
        };
        let Some(price_str) = self.prompt("Price: ")? else {
            return Ok(());
        };
        let unit_price = match parse_cents(&price_str) {
            Ok(p) => p,
            Err(e) => {
                writeln!(self.output, "Invalid price: {}", e)?;
                return Ok(());
            }
        };
        let Some(quantity_str) = self.prompt("Quantity: ")? else {
            return Ok(());
        };
        let quantity: i64 = match quantity_str.trim().parse() {
            Ok(q) => q,
            Err(_) => {
                writeln!(self.output, "Invalid quantity: '{}'", quantity_str)?;
                return Ok(());
            }
        };
        let category = self
            .prompt(&format!("Category (default '{}'): ", DEFAULT_CATEGORY))?
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        let added = self
            .ledger
            .add_expense(name.clone(), unit_price, quantity, category.clone())
            .map(|_| ());
        match added {
            Ok(()) => {
                writeln!(
                    self.output,
                    "\nAdded: {}, {} x {} in category '{}'.",
                    name,
                    quantity,
                    format_cents(unit_price),
                    category
                )?;
                self.report_saved()?;
            }
            Err(e @ LedgerError::Overflow(_)) => writeln!(self.output, "Not added: {}", e)?,
            Err(e) => writeln!(self.output, "Added '{}' but failed to save: {}", name, e)?,
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        writeln!(self.output)?;
        match self.ledger.list_expenses() {
            Some(expenses) => write_expense_table(&mut self.output, expenses)?,
            None => writeln!(self.output, "{}", NO_EXPENSES)?,
        }
        Ok(())
    }

    fn summary(&mut self) -> Result<()> {
        writeln!(self.output)?;
        if self.ledger.is_empty() {
            writeln!(self.output, "{}", NO_EXPENSES)?;
        } else {
            write_category_summary(&mut self.output, &self.ledger.summary_by_category())?;
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        match self.ledger.save() {
            Ok(_) => self.report_saved()?,
            Err(e) => writeln!(self.output, "Failed to save: {}", e)?,
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        let path = self.ledger.store().path().display().to_string();
        self.ledger
            .save()
            .with_context(|| format!("Failed to save expenses to {}", path))?;
        self.report_saved()?;
        writeln!(self.output, "Exiting... Goodbye!")?;
        Ok(())
    }

    fn report_saved(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Expenses saved to {}",
            self.ledger.store().path().display()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::from_input(" 4 "), Some(MenuChoice::Summary));
        assert_eq!(MenuChoice::from_input("6\n"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("7"), None);
        assert_eq!(MenuChoice::from_input("add"), None);
        assert_eq!(MenuChoice::from_input(""), None);
    }
}
