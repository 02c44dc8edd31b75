mod menu;
mod output;

pub use menu::{Menu, MenuChoice};
pub use output::*;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::application::Ledger;
use crate::domain::{DEFAULT_CATEGORY, format_cents, parse_cents};
use crate::storage::{CsvStore, DEFAULT_FILE};

/// Spendlog - Personal Expense Log
#[derive(Parser)]
#[command(name = "spendlog")]
#[command(about = "Log purchases to a CSV file and see where the money goes")]
#[command(version)]
pub struct Cli {
    /// Expense file path
    #[arg(short, long, env = "SPENDLOG_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run (omit for the interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a purchase
    Add {
        /// Item name
        name: String,

        /// Unit price (e.g., "3.50" or "3")
        #[arg(allow_negative_numbers = true)]
        price: String,

        /// Number of units
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Category for the summary
        #[arg(short, long, default_value = DEFAULT_CATEGORY)]
        category: String,
    },

    /// List all expenses
    List,

    /// Show the total of all expenses
    Total,

    /// Show totals per category
    Summary {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        crate::init_tracing(self.verbose);

        let mut ledger = Ledger::new(CsvStore::new(&self.file));

        let Some(command) = self.command else {
            let stdin = io::stdin();
            return Menu::new(&mut ledger, stdin.lock(), io::stdout()).run();
        };

        ledger
            .load()
            .with_context(|| format!("Failed to load expenses from {}", self.file.display()))?;

        let mut out = io::stdout().lock();
        match command {
            Commands::Add {
                name,
                price,
                quantity,
                category,
            } => {
                let unit_price =
                    parse_cents(&price).context("Invalid price format. Use '3.50' or '3'")?;
                let expense = ledger
                    .add_expense(name, unit_price, quantity, category)
                    .context("Failed to add expense")?;

                writeln!(
                    out,
                    "Added: {}, {} x {} in category '{}' (total {})",
                    expense.name(),
                    expense.quantity(),
                    format_cents(expense.unit_price()),
                    expense.category(),
                    format_cents(expense.total_price())
                )?;
            }

            Commands::List => match ledger.list_expenses() {
                Some(expenses) => write_expense_table(&mut out, expenses)?,
                None => writeln!(out, "{}", NO_EXPENSES)?,
            },

            Commands::Total => write_total(&mut out, ledger.total())?,

            Commands::Summary { format } => {
                let report = ledger.category_report();
                match format.as_str() {
                    "json" => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
                    "table" if report.categories.is_empty() => writeln!(out, "{}", NO_EXPENSES)?,
                    "table" => write_category_report(&mut out, &report)?,
                    other => bail!("Unknown format '{}'. Use table or json", other),
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_means_menu() {
        let cli = Cli::try_parse_from(["spendlog", "--file", "mine.csv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from("mine.csv"));
    }

    #[test]
    fn test_parse_add() {
        let cli =
            Cli::try_parse_from(["spendlog", "add", "Coffee", "3.50", "2", "-c", "Food"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                price,
                quantity,
                category,
            }) => {
                assert_eq!(name, "Coffee");
                assert_eq!(price, "3.50");
                assert_eq!(quantity, 2);
                assert_eq!(category, "Food");
            }
            _ => panic!("expected add command"),
        }
    }

    #[test]
    fn test_add_category_defaults() {
        let cli = Cli::try_parse_from(["spendlog", "add", "Bus", "2", "1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Add { ref category, .. }) if category == DEFAULT_CATEGORY
        ));
    }
}
