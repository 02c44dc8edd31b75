use std::path::Path;

use tracing::{debug, info};

use crate::domain::{Cents, Clock, Expense, SystemClock};
use crate::storage::CsvStore;

use super::{CategoryReport, CategorySummary, LedgerError, Totals};

/// What happened when reading the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; holds the number of expenses loaded.
    Loaded(usize),
    /// No file yet. The ledger starts empty.
    NotFound,
}

/// In-memory expense log with write-through persistence.
/// This is the primary interface for the CLI and the interactive menu.
pub struct Ledger {
    expenses: Vec<Expense>,
    /// Always matches `expenses`; every sum in it fits in `Cents`.
    totals: Totals,
    store: CsvStore,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create an empty ledger backed by the given store, using local time.
    pub fn new(store: CsvStore) -> Self {
        Self::with_clock(store, SystemClock)
    }

    pub fn with_clock(store: CsvStore, clock: impl Clock + 'static) -> Self {
        Self {
            expenses: Vec::new(),
            totals: Totals::default(),
            store,
            clock: Box::new(clock),
        }
    }

    pub fn store(&self) -> &CsvStore {
        &self.store
    }

    // ========================
    // Mutation
    // ========================

    /// Log a new expense stamped with the current time, then rewrite the backing file.
    ///
    /// An expense whose line total, or whose effect on any total, does not fit in
    /// `Cents` is refused with [`LedgerError::Overflow`] and nothing changes.
    /// If the write fails the expense stays in memory and the error is returned.
    pub fn add_expense(
        &mut self,
        name: impl Into<String>,
        unit_price: Cents,
        quantity: i64,
        category: impl Into<String>,
    ) -> Result<&Expense, LedgerError> {
        let expense =
            Expense::new(name, unit_price, quantity, self.clock.now()).with_category(category);
        self.totals
            .add(&expense)
            .ok_or_else(|| LedgerError::Overflow(expense.name().to_string()))?;
        debug!(
            item = expense.name(),
            total = expense.total_price(),
            "adding expense"
        );
        self.expenses.push(expense);

        self.save()?;

        let index = self.expenses.len() - 1;
        Ok(&self.expenses[index])
    }

    // ========================
    // Queries
    // ========================

    /// All expenses in insertion order, or `None` when there are none.
    pub fn list_expenses(&self) -> Option<&[Expense]> {
        if self.expenses.is_empty() {
            None
        } else {
            Some(&self.expenses)
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Sum of all line totals. Zero for an empty ledger.
    pub fn total(&self) -> Cents {
        self.totals.total()
    }

    /// Per-category totals in order of first appearance.
    pub fn summary_by_category(&self) -> Vec<CategorySummary> {
        self.totals.categories().to_vec()
    }

    pub fn category_report(&self) -> CategoryReport {
        CategoryReport::from_totals(&self.totals)
    }

    // ========================
    // Persistence
    // ========================

    /// Overwrite `path` with every expense. Returns the number of rows written.
    pub fn persist_to(&self, path: impl AsRef<Path>) -> Result<usize, LedgerError> {
        let path = path.as_ref();
        let count = CsvStore::new(path).save(&self.expenses)?;
        info!(count, path = %path.display(), "saved expenses");
        Ok(count)
    }

    /// Overwrite the backing file.
    pub fn save(&self) -> Result<usize, LedgerError> {
        self.persist_to(self.store.path())
    }

    /// Replace the in-memory expenses with the contents of `path`.
    ///
    /// A missing file empties the ledger and reports [`LoadOutcome::NotFound`].
    /// Any malformed row, or amounts whose totals do not fit in `Cents`, fail the
    /// whole load and leave the ledger untouched.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome, LedgerError> {
        let path = path.as_ref();
        match CsvStore::new(path).load()? {
            Some(expenses) => {
                let totals = checked_totals(&expenses)?;
                let count = expenses.len();
                self.expenses = expenses;
                self.totals = totals;
                info!(count, path = %path.display(), "loaded expenses");
                Ok(LoadOutcome::Loaded(count))
            }
            None => {
                self.expenses.clear();
                self.totals = Totals::default();
                info!(path = %path.display(), "no saved expenses found, starting empty");
                Ok(LoadOutcome::NotFound)
            }
        }
    }

    /// Load from the backing file.
    pub fn load(&mut self) -> Result<LoadOutcome, LedgerError> {
        let path = self.store.path().to_path_buf();
        self.load_from(path)
    }
}

fn checked_totals(expenses: &[Expense]) -> Result<Totals, LedgerError> {
    let mut totals = Totals::default();
    for expense in expenses {
        totals
            .add(expense)
            .ok_or_else(|| LedgerError::Overflow(expense.name().to_string()))?;
    }
    Ok(totals)
}
