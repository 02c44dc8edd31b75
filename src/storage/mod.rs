mod csv_file;

pub use csv_file::*;

/// Backing file used when none is configured.
pub const DEFAULT_FILE: &str = "expenses.csv";
