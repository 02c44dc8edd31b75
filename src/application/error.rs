use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Malformed expense file at line {line}: invalid {field} '{value}'")]
    Format {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Amount out of range for expense '{0}'")]
    Overflow(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(csv::Error),
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return LedgerError::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => LedgerError::Io(io_err),
            // is_io_error() guarantees the Io kind
            _ => unreachable!(),
        }
    }
}

impl LedgerError {
    pub(crate) fn format(line: usize, field: &'static str, value: impl Into<String>) -> Self {
        LedgerError::Format {
            line,
            field,
            value: value.into(),
        }
    }

    /// Returns true if this is a parse failure in the stored data.
    pub fn is_format(&self) -> bool {
        matches!(self, LedgerError::Format { .. })
    }
}
