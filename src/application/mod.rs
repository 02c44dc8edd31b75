// Application layer - the ledger and its reports

pub mod error;
pub mod ledger;
pub mod reporting;

pub use error::*;
pub use ledger::*;
pub use reporting::*;
