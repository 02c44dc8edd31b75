pub mod application;
pub mod cli;
pub mod domain;
pub mod storage;

pub use application::{Ledger, LedgerError, LoadOutcome};
pub use domain::*;
pub use storage::CsvStore;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install the global tracing subscriber. Logs go to stderr; `RUST_LOG` overrides the level.
pub fn init_tracing(verbose: bool) {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let default_level = if verbose { "spendlog=debug" } else { "spendlog=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
