//! Shared utilities for CLI commands

use miette::{IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::store::Store;

/// Resolve the connection settings and open the store handle.
///
/// Commands call this after their client-side checks, so bad input never
/// costs a connection attempt.
pub fn open_store(global: &GlobalOpts) -> Result<Store> {
    let config = global.store_config().into_diagnostic()?;
    Store::connect(&config).into_diagnostic()
}
