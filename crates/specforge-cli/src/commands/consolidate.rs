//! Consolidate command implementation.

use crate::error::Result;
use crate::output::Formatter;
use specforge_pipeline::consolidate;
use specforge_store::SqliteStore;

/// Execute the consolidate command.
pub async fn execute_consolidate(store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let report = consolidate(store)?;
    println!("{}", formatter.consolidation(&report)?);
    Ok(())
}
