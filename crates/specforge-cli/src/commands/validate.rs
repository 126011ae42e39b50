//! Validate command implementation.

use crate::error::Result;
use crate::output::Formatter;
use specforge_pipeline::validate;
use specforge_store::SqliteStore;

/// Execute the validate command.
pub async fn execute_validate(store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let report = validate(store)?;
    println!("{}", formatter.quality(&report)?);
    Ok(())
}
