//! Fix-processors command implementation.

use crate::error::Result;
use crate::output::Formatter;
use specforge_pipeline::fix_processor_frequencies;
use specforge_store::SqliteStore;

/// Execute the fix-processors command.
pub async fn execute_fix_processors(store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    let updated = fix_processor_frequencies(store)?;
    println!(
        "{}",
        formatter.success(&format!("Updated {} processor frequency records", updated))
    );
    Ok(())
}
