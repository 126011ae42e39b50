//! Preview command implementation.

use crate::cli::PreviewArgs;
use crate::error::Result;
use crate::output::Formatter;
use specforge_store::SqliteStore;

/// Sample names shown per category in the distribution view.
const SAMPLES_PER_CATEGORY: usize = 5;

/// Execute the preview command.
pub async fn execute_preview(
    args: PreviewArgs,
    store: &SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    if args.categories {
        let distribution = store.category_distribution()?;
        let mut rows = Vec::with_capacity(distribution.len());
        for (category, count) in distribution {
            let samples = store.sample_names(&category, SAMPLES_PER_CATEGORY)?;
            rows.push((category, count, samples));
        }
        println!("{}", formatter.categories(&rows)?);
        return Ok(());
    }

    let rows = store.preview(args.limit)?;
    println!("{}", formatter.preview(&rows)?);
    Ok(())
}
