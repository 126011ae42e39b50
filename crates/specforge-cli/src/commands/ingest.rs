//! Ingest command implementation.

use crate::cli::IngestArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use specforge_domain::traits::SpecStore;
use specforge_domain::NewSpecification;
use specforge_segmenter::{normalize_document_text, profile_for};
use specforge_store::SqliteStore;
use std::fs;

/// Execute the ingest command.
///
/// Segments a datasheet text file with the named profile and replaces the
/// laptop's stored specifications with the result.
pub async fn execute_ingest(
    args: IngestArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let profile = profile_for(&args.profile).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown profile '{}'. Known profiles: thinkpad, probook",
            args.profile
        ))
    })?;

    let text = fs::read_to_string(&args.file)?;
    let normalized = normalize_document_text(&text);
    let raw = profile.extract(&normalized);

    if raw.is_empty() {
        println!(
            "{}",
            formatter.warning(&format!(
                "No specifications found in {} with the {} profile",
                args.file.display(),
                profile.name()
            ))
        );
        return Ok(());
    }

    let laptop_id = match store.find_laptop(&args.brand, &args.model, args.variant.as_deref())? {
        Some(laptop) => laptop.id,
        None => store.insert_laptop(&args.brand, &args.model, args.variant.as_deref())?,
    };

    let specs: Vec<NewSpecification> = raw.into_iter().map(Into::into).collect();
    let inserted = store.replace_specifications(laptop_id, specs)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Ingested {} specifications for {} {}",
            inserted, args.brand, args.model
        ))
    );
    Ok(())
}
