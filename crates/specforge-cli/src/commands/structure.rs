//! Structure command implementation.

use crate::cli::StructureArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use specforge_extractor::{ExtractorConfig, FieldExtractor};
use specforge_llm::provider_from_name;
use specforge_pipeline::{BatchOrchestrator, PipelineConfig};
use specforge_store::SqliteStore;
use std::env;

/// Execute the structure command.
///
/// Builds a provider from config (with CLI overrides) and runs the batch
/// orchestrator over every unstructured specification.
pub async fn execute_structure(
    args: StructureArgs,
    config: &Config,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let provider_name = args.provider.as_deref().unwrap_or(&config.provider.name);
    let model = args.model.as_deref().unwrap_or(&config.provider.model);
    let api_key = args
        .api_key
        .clone()
        .or_else(|| env::var(&config.provider.api_key_env).ok());

    let provider = provider_from_name(provider_name, api_key, model)?;

    let mut extractor_config = ExtractorConfig::default();
    if let Some(secs) = args.timeout {
        extractor_config.extraction_timeout_secs = secs;
    }
    extractor_config.validate().map_err(CliError::Config)?;

    let mut pipeline_config = PipelineConfig::default();
    if let Some(size) = args.batch_size {
        pipeline_config.batch_size = size;
    }
    pipeline_config.validate().map_err(CliError::Config)?;

    let extractor = FieldExtractor::new(provider, extractor_config);
    let orchestrator = BatchOrchestrator::new(extractor, pipeline_config);

    let metrics = orchestrator.run(store).await?;

    println!("{}", formatter.run_metrics(&metrics)?);
    Ok(())
}
