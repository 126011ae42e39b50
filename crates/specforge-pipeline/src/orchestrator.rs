//! Batch structuring orchestrator
//!
//! Drives the Field Extractor over every unstructured specification in the
//! store. Eligible ids are snapshotted once, processed in fixed-size
//! batches, and each batch's updates are committed as one transaction at
//! batch end. Nothing is written mid-batch, so an aborted batch reverts
//! completely and a rerun picks its records up again.

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::types::RunMetrics;
use specforge_domain::traits::{LlmProvider, SpecStore};
use specforge_domain::{SpecId, StructuredValue};
use specforge_extractor::FieldExtractor;
use std::fmt::Display;
use tracing::{error, info, warn};

/// Outcome of processing one batch before commit.
struct BatchOutcome {
    updates: Vec<(SpecId, StructuredValue)>,
    skipped: usize,
    failed_records: usize,
}

/// Runs the structuring pipeline over a store in batches.
pub struct BatchOrchestrator<L>
where
    L: LlmProvider,
{
    extractor: FieldExtractor<L>,
    config: PipelineConfig,
}

impl<L> BatchOrchestrator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    /// Create an orchestrator around an extractor.
    pub fn new(extractor: FieldExtractor<L>, config: PipelineConfig) -> Self {
        Self { extractor, config }
    }

    /// Structure every eligible specification in the store.
    ///
    /// Per-record extraction failures leave the record unstructured and
    /// the batch continues. A store error aborts the current batch
    /// uncommitted and the next batch runs. A commit failure is fatal for
    /// the run. Reruns are safe: eligibility filters on the null
    /// structured value, so finished records are never revisited.
    pub async fn run<S>(&self, store: &mut S) -> Result<RunMetrics, PipelineError>
    where
        S: SpecStore,
        S::Error: Display,
    {
        let ids = store
            .unstructured_ids()
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        let mut metrics = RunMetrics {
            eligible: ids.len(),
            ..Default::default()
        };

        info!("Found {} unstructured specifications", ids.len());
        if ids.is_empty() {
            return Ok(metrics);
        }

        let total_batches = ids.len().div_ceil(self.config.batch_size);

        for (batch_index, batch_ids) in ids.chunks(self.config.batch_size).enumerate() {
            match self.process_batch(store, batch_ids).await {
                Ok(outcome) => {
                    if !outcome.updates.is_empty() {
                        if let Err(e) = store.commit_structured(&outcome.updates) {
                            error!("Failed to commit batch {}: {}", batch_index + 1, e);
                            return Err(PipelineError::Commit(e.to_string()));
                        }
                    }
                    metrics.structured += outcome.updates.len();
                    metrics.skipped += outcome.skipped;
                    metrics.failed_records += outcome.failed_records;
                    info!("Batch {}/{} committed", batch_index + 1, total_batches);
                }
                Err(e) => {
                    metrics.failed_batches += 1;
                    error!(
                        "Error processing batch starting with id {}; batch rolled back: {}",
                        batch_ids[0], e
                    );
                }
            }
        }

        info!(
            "Structured a total of {} specifications ({} skipped, {} failed)",
            metrics.structured, metrics.skipped, metrics.failed_records
        );
        Ok(metrics)
    }

    /// Extract one batch. Updates are staged in memory; the caller commits.
    async fn process_batch<S>(
        &self,
        store: &S,
        batch_ids: &[SpecId],
    ) -> Result<BatchOutcome, PipelineError>
    where
        S: SpecStore,
        S::Error: Display,
    {
        let rows = store
            .fetch_by_ids(batch_ids)
            .map_err(|e| PipelineError::Store(e.to_string()))?;

        let mut outcome = BatchOutcome {
            updates: Vec::new(),
            skipped: 0,
            failed_records: 0,
        };

        for row in rows {
            let trimmed = row.specification_value.trim();
            // Degenerate values: too short, or a bracket-wrapped placeholder.
            if trimmed.len() < self.config.min_value_length
                || (trimmed.starts_with('[') && trimmed.ends_with(']'))
            {
                outcome.skipped += 1;
                continue;
            }

            match self
                .extractor
                .structure_specification(
                    &row.specification_name,
                    &row.specification_value,
                    &row.category,
                )
                .await
            {
                Ok(Some(value)) => {
                    info!(
                        "Structured: {} -> {} (id {})",
                        row.category, row.specification_name, row.id
                    );
                    outcome.updates.push((row.id, value));
                }
                Ok(None) => {
                    outcome.skipped += 1;
                }
                Err(e) => {
                    warn!(
                        "Extraction failed for '{}' (id {}): {}",
                        row.specification_name, row.id, e
                    );
                    outcome.failed_records += 1;
                }
            }
        }

        Ok(outcome)
    }
}
