//! Specforge Pipeline
//!
//! Batch passes that take a store of raw specifications to a clean,
//! structured dataset.
//!
//! # Passes
//!
//! ```text
//! structure   BatchOrchestrator::run   raw rows → structured values
//! consolidate consolidate              battery life tests → option records
//! fix         fix_processor_frequencies frequency rows recomputed from raw
//! validate    validate                 completeness report, no writes
//! ```
//!
//! Every pass receives its store (and the structuring pass its extractor)
//! by injection; nothing here owns a connection or a provider.

#![warn(missing_docs)]

mod config;
mod consolidator;
mod error;
mod orchestrator;
mod types;

pub use config::PipelineConfig;
pub use consolidator::{consolidate, fix_processor_frequencies, validate};
pub use error::PipelineError;
pub use orchestrator::BatchOrchestrator;
pub use types::{ConsolidationReport, QualityIssue, QualityReport, RunMetrics};
