//! Error types for pipeline passes

use specforge_extractor::ExtractorError;
use thiserror::Error;

/// Errors that can occur while running pipeline passes
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Store read or write error
    #[error("Store error: {0}")]
    Store(String),

    /// Extraction error surfaced from the Field Extractor
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractorError),

    /// Batch commit failure; fatal for the run
    #[error("Commit failed: {0}")]
    Commit(String),
}
