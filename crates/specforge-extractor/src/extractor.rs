//! Core Field Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_response;
use crate::prompt::{self, SYSTEM_PROMPT};
use crate::registry::SchemaRegistry;
use crate::repair::repair;
use specforge_domain::traits::LlmProvider;
use specforge_domain::{Category, StructuredValue};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Structures one raw specification value at a time via an LLM call.
///
/// Exactly one call per record. Failures are typed: the caller can tell
/// "nothing to do" (`Ok(None)`) apart from "the operation failed"
/// (`Err(_)`) and decide whether to continue the batch.
pub struct FieldExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    registry: SchemaRegistry,
    config: ExtractorConfig,
}

impl<L> FieldExtractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Field Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            registry: SchemaRegistry::new(),
            config,
        }
    }

    /// Structure a single specification record.
    ///
    /// Returns `Ok(None)` when the record is not worth a call: the raw
    /// value is shorter than the configured minimum, or no template
    /// resolves for the category. Returns an error when the provider
    /// fails, the call times out, or the response does not decode into
    /// the category's record shape. There is no retry at this level.
    pub async fn structure_specification(
        &self,
        specification_name: &str,
        raw_value: &str,
        category: &Category,
    ) -> Result<Option<StructuredValue>, ExtractorError> {
        // Skip obviously bad data
        if raw_value.trim().len() < self.config.min_value_length {
            debug!(
                name = specification_name,
                "raw value too short, skipping"
            );
            return Ok(None);
        }

        let Some(template) = self.registry.lookup(category, specification_name) else {
            warn!(
                category = %category,
                name = specification_name,
                "no suitable template for record"
            );
            return Ok(None);
        };

        info!(
            name = specification_name,
            category = %category,
            "structuring specification"
        );

        let user_prompt = prompt::render(template.instructions, specification_name, raw_value);

        let response = timeout(
            self.config.extraction_timeout(),
            self.call_llm(user_prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        debug!("LLM response length: {} chars", response.len());

        let value = parse_response(&template.category, &response)?;

        Ok(Some(repair(value, specification_name, raw_value)))
    }

    /// Call the LLM provider
    async fn call_llm(&self, user_prompt: String) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);

        // Call in a blocking context since LlmProvider is not async
        tokio::task::spawn_blocking(move || {
            llm.generate(SYSTEM_PROMPT, &user_prompt)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}
