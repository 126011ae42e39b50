//! Specforge LLM Provider Layer
//!
//! Pluggable text-generation providers behind the `LlmProvider` trait from
//! `specforge-domain`. Every extraction issues exactly one call: a fixed
//! system instruction plus a category-specific user instruction.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI chat-completions API in JSON mode
//!
//! # Examples
//!
//! ```
//! use specforge_llm::MockProvider;
//! use specforge_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new(r#"{"capacity_wh": 47}"#);
//! let result = provider.generate("system", "user").unwrap();
//! assert_eq!(result, r#"{"capacity_wh": 47}"#);
//! ```

#![warn(missing_docs)]

pub mod openai;

use specforge_domain::traits::LlmProvider as LlmProviderTrait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors surfaced by extraction providers.
///
/// Every variant is recoverable from the pipeline's point of view: the
/// orchestrator logs it against the failing specification and moves on.
#[derive(Error, Debug)]
pub enum LlmError {
    /// The provider endpoint could not be reached, or the request died in
    /// transit (includes timeouts and exhausted retries)
    #[error("Provider unreachable: {0}")]
    Communication(String),

    /// The endpoint answered, but not with a usable completion
    #[error("Malformed completion: {0}")]
    InvalidResponse(String),

    /// The endpoint throttled the request through every retry
    #[error("Provider rate limit exceeded")]
    RateLimitExceeded,

    /// The configured model is not served by this endpoint
    #[error("Model '{0}' is not available")]
    ModelNotAvailable(String),

    /// Provider setup or configuration failure
    #[error("Provider error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are keyed on a substring of the user prompt, so tests can
/// answer per-specification without reproducing whole prompts.
///
/// # Examples
///
/// ```
/// use specforge_llm::MockProvider;
/// use specforge_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::new("{}");
/// provider.add_response("47Wh", r#"{"capacity_wh": 47}"#);
/// let out = provider.generate("system", "Raw Value: \"47Wh Li-ion\"").unwrap();
/// assert_eq!(out, r#"{"capacity_wh": 47}"#);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    call_count: Arc<Mutex<usize>>,
}

/// Sentinel stored by `add_error`; matching prompts produce an error.
const ERROR_SENTINEL: &str = "\0ERROR\0";

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a response returned when the user prompt contains `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((fragment.into(), response.into()));
    }

    /// Configure an error for user prompts containing `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((fragment.into(), ERROR_SENTINEL.to_string()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        for (fragment, response) in responses.iter() {
            if user_prompt.contains(fragment) {
                if response == ERROR_SENTINEL {
                    return Err(LlmError::Other("Mock error".to_string()));
                }
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.clone())
    }
}

/// Provider selection for configuration files.
///
/// Maps a provider name from config onto a constructor, so the CLI can
/// stay ignorant of provider internals.
pub fn provider_from_name(
    name: &str,
    api_key: Option<String>,
    model: &str,
) -> Result<Box<dyn LlmProviderTrait<Error = LlmError> + Send + Sync>, LlmError> {
    match name {
        "mock" => Ok(Box::new(MockProvider::default())),
        "openai" => {
            let key = api_key.ok_or_else(|| {
                LlmError::Other("openai provider requires an API key".to_string())
            })?;
            Ok(Box::new(OpenAiProvider::new(key, model)?))
        }
        other => Err(LlmError::Other(format!("unknown provider '{}'", other))),
    }
}
