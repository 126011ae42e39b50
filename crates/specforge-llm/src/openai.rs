//! OpenAI Provider Implementation
//!
//! Chat-completions integration used for specification structuring. The
//! request pins JSON mode and a low temperature so the model behaves as a
//! parser, not a writer.
//!
//! # Features
//!
//! - Async HTTP communication with the chat-completions API
//! - Configurable endpoint and model (any OpenAI-compatible server works)
//! - Retry logic with exponential backoff
//! - Explicit request timeout; expiry surfaces as a communication error
//!
//! # Examples
//!
//! ```no_run
//! use specforge_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new("sk-...", "gpt-4-turbo-preview").unwrap();
//! ```

use crate::LlmError;
use serde::{Deserialize, Serialize};
use specforge_domain::traits::LlmProvider as LlmProviderTrait;
use std::time::Duration;

/// Default chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default timeout for LLM requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Sampling temperature; near-zero keeps extraction deterministic
const EXTRACTION_TEMPERATURE: f32 = 0.1;

/// OpenAI chat-completions provider
///
/// Sends one system + user message pair per call and requests a JSON
/// object response.
pub struct OpenAiProvider {
    endpoint: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

impl OpenAiProvider {
    /// Create a new provider against the default OpenAI endpoint.
    ///
    /// # Parameters
    ///
    /// - `api_key`: Bearer token for the API
    /// - `model`: Model to use (e.g. "gpt-4-turbo-preview")
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built; the client carries the
    /// request timeout, so there is no provider without it.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key, model)
    }

    /// Create a provider against a custom OpenAI-compatible endpoint.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate a completion for a system + user prompt pair.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is unreachable or the request times out
    /// - The model is not available
    /// - The API rejects the request or returns an empty choice list
    pub async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: EXTRACTION_TEMPERATURE,
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return match response.json::<ChatResponse>().await {
                            Ok(chat) => chat
                                .choices
                                .into_iter()
                                .next()
                                .map(|choice| choice.message.content)
                                .ok_or_else(|| {
                                    LlmError::InvalidResponse("empty choice list".to_string())
                                }),
                            Err(e) => Err(LlmError::InvalidResponse(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        };
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function; callers run this from
        // spawn_blocking, never from inside an async task.
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("runtime error: {}", e)))?
            .block_on(async { self.generate(system_prompt, user_prompt).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_provider_creation() {
        let provider = OpenAiProvider::new("sk-test", "gpt-4-turbo-preview").unwrap();
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "gpt-4-turbo-preview");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_openai_provider_custom_endpoint() {
        let provider =
            OpenAiProvider::with_endpoint("http://localhost:8000/v1", "none", "local-model")
                .unwrap();
        assert_eq!(provider.endpoint, "http://localhost:8000/v1");
    }

    #[test]
    fn test_openai_provider_with_max_retries() {
        let provider = OpenAiProvider::new("sk-test", "gpt-4-turbo-preview")
            .unwrap()
            .with_max_retries(5);
        assert_eq!(provider.max_retries, 5);
    }

    #[tokio::test]
    async fn test_openai_error_handling() {
        // Unroutable endpoint triggers a communication error.
        let provider =
            OpenAiProvider::with_endpoint("http://127.0.0.1:9/v1", "sk-test", "gpt-4-turbo-preview")
                .unwrap()
                .with_max_retries(1);

        let result = provider.generate("system", "user").await;
        match result {
            Err(LlmError::Communication(_)) => {}
            other => panic!("Expected Communication error, got {:?}", other.map(|_| ())),
        }
    }
}
