//! Specforge Field Extractor
//!
//! Converts raw specification text into typed structured values using an
//! LLM in JSON mode.
//!
//! # Architecture
//!
//! ```text
//! (name, raw value, category)
//!     → SchemaRegistry → prompt → LLM → parser → repair → StructuredValue
//! ```
//!
//! # Key Features
//!
//! - **One call per record**: a fixed system prompt plus a category
//!   template; no retries, no multi-turn repair
//! - **Typed outcomes**: `Ok(None)` for records not worth a call,
//!   `Err(ExtractorError)` for failed calls; callers choose batch policy
//! - **Hard timeout**: a stuck provider becomes `ExtractorError::Timeout`
//! - **Deterministic repair**: model omissions recoverable from the name
//!   or raw text are filled in after parsing
//!
//! # Example Usage
//!
//! ```
//! use specforge_extractor::{ExtractorConfig, FieldExtractor};
//! use specforge_domain::Category;
//! use specforge_llm::MockProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(r#"{"capacity_wh": 47}"#);
//! let extractor = FieldExtractor::new(provider, ExtractorConfig::default());
//!
//! let value = extractor
//!     .structure_specification("Battery Option", "47Wh Li-ion", &Category::Battery)
//!     .await?;
//! assert!(value.is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod registry;
mod repair;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::FieldExtractor;
pub use prompt::{render, SYSTEM_PROMPT};
pub use registry::{SchemaRegistry, Template};
pub use repair::{extract_processor_model, repair};
