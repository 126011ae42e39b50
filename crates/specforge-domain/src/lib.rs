//! Specforge Domain Layer
//!
//! This crate contains the core data model for the specification
//! normalization pipeline. It defines the fundamental records, the typed
//! structured-value payloads, and the trait interfaces that all other
//! layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Specification**: one raw (name, value) fact about a laptop,
//!   optionally enriched with a structured form
//! - **Category**: the coarse domain a specification belongs to
//!   (Processor, Display, Memory, ...)
//! - **StructuredValue**: the normalized, schema-conforming representation
//!   of a specification's raw text, modeled as a tagged union keyed by
//!   category
//!
//! ## Architecture
//!
//! - Pure data model only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for the store and the text-generation service

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod specification;
pub mod structured;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use specification::{Laptop, LaptopId, NewSpecification, RawSpecification, SpecId, Specification};
pub use structured::{
    BatterySpec, ConnectivitySpec, DimensionsSpec, DisplaySpec, GraphicsSpec, MemorySpec,
    OneOrMany, PhysicalSpec, ProcessorSpec, StorageCapacity, StorageSpec, StructuredValue,
    TestResult,
};
