//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its
//! infrastructure. Implementations live in other crates (specforge-store,
//! specforge-llm); the pipeline receives them by explicit injection rather
//! than through process-wide singletons.

use crate::{Category, LaptopId, NewSpecification, SpecId, Specification, StructuredValue};

/// Persistent store for laptops and their specifications.
///
/// Implemented by the infrastructure layer (specforge-store). Mutating
/// methods that take slices are transactional: either every change in the
/// call is applied, or none is.
pub trait SpecStore {
    /// Error type for store operations
    type Error;

    /// Replace a laptop's specifications with a fresh set.
    ///
    /// Ingestion semantics are full-replace, not upsert: prior rows for the
    /// laptop are deleted and the new rows inserted, in one transaction.
    /// Returns the number of rows inserted.
    fn replace_specifications(
        &mut self,
        laptop_id: LaptopId,
        specs: Vec<NewSpecification>,
    ) -> Result<usize, Self::Error>;

    /// Ids of all specifications without a structured value, ascending.
    fn unstructured_ids(&self) -> Result<Vec<SpecId>, Self::Error>;

    /// Bulk fetch by id list, in ascending id order.
    fn fetch_by_ids(&self, ids: &[SpecId]) -> Result<Vec<Specification>, Self::Error>;

    /// Persist structured values for a batch, as one transaction.
    fn commit_structured(
        &mut self,
        updates: &[(SpecId, StructuredValue)],
    ) -> Result<(), Self::Error>;

    /// Laptops that own at least one specification in this category.
    fn laptops_with_category(&self, category: &Category) -> Result<Vec<LaptopId>, Self::Error>;

    /// One laptop's specifications in a category, ascending by id.
    fn specs_for_laptop(
        &self,
        laptop_id: LaptopId,
        category: &Category,
    ) -> Result<Vec<Specification>, Self::Error>;

    /// All specifications in a category, optionally filtered to names
    /// containing a substring, ascending by id.
    fn specs_in_category(
        &self,
        category: &Category,
        name_contains: Option<&str>,
    ) -> Result<Vec<Specification>, Self::Error>;

    /// Apply a consolidation step for one laptop: structured-value updates
    /// plus row deletions, as one transaction.
    fn apply_consolidation(
        &mut self,
        updates: &[(SpecId, StructuredValue)],
        deletions: &[SpecId],
    ) -> Result<(), Self::Error>;

    /// Number of specifications with a structured value.
    fn count_structured(&self) -> Result<usize, Self::Error>;
}

/// Text-generation service used for field extraction.
///
/// Implemented by the infrastructure layer (specforge-llm). One call per
/// specification: a fixed system instruction plus a category-specific user
/// instruction, returning the model's raw text.
pub trait LlmProvider {
    /// Error type for generation operations
    type Error;

    /// Generate a completion for a system + user prompt pair.
    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error>;
}

impl<T: LlmProvider + ?Sized> LlmProvider for Box<T> {
    type Error = T::Error;

    fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, Self::Error> {
        (**self).generate(system_prompt, user_prompt)
    }
}
