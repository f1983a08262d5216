//! Prompt Repository Port
//!
//! Abstract interface over the remote table store holding prompts.

use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, NewPrompt, Pagination, Prompt, PromptChanges, PromptFilter, PromptSort,
};

/// Repository interface for Prompt records
///
/// Every method is a single store round-trip. Nothing is cached between calls.
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Count rows matching the filter. `None` when the store reports no count.
    async fn count(&self, filter: &PromptFilter) -> Result<Option<u64>, DomainError>;

    /// Fetch one ordered page of rows matching the filter
    async fn find_page(
        &self,
        filter: &PromptFilter,
        sort: PromptSort,
        pagination: &Pagination,
    ) -> Result<Vec<Prompt>, DomainError>;

    /// Find a Prompt by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError>;

    /// Check if a Prompt exists
    async fn exists(&self, id: &str) -> Result<bool, DomainError>;

    /// Insert a Prompt. Returns the stored row, or `None` if the store returned nothing.
    async fn insert(&self, prompt: &NewPrompt) -> Result<Option<Prompt>, DomainError>;

    /// Write the present fields of `changes`. Returns the updated row, or `None`.
    async fn update(&self, id: &str, changes: &PromptChanges)
        -> Result<Option<Prompt>, DomainError>;

    /// Delete a Prompt by ID
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
