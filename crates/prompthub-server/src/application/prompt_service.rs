//! Prompt Application Service (Use Case)
//!
//! Orchestrates listing and single-prompt operations over a PromptRepository.
//! Counter updates are read-then-write with no locking; concurrent
//! increments on the same prompt can be lost.

use std::sync::Arc;

use prompthub::{
    is_known_category, is_known_platform, DomainError, NewPrompt, Pagination, Prompt,
    PromptChanges, PromptFilter, PromptPage, PromptRepository, PromptSort,
};

/// Application service for Prompt operations
pub struct PromptService<R: PromptRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromptRepository + ?Sized> PromptService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Search, filter, sort and paginate
    ///
    /// The same filter drives the count and the page query.
    pub async fn list(
        &self,
        filter: PromptFilter,
        sort: PromptSort,
        pagination: Pagination,
    ) -> Result<PromptPage, DomainError> {
        let total = self.repo.count(&filter).await?.unwrap_or(0);
        let items = self.repo.find_page(&filter, sort, &pagination).await?;

        tracing::debug!(
            "Listed {} of {} prompts (page {}, size {}, sort {})",
            items.len(),
            total,
            pagination.page(),
            pagination.size(),
            sort
        );

        Ok(PromptPage {
            items,
            total,
            page: pagination.page(),
            size: pagination.size(),
            total_pages: pagination.total_pages(total),
        })
    }

    /// Create a prompt
    pub async fn create(&self, prompt: NewPrompt) -> Result<Prompt, DomainError> {
        note_unlisted(Some(&prompt.platform), Some(&prompt.category));

        let saved = self
            .repo
            .insert(&prompt)
            .await?
            .ok_or_else(|| DomainError::Repository("store returned no created row".to_string()))?;

        tracing::info!("Created Prompt: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Get a prompt and bump its view count
    ///
    /// Returns the record as fetched, before this call's increment.
    pub async fn get(&self, id: &str) -> Result<Prompt, DomainError> {
        let prompt = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        self.repo
            .update(
                id,
                &PromptChanges::view_count(prompt.view_count.saturating_add(1)),
            )
            .await?;

        Ok(prompt)
    }

    /// Apply the supplied fields of a partial update
    pub async fn update(&self, id: &str, changes: PromptChanges) -> Result<Prompt, DomainError> {
        changes.validate()?;

        if !self.repo.exists(id).await? {
            return Err(DomainError::not_found("Prompt", id));
        }

        if changes.is_empty() {
            return Err(DomainError::Validation("Nothing to update".to_string()));
        }

        note_unlisted(changes.platform.as_deref(), changes.category.as_deref());

        let updated = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| DomainError::Repository("store returned no updated row".to_string()))?;

        tracing::info!("Updated Prompt: {}", id);

        Ok(updated)
    }

    /// Delete a prompt
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        if !self.repo.exists(id).await? {
            return Err(DomainError::not_found("Prompt", id));
        }

        self.repo.delete(id).await?;
        tracing::info!("Deleted Prompt: {}", id);

        Ok(())
    }

    /// Increment the like count by one
    ///
    /// Always increments; there is no per-user state and no un-like.
    /// Returns the record after the increment.
    pub async fn like(&self, id: &str) -> Result<Prompt, DomainError> {
        let prompt = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Prompt", id))?;

        let updated = self
            .repo
            .update(
                id,
                &PromptChanges::like_count(prompt.like_count.saturating_add(1)),
            )
            .await?
            .ok_or_else(|| DomainError::Repository("store returned no updated row".to_string()))?;

        tracing::info!("Liked Prompt: {} (likes: {})", id, updated.like_count);

        Ok(updated)
    }
}

fn note_unlisted(platform: Option<&str>, category: Option<&str>) {
    if let Some(platform) = platform.filter(|p| !is_known_platform(p)) {
        tracing::debug!("Prompt uses unlisted platform: {}", platform);
    }
    if let Some(category) = category.filter(|c| !is_known_category(c)) {
        tracing::debug!("Prompt uses unlisted category: {}", category);
    }
}
