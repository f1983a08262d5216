//! In-memory implementation of PromptRepository
//!
//! Evaluates the same filter, sort and window semantics as the PostgREST
//! adapter. Used to drive service and route tests.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::DateTime;
use uuid::Uuid;

use prompthub::{
    DomainError, NewPrompt, Pagination, Prompt, PromptChanges, PromptFilter, PromptRepository,
    PromptSort, SortField,
};

#[derive(Default)]
pub struct InMemoryPromptRepository {
    rows: Mutex<Vec<Prompt>>,
    clock: AtomicI64,
    writes: AtomicUsize,
    failure: Option<String>,
    write_failure: Option<String>,
}

impl InMemoryPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// A store that reads normally but fails every insert/update/delete with `message`
    pub fn failing_writes(message: &str) -> Self {
        Self {
            write_failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Put a record straight into the store, bypassing failure modes
    pub fn seed(&self, prompt: Prompt) {
        self.rows().push(prompt);
    }

    /// Number of insert/update/delete calls that reached the store
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(msg) => Err(DomainError::Repository(msg.clone())),
            None => Ok(()),
        }
    }

    fn check_write(&self) -> Result<(), DomainError> {
        self.check()?;
        match &self.write_failure {
            Some(msg) => Err(DomainError::Repository(msg.clone())),
            None => Ok(()),
        }
    }

    fn rows(&self) -> std::sync::MutexGuard<'_, Vec<Prompt>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn count(&self, filter: &PromptFilter) -> Result<Option<u64>, DomainError> {
        self.check()?;
        let rows = self.rows();
        Ok(Some(rows.iter().filter(|p| filter.matches(p)).count() as u64))
    }

    async fn find_page(
        &self,
        filter: &PromptFilter,
        sort: PromptSort,
        pagination: &Pagination,
    ) -> Result<Vec<Prompt>, DomainError> {
        self.check()?;
        let mut matched: Vec<Prompt> = self
            .rows()
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        // Stable sort, descending: ties keep insertion order
        matched.sort_by(|a, b| match sort.field() {
            SortField::CreatedAt => b.created_at.cmp(&a.created_at),
            SortField::ViewCount => b.view_count.cmp(&a.view_count),
            SortField::LikeCount => b.like_count.cmp(&a.like_count),
        });

        let (start, end) = pagination.window();
        Ok(matched
            .into_iter()
            .skip(start as usize)
            .take((end - start + 1) as usize)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        self.check()?;
        Ok(self.rows().iter().find(|p| p.id == id).cloned())
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.rows().iter().any(|p| p.id == id))
    }

    async fn insert(&self, prompt: &NewPrompt) -> Result<Option<Prompt>, DomainError> {
        self.check_write()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        // Strictly increasing timestamps keep `latest` ordering deterministic
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        let stored = Prompt {
            id: Uuid::new_v4().to_string(),
            title: prompt.title.clone(),
            content: prompt.content.clone(),
            prompt_type: prompt.prompt_type,
            platform: prompt.platform.clone(),
            category: prompt.category.clone(),
            view_count: 0,
            like_count: 0,
            created_at: DateTime::from_timestamp(1_700_000_000 + tick, 0).unwrap_or_default(),
        };
        self.rows().push(stored.clone());
        Ok(Some(stored))
    }

    async fn update(
        &self,
        id: &str,
        changes: &PromptChanges,
    ) -> Result<Option<Prompt>, DomainError> {
        self.check_write()?;
        self.writes.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows();
        Ok(rows.iter_mut().find(|p| p.id == id).map(|p| {
            changes.apply_to(p);
            p.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.check_write()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.rows().retain(|p| p.id != id);
        Ok(())
    }
}
