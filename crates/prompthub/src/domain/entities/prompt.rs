//! Prompt - A shared AI prompt with its metadata
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::PromptType;

/// Maximum title length, counted in characters
pub const TITLE_MAX_CHARS: usize = 255;

/// Prompt - the stored record
///
/// `id` and `created_at` are assigned by the store. Counters start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    pub platform: String,
    pub category: String,
    pub view_count: i64,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a client when creating a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPrompt {
    pub title: String,
    pub content: String,
    pub prompt_type: PromptType,
    pub platform: String,
    pub category: String,
}

impl NewPrompt {
    /// Build a validated creation payload
    pub fn new(
        title: String,
        content: String,
        prompt_type: PromptType,
        platform: String,
        category: String,
    ) -> Result<Self, DomainError> {
        validate_title(&title)?;
        validate_content(&content)?;

        Ok(Self {
            title,
            content,
            prompt_type,
            platform,
            category,
        })
    }
}

/// Change set for an update. Only `Some` fields are written.
///
/// Counters are included so the view/like operations go through the same
/// store update as a client patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub prompt_type: Option<PromptType>,
    pub platform: Option<String>,
    pub category: Option<String>,
    pub view_count: Option<i64>,
    pub like_count: Option<i64>,
}

impl PromptChanges {
    /// Change set that only sets `view_count`
    pub fn view_count(value: i64) -> Self {
        Self {
            view_count: Some(value),
            ..Self::default()
        }
    }

    /// Change set that only sets `like_count`
    pub fn like_count(value: i64) -> Self {
        Self {
            like_count: Some(value),
            ..Self::default()
        }
    }

    /// True when no field would be written
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.prompt_type.is_none()
            && self.platform.is_none()
            && self.category.is_none()
            && self.view_count.is_none()
            && self.like_count.is_none()
    }

    /// Check the supplied content fields against the same rules as creation
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(content) = &self.content {
            validate_content(content)?;
        }
        Ok(())
    }

    /// Apply this change set to a record in place
    pub fn apply_to(&self, prompt: &mut Prompt) {
        if let Some(title) = &self.title {
            prompt.title = title.clone();
        }
        if let Some(content) = &self.content {
            prompt.content = content.clone();
        }
        if let Some(prompt_type) = self.prompt_type {
            prompt.prompt_type = prompt_type;
        }
        if let Some(platform) = &self.platform {
            prompt.platform = platform.clone();
        }
        if let Some(category) = &self.category {
            prompt.category = category.clone();
        }
        if let Some(view_count) = self.view_count {
            prompt.view_count = view_count;
        }
        if let Some(like_count) = self.like_count {
            prompt.like_count = like_count;
        }
    }
}

/// One page of a listing plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPage {
    pub items: Vec<Prompt>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
    pub total_pages: u64,
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    if len > TITLE_MAX_CHARS {
        return Err(DomainError::Validation(format!(
            "title must be at most {} characters (got {})",
            TITLE_MAX_CHARS, len
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.is_empty() {
        return Err(DomainError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    Ok(())
}
