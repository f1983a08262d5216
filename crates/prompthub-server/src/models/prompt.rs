//! Prompt request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use prompthub::{
    DomainError, NewPrompt, Pagination, Prompt, PromptChanges, PromptFilter, PromptPage,
    PromptSort, PromptType,
};

// ============================================
// Request DTOs
// ============================================

/// Query parameters for the listing endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPromptsQuery {
    /// Keyword matched against title or content (case-insensitive)
    pub q: Option<String>,
    /// Sort order: latest (default), views, likes
    pub sort: Option<String>,
    /// Type filter: image or text
    #[serde(rename = "type")]
    pub prompt_type: Option<String>,
    /// Platform filter (exact match)
    pub platform: Option<String>,
    /// Category filter (exact match)
    pub category: Option<String>,
    /// Page number, starting at 1 (default: 1)
    #[param(minimum = 1)]
    pub page: Option<u32>,
    /// Page size, 1-100 (default: 12)
    #[param(minimum = 1, maximum = 100)]
    pub size: Option<u32>,
}

impl ListPromptsQuery {
    /// Split into filter, sort and a validated page window
    pub fn into_parts(self) -> Result<(PromptFilter, PromptSort, Pagination), DomainError> {
        let pagination = Pagination::new(self.page, self.size)?;
        let sort = PromptSort::from_query(self.sort.as_deref());
        let filter = PromptFilter::new(self.q, self.prompt_type, self.platform, self.category);
        Ok((filter, sort, pagination))
    }
}

/// Create Prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    /// 1-255 characters
    pub title: String,
    /// Non-empty prompt body
    pub content: String,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    /// e.g. ChatGPT, Midjourney
    pub platform: String,
    /// e.g. 마케팅, 개발
    pub category: String,
}

impl TryFrom<CreatePromptRequest> for NewPrompt {
    type Error = DomainError;

    fn try_from(req: CreatePromptRequest) -> Result<Self, Self::Error> {
        NewPrompt::new(
            req.title,
            req.content,
            req.prompt_type,
            req.platform,
            req.category,
        )
    }
}

/// Update Prompt request (all fields optional; null means unchanged)
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub prompt_type: Option<PromptType>,
    pub platform: Option<String>,
    pub category: Option<String>,
}

impl From<UpdatePromptRequest> for PromptChanges {
    fn from(req: UpdatePromptRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            prompt_type: req.prompt_type,
            platform: req.platform,
            category: req.category,
            ..Self::default()
        }
    }
}

// ============================================
// Response DTOs
// ============================================

/// Prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
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

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            content: prompt.content,
            prompt_type: prompt.prompt_type,
            platform: prompt.platform,
            category: prompt.category,
            view_count: prompt.view_count,
            like_count: prompt.like_count,
            created_at: prompt.created_at,
        }
    }
}

/// Paginated prompt listing
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptListResponse {
    pub items: Vec<PromptResponse>,
    /// Total matching prompts
    pub total: u64,
    /// Current page
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Total pages (1 when there are no matches)
    pub total_pages: u64,
}

impl From<PromptPage> for PromptListResponse {
    fn from(page: PromptPage) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
            page: page.page,
            size: page.size,
            total_pages: page.total_pages,
        }
    }
}

/// Simple message response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let (filter, sort, pagination) = ListPromptsQuery::default().into_parts().unwrap();
        assert_eq!(filter, PromptFilter::default());
        assert_eq!(sort, PromptSort::Latest);
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_list_query_rejects_oversized_page() {
        let query = ListPromptsQuery {
            size: Some(101),
            ..ListPromptsQuery::default()
        };
        assert!(matches!(
            query.into_parts(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_update_request_nulls_are_absent() {
        let req: UpdatePromptRequest = serde_json::from_value(serde_json::json!({
            "title": "new",
            "content": null
        }))
        .unwrap();
        let changes = PromptChanges::from(req);

        assert_eq!(changes.title.as_deref(), Some("new"));
        assert_eq!(changes.content, None);
        assert_eq!(changes.view_count, None);
    }

    #[test]
    fn test_create_request_requires_known_type() {
        let result: Result<CreatePromptRequest, _> = serde_json::from_value(serde_json::json!({
            "title": "t",
            "content": "c",
            "type": "video",
            "platform": "ChatGPT",
            "category": "개발"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_uses_type_key() {
        let prompt = Prompt {
            id: "abc".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            prompt_type: PromptType::Image,
            platform: "Midjourney".to_string(),
            category: "아트".to_string(),
            view_count: 0,
            like_count: 0,
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(PromptResponse::from(prompt)).unwrap();
        assert_eq!(json["type"], "image");
        assert!(json.get("prompt_type").is_none());
    }
}
