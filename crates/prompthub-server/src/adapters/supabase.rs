//! Supabase (PostgREST) implementation of PromptRepository
//!
//! Talks to `{SUPABASE_URL}/rest/v1/prompts` using reqwest. One client is
//! built at startup and its connection pool is shared by every request.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::{header::HeaderMap, Client, Method, RequestBuilder, Response};
use serde::{de, Deserialize, Deserializer, Serialize};

use prompthub::{
    DomainError, NewPrompt, Pagination, Prompt, PromptChanges, PromptFilter, PromptRepository,
    PromptSort, PromptType,
};

const TABLE: &str = "prompts";

/// PostgREST implementation of PromptRepository
pub struct SupabasePromptRepository {
    client: Client,
    table_url: String,
    api_key: String,
}

impl SupabasePromptRepository {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("prompthub-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            table_url: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), TABLE),
            api_key: api_key.to_string(),
        })
    }

    fn request(&self, method: Method, params: &[(String, String)]) -> RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(params)
    }

    async fn send(request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request.send().await.map_err(DomainError::repository)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(DomainError::Repository(format!(
                "store responded {}: {}",
                status, body
            )));
        }

        Ok(response)
    }

    async fn rows(response: Response) -> Result<Vec<Prompt>, DomainError> {
        let rows: Vec<PromptRow> = response.json().await.map_err(DomainError::repository)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

// ============================================
// Query rendering
// ============================================

/// Render filter predicates as PostgREST query parameters.
///
/// Used verbatim by both the count and the page query.
fn filter_params(filter: &PromptFilter) -> Vec<(String, String)> {
    let mut params = Vec::new();

    if let Some(term) = &filter.search {
        params.push(("or".to_string(), search_clause(term)));
    }

    for (column, value) in filter.equalities() {
        params.push((column.to_string(), format!("eq.{}", value)));
    }

    params
}

/// `title ILIKE %term% OR content ILIKE %term%`
///
/// The operand is double-quoted so commas and parentheses in the keyword
/// cannot break the `or=(...)` grammar.
fn search_clause(term: &str) -> String {
    let quoted = term.replace('\\', "\\\\").replace('"', "\\\"");
    format!(
        "(title.ilike.\"*{q}*\",content.ilike.\"*{q}*\")",
        q = quoted
    )
}

fn order_param(sort: PromptSort) -> String {
    format!("{}.desc", sort.field().column())
}

fn id_param(id: &str) -> Vec<(String, String)> {
    vec![("id".to_string(), format!("eq.{}", id))]
}

/// Total from a `Content-Range` header such as `0-11/25` or `*/0`.
/// An unknown total (`*`) yields `None`.
fn content_range_total(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get("content-range")?.to_str().ok()?;
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}

// ============================================
// Wire types
// ============================================

/// Internal row type for JSON mapping
#[derive(Debug, Deserialize)]
struct PromptRow {
    #[serde(deserialize_with = "opaque_id")]
    id: String,
    title: String,
    content: String,
    #[serde(rename = "type")]
    prompt_type: PromptType,
    platform: String,
    category: String,
    #[serde(default)]
    view_count: i64,
    #[serde(default)]
    like_count: i64,
    #[serde(deserialize_with = "store_timestamp")]
    created_at: DateTime<Utc>,
}

impl From<PromptRow> for Prompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            prompt_type: row.prompt_type,
            platform: row.platform,
            category: row.category,
            view_count: row.view_count,
            like_count: row.like_count,
            created_at: row.created_at,
        }
    }
}

/// Ids may be uuid text or a bigint column; both are carried as strings.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("unsupported id value: {}", other))),
    }
}

/// `timestamptz` arrives as RFC 3339; a plain `timestamp` column has no offset and is read as UTC.
fn store_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))
}

#[derive(Debug, Serialize)]
struct InsertBody<'a> {
    title: &'a str,
    content: &'a str,
    #[serde(rename = "type")]
    prompt_type: PromptType,
    platform: &'a str,
    category: &'a str,
}

impl<'a> From<&'a NewPrompt> for InsertBody<'a> {
    fn from(prompt: &'a NewPrompt) -> Self {
        Self {
            title: &prompt.title,
            content: &prompt.content,
            prompt_type: prompt.prompt_type,
            platform: &prompt.platform,
            category: &prompt.category,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChangesBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    prompt_type: Option<PromptType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    like_count: Option<i64>,
}

impl<'a> From<&'a PromptChanges> for ChangesBody<'a> {
    fn from(changes: &'a PromptChanges) -> Self {
        Self {
            title: changes.title.as_deref(),
            content: changes.content.as_deref(),
            prompt_type: changes.prompt_type,
            platform: changes.platform.as_deref(),
            category: changes.category.as_deref(),
            view_count: changes.view_count,
            like_count: changes.like_count,
        }
    }
}

#[async_trait]
impl PromptRepository for SupabasePromptRepository {
    async fn count(&self, filter: &PromptFilter) -> Result<Option<u64>, DomainError> {
        let mut params = vec![("select".to_string(), "id".to_string())];
        params.extend(filter_params(filter));

        let response = Self::send(
            self.request(Method::HEAD, &params)
                .header("Prefer", "count=exact"),
        )
        .await?;

        Ok(content_range_total(response.headers()))
    }

    async fn find_page(
        &self,
        filter: &PromptFilter,
        sort: PromptSort,
        pagination: &Pagination,
    ) -> Result<Vec<Prompt>, DomainError> {
        let (start, end) = pagination.window();

        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(filter_params(filter));
        params.push(("order".to_string(), order_param(sort)));
        params.push(("offset".to_string(), start.to_string()));
        params.push(("limit".to_string(), (end - start + 1).to_string()));

        let response = Self::send(self.request(Method::GET, &params)).await?;
        Self::rows(response).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Prompt>, DomainError> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        params.extend(id_param(id));

        let response = Self::send(self.request(Method::GET, &params)).await?;
        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn exists(&self, id: &str) -> Result<bool, DomainError> {
        let mut params = vec![("select".to_string(), "id".to_string())];
        params.extend(id_param(id));

        let response = Self::send(self.request(Method::GET, &params)).await?;
        let rows: Vec<serde_json::Value> =
            response.json().await.map_err(DomainError::repository)?;
        Ok(!rows.is_empty())
    }

    async fn insert(&self, prompt: &NewPrompt) -> Result<Option<Prompt>, DomainError> {
        let response = Self::send(
            self.request(Method::POST, &[])
                .header("Prefer", "return=representation")
                .json(&InsertBody::from(prompt)),
        )
        .await?;

        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn update(
        &self,
        id: &str,
        changes: &PromptChanges,
    ) -> Result<Option<Prompt>, DomainError> {
        let response = Self::send(
            self.request(Method::PATCH, &id_param(id))
                .header("Prefer", "return=representation")
                .json(&ChangesBody::from(changes)),
        )
        .await?;

        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        Self::send(self.request(Method::DELETE, &id_param(id))).await?;
        Ok(())
    }
}
