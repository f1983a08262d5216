//! Prompt Routes - CRUD, search and counters
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use prompthub::NewPrompt;

use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    CreatePromptRequest, ListPromptsQuery, MessageResponse, PromptListResponse, PromptResponse,
    UpdatePromptRequest,
};
use crate::AppState;

/// List prompts with search, filters, sorting and pagination
///
/// GET /api/v1/prompts?q=&sort=&type=&platform=&category=&page=&size=
#[utoipa::path(
    get,
    path = "/api/v1/prompts",
    params(ListPromptsQuery),
    responses(
        (status = 200, description = "One page of prompts", body = PromptListResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    query: Result<Query<ListPromptsQuery>, QueryRejection>,
) -> Result<Json<PromptListResponse>, ApiError> {
    let Query(query) = query?;
    let (filter, sort, pagination) = query
        .into_parts()
        .map_err(ApiError::context("list prompts"))?;

    let page = state
        .prompt_service
        .list(filter, sort, pagination)
        .await
        .map_err(ApiError::context("list prompts"))?;

    Ok(Json(page.into()))
}

/// Create a prompt
#[utoipa::path(
    post,
    path = "/api/v1/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    payload: Result<Json<CreatePromptRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PromptResponse>), ApiError> {
    let Json(payload) = payload?;
    let new_prompt =
        NewPrompt::try_from(payload).map_err(ApiError::context("create prompt"))?;

    let prompt = state
        .prompt_service
        .create(new_prompt)
        .await
        .map_err(ApiError::context("create prompt"))?;

    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Get a prompt by ID
///
/// Increments the view count. The response carries the count from before
/// this request's increment.
#[utoipa::path(
    get,
    path = "/api/v1/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state
        .prompt_service
        .get(&id)
        .await
        .map_err(ApiError::context("get prompt"))?;

    Ok(Json(prompt.into()))
}

/// Partially update a prompt
#[utoipa::path(
    patch,
    path = "/api/v1/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 400, description = "Invalid payload or nothing to update", body = ErrorResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePromptRequest>, JsonRejection>,
) -> Result<Json<PromptResponse>, ApiError> {
    let Json(payload) = payload?;

    let prompt = state
        .prompt_service
        .update(&id, payload.into())
        .await
        .map_err(ApiError::context("update prompt"))?;

    Ok(Json(prompt.into()))
}

/// Delete a prompt
#[utoipa::path(
    delete,
    path = "/api/v1/prompts/{id}",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt deleted", body = MessageResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .prompt_service
        .delete(&id)
        .await
        .map_err(ApiError::context("delete prompt"))?;

    Ok(Json(MessageResponse {
        message: "Prompt deleted successfully".to_string(),
    }))
}

/// Like a prompt
///
/// Adds one like on every call. Returns the prompt after the increment.
#[utoipa::path(
    post,
    path = "/api/v1/prompts/{id}/like",
    params(
        ("id" = String, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Like recorded", body = PromptResponse),
        (status = 404, description = "Prompt not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn like_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PromptResponse>, ApiError> {
    let prompt = state
        .prompt_service
        .like(&id)
        .await
        .map_err(ApiError::context("like prompt"))?;

    Ok(Json(prompt.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/api/v1/prompts/:id",
            get(get_prompt).patch(update_prompt).delete(delete_prompt),
        )
        .route("/api/v1/prompts/:id/like", post(like_prompt))
}
