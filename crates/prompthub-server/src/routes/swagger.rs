//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::models::{
    CreatePromptRequest, MessageResponse, PromptListResponse, PromptResponse,
    UpdatePromptRequest,
};
use prompthub::PromptType;

use super::health::{HealthCheck, ServiceStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        super::health::root,
        super::health::health_check,
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::create_prompt,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::delete_prompt,
        super::prompt::like_prompt,
    ),
    info(
        title = "PromptHub API",
        version = "1.0.0",
        description = "REST API for PromptHub, a prompt-sharing platform.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prompt", description = "Prompt CRUD, search and counters"),
    ),
    components(
        schemas(
            // Prompt
            PromptType,
            CreatePromptRequest,
            UpdatePromptRequest,
            PromptResponse,
            PromptListResponse,
            MessageResponse,
            ErrorResponse,
            // Health
            ServiceStatus,
            HealthCheck,
        )
    ),
)]
pub struct ApiDoc;
