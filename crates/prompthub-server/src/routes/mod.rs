//! PromptHub API Routes
//!
//! - / and /health - Liveness
//! - /api/v1/prompts - Prompt listing, search and creation
//! - /api/v1/prompts/:id - Read (counts a view), partial update, delete
//! - /api/v1/prompts/:id/like - Like counter

pub mod health;
pub mod prompt;
pub mod swagger;
