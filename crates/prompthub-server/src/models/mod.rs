//! PromptHub API Models
//!
//! - Prompt: request/response DTOs for the prompt resource

mod prompt;

pub use prompt::*;
