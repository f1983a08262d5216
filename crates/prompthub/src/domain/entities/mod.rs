//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Prompt: the shared prompt record
//! - NewPrompt / PromptChanges: write payloads
//! - PromptPage: a listing page with pagination metadata

mod prompt;

pub use prompt::*;
