//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations over the prompt store.

mod prompt_service;

pub use prompt_service::PromptService;
