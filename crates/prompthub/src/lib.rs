//! PromptHub Domain Library
//!
//! Core domain types and interfaces for the PromptHub prompt-sharing API.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Prompt records and write payloads
//!   - `value_objects/`: PromptType, PromptSort, Pagination, PromptFilter
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use prompthub::{Pagination, PromptFilter, PromptRepository, PromptSort};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    is_known_category, is_known_platform, DomainError, NewPrompt, Pagination, Prompt,
    PromptChanges, PromptFilter, PromptPage, PromptSort, PromptType, SortField,
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, KNOWN_CATEGORIES, KNOWN_PLATFORMS, MAX_PAGE_SIZE,
    TITLE_MAX_CHARS,
};
pub use ports::PromptRepository;
