//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod pagination;
mod prompt_filter;
mod prompt_sort;
mod prompt_type;
mod vocabulary;

pub use pagination::*;
pub use prompt_filter::*;
pub use prompt_sort::*;
pub use prompt_type::*;
pub use vocabulary::*;
