//! PromptFilter - Predicates shared by the count and page queries

use crate::domain::entities::Prompt;

/// Listing predicates
///
/// Built once per request and handed to both the count query and the data
/// query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilter {
    /// Trimmed keyword, matched case-insensitively against title OR content
    pub search: Option<String>,
    /// Exact `type` match. Kept as raw text: an unknown value matches nothing.
    pub prompt_type: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
}

impl PromptFilter {
    /// Normalise raw query values. Blank keywords and empty filters are dropped.
    pub fn new(
        q: Option<String>,
        prompt_type: Option<String>,
        platform: Option<String>,
        category: Option<String>,
    ) -> Self {
        let search = q
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            search,
            prompt_type: prompt_type.filter(|s| !s.is_empty()),
            platform: platform.filter(|s| !s.is_empty()),
            category: category.filter(|s| !s.is_empty()),
        }
    }

    /// Exact-match predicates as `(column, value)` pairs
    pub fn equalities(&self) -> Vec<(&'static str, &str)> {
        let mut eq = Vec::new();
        if let Some(t) = &self.prompt_type {
            eq.push(("type", t.as_str()));
        }
        if let Some(p) = &self.platform {
            eq.push(("platform", p.as_str()));
        }
        if let Some(c) = &self.category {
            eq.push(("category", c.as_str()));
        }
        eq
    }

    /// Evaluate the predicates against a record
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            let hit = prompt.title.to_lowercase().contains(&term)
                || prompt.content.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }

        self.equalities().into_iter().all(|(column, value)| match column {
            "type" => prompt.prompt_type.as_str() == value,
            "platform" => prompt.platform == value,
            "category" => prompt.category == value,
            _ => false,
        })
    }
}
