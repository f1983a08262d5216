//! PromptSort - Listing order
//!
//! Every exposed option sorts descending; there is no ascending variant.

use std::fmt;

/// Sortable prompt columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    ViewCount,
    LikeCount,
}

impl SortField {
    /// Column name in the store
    pub fn column(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "created_at",
            SortField::ViewCount => "view_count",
            SortField::LikeCount => "like_count",
        }
    }
}

/// Listing sort key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PromptSort {
    /// Newest first
    #[default]
    Latest,
    /// Most viewed first
    Views,
    /// Most liked first
    Likes,
}

impl PromptSort {
    /// Lenient parse for query strings: unknown or missing values fall back to `Latest`
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Column to sort by, always descending
    pub fn field(&self) -> SortField {
        match self {
            PromptSort::Latest => SortField::CreatedAt,
            PromptSort::Views => SortField::ViewCount,
            PromptSort::Likes => SortField::LikeCount,
        }
    }
}

impl fmt::Display for PromptSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptSort::Latest => write!(f, "latest"),
            PromptSort::Views => write!(f, "views"),
            PromptSort::Likes => write!(f, "likes"),
        }
    }
}

impl std::str::FromStr for PromptSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(PromptSort::Latest),
            "views" => Ok(PromptSort::Views),
            "likes" => Ok(PromptSort::Likes),
            _ => Err(format!("Unknown sort: {}. Valid: latest, views, likes", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mapping() {
        assert_eq!(PromptSort::Latest.field(), SortField::CreatedAt);
        assert_eq!(PromptSort::Views.field(), SortField::ViewCount);
        assert_eq!(PromptSort::Likes.field(), SortField::LikeCount);
        assert_eq!(PromptSort::Views.field().column(), "view_count");
    }

    #[test]
    fn test_unknown_sort_falls_back_to_latest() {
        assert_eq!(PromptSort::from_query(None), PromptSort::Latest);
        assert_eq!(PromptSort::from_query(Some("oldest")), PromptSort::Latest);
        assert_eq!(PromptSort::from_query(Some("")), PromptSort::Latest);
        assert_eq!(PromptSort::from_query(Some("likes")), PromptSort::Likes);
    }
}
