//! Pagination - Offset-based page window
//!
//! `page` is 1-indexed. The store window is zero-indexed and inclusive.

use crate::domain::errors::DomainError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validated page/size pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Validate `page >= 1` and `1 <= size <= 100`, applying defaults for missing values
    pub fn new(page: Option<u32>, size: Option<u32>) -> Result<Self, DomainError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page < 1 {
            return Err(DomainError::Validation(
                "page must be greater than or equal to 1".to_string(),
            ));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&size) {
            return Err(DomainError::Validation(format!(
                "size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Zero-indexed offset of the first row
    pub fn offset(&self) -> u64 {
        (u64::from(self.page) - 1) * u64::from(self.size)
    }

    /// Inclusive `(start, end)` row window
    pub fn window(&self) -> (u64, u64) {
        let start = self.offset();
        (start, start + u64::from(self.size) - 1)
    }

    /// `ceil(total / size)`, or 1 for an empty result set
    pub fn total_pages(&self, total: u64) -> u64 {
        if total == 0 {
            1
        } else {
            total.div_ceil(u64::from(self.size))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Pagination::new(None, None).unwrap();
        assert_eq!(p.page(), 1);
        assert_eq!(p.size(), 12);
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn test_bounds() {
        assert!(Pagination::new(Some(0), None).is_err());
        assert!(Pagination::new(None, Some(0)).is_err());
        assert!(Pagination::new(None, Some(101)).is_err());
        assert!(Pagination::new(Some(1), Some(100)).is_ok());
    }

    #[test]
    fn test_window() {
        assert_eq!(Pagination::new(Some(1), Some(12)).unwrap().window(), (0, 11));
        assert_eq!(Pagination::new(Some(3), Some(12)).unwrap().window(), (24, 35));
        assert_eq!(Pagination::new(Some(2), Some(1)).unwrap().window(), (1, 1));
    }

    #[test]
    fn test_total_pages() {
        let p = Pagination::new(Some(1), Some(12)).unwrap();
        assert_eq!(p.total_pages(25), 3);
        assert_eq!(p.total_pages(24), 2);
        assert_eq!(p.total_pages(1), 1);
        // Empty listings still report a single page
        assert_eq!(p.total_pages(0), 1);
    }
}
