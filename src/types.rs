/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Fixed number of stores returned per page by listing and search
pub const PAGE_SIZE: i64 = 10;

/// 1-based page number. Zero, negative or absent input normalizes to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(i64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(raw: i64) -> Self {
        if raw < 1 {
            Self::FIRST
        } else {
            Page(raw)
        }
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Number of records to skip before this page starts
    pub fn offset(self, page_size: i64) -> i64 {
        (self.0 - 1).saturating_mul(page_size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
