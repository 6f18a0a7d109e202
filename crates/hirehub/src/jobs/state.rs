use serde::{Deserialize, Serialize};

use super::domain::JobPosting;
use super::query::{page_count, JobPage, JobQueryEngine, DEFAULT_PAGE_SIZE};

/// Search box, category selection, and pagination cursor owned by the browse view.
///
/// The state is re-evaluated against the full job collection after every input event; it never
/// caches results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_query: String,
    pub category: Option<String>,
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search_query: String::new(),
            category: None,
            current_page: 1,
            page_size,
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Selecting the empty "All time" option clears the category.
    pub fn select_category(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.category = if token.is_empty() { None } else { Some(token) };
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }

    /// Advances one page when another page of `total` results exists.
    pub fn next_page(&mut self, total: usize) -> bool {
        if self.current_page < self.page_count(total) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Pulls `current_page` back into `[1, max(1, page_count(total))]`.
    pub fn clamp(&mut self, total: usize) {
        let last_page = self.page_count(total).max(1);
        self.current_page = self.current_page.clamp(1, last_page);
    }

    pub fn evaluate<'a>(&self, jobs: &'a [JobPosting]) -> JobPage<'a> {
        JobQueryEngine::new(self.page_size).evaluate(
            jobs,
            &self.search_query,
            self.category.as_deref(),
            self.current_page,
        )
    }
}
