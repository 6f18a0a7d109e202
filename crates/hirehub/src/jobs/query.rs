//! Text search, category filtering, and pagination over an in-memory job collection.
//!
//! A category token is opaque: the same radio group may carry a location, a salary ceiling, a
//! posted-after date, or an employment type. [`FilterPredicate::classify`] inspects the token once
//! and records every facet it could stand for. A posting is kept when any facet matches.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use super::domain::{parse_leading_integer, parse_posting_date, JobPosting};

/// Number of postings shown per page in the browse view.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Substring aliases accepted for common employment-type filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentAlias {
    FullTime,
    PartTime,
    Temporary,
}

impl EmploymentAlias {
    fn from_token(lowered: &str) -> Option<Self> {
        match lowered {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "temporary" => Some(Self::Temporary),
            _ => None,
        }
    }

    /// Fragment an employment type must contain to satisfy the alias.
    pub const fn fragment(self) -> &'static str {
        match self {
            EmploymentAlias::FullTime => "full",
            EmploymentAlias::PartTime => "part",
            EmploymentAlias::Temporary => "temp",
        }
    }
}

/// Facets a non-empty category token can match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    token: String,
    lowered: String,
    salary_ceiling: Option<i64>,
    posted_since: Option<NaiveDateTime>,
    alias: Option<EmploymentAlias>,
}

impl CategoryFilter {
    fn new(token: &str) -> Self {
        let lowered = token.to_lowercase();
        let salary_ceiling = numeric_ceiling(token);
        let posted_since = if token.contains('-') {
            parse_posting_date(token)
        } else {
            None
        };
        let alias = EmploymentAlias::from_token(&lowered);

        Self {
            token: token.to_string(),
            lowered,
            salary_ceiling,
            posted_since,
            alias,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn salary_ceiling(&self) -> Option<i64> {
        self.salary_ceiling
    }

    pub fn posted_since(&self) -> Option<NaiveDateTime> {
        self.posted_since
    }

    pub fn alias(&self) -> Option<EmploymentAlias> {
        self.alias
    }

    /// Returns true when any facet of the token matches the posting.
    ///
    /// The salary facet is an "at or under" ceiling on either bound, so a posting whose minimum
    /// is under the ceiling matches even when its maximum is far above it.
    pub fn matches(&self, job: &JobPosting) -> bool {
        if self.equals_field(&job.location) {
            return true;
        }

        if let Some(ceiling) = self.salary_ceiling {
            if job.max_salary_value() <= ceiling || job.min_salary_value() <= ceiling {
                return true;
            }
        }

        if let Some(since) = self.posted_since {
            if job.posted_at().is_some_and(|posted| posted >= since) {
                return true;
            }
        }

        if self.equals_field(&job.salary_type)
            || self.equals_field(&job.experience_level)
            || self.equals_field(&job.employment_type)
        {
            return true;
        }

        match self.alias {
            Some(alias) => job
                .employment_type
                .to_lowercase()
                .contains(alias.fragment()),
            None => false,
        }
    }

    fn equals_field(&self, field: &str) -> bool {
        !field.is_empty() && field.to_lowercase() == self.lowered
    }
}

/// A token counts as numeric when the whole trimmed text reads as a finite number (`"60000"`,
/// `"50.5"`, `"1e3"`). The ceiling is its leading integer, so `"50.5"` caps at 50 and `"1e3"`
/// at 1.
fn numeric_ceiling(token: &str) -> Option<i64> {
    let trimmed = token.trim();
    if !trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
        return None;
    }
    parse_leading_integer(trimmed)
}

/// Classified form of the category token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPredicate {
    /// Empty or `all`: every posting passes.
    Unfiltered,
    Category(CategoryFilter),
}

impl FilterPredicate {
    pub fn classify(token: Option<&str>) -> Self {
        match token {
            None => Self::Unfiltered,
            Some(raw) if raw.is_empty() || raw.eq_ignore_ascii_case("all") => Self::Unfiltered,
            Some(raw) => Self::Category(CategoryFilter::new(raw)),
        }
    }

    pub fn matches(&self, job: &JobPosting) -> bool {
        match self {
            FilterPredicate::Unfiltered => true,
            FilterPredicate::Category(filter) => filter.matches(job),
        }
    }
}

/// One page of matching postings plus the count needed to render pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPage<'a> {
    pub jobs: Vec<&'a JobPosting>,
    /// Matching postings before slicing.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl JobPage<'_> {
    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

pub(crate) fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Stateless engine holding the page size used by the browse view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobQueryEngine {
    page_size: usize,
}

impl Default for JobQueryEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl JobQueryEngine {
    pub const fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Postings whose title contains the query and that pass the category token, in input order.
    pub fn matching<'a>(
        &self,
        jobs: &'a [JobPosting],
        search_query: &str,
        category: Option<&str>,
    ) -> Vec<&'a JobPosting> {
        let needle = search_query.to_lowercase();
        let predicate = FilterPredicate::classify(category);

        let matched: Vec<&JobPosting> = jobs
            .iter()
            .filter(|job| needle.is_empty() || job.title.to_lowercase().contains(&needle))
            .filter(|job| predicate.matches(job))
            .collect();

        debug!(
            candidates = jobs.len(),
            matched = matched.len(),
            query = search_query,
            category = category.unwrap_or_default(),
            "filtered job postings"
        );

        matched
    }

    /// Filters and slices `jobs` for the 1-based `current_page`.
    ///
    /// Pages past the end, page 0, and a zero page size all produce an empty page; `total` always
    /// reports the full match count.
    pub fn evaluate<'a>(
        &self,
        jobs: &'a [JobPosting],
        search_query: &str,
        category: Option<&str>,
        current_page: usize,
    ) -> JobPage<'a> {
        let matched = self.matching(jobs, search_query, category);
        let total = matched.len();

        let page_jobs = match current_page.checked_sub(1) {
            Some(offset) if self.page_size > 0 => {
                let start = offset.saturating_mul(self.page_size);
                matched
                    .into_iter()
                    .skip(start)
                    .take(self.page_size)
                    .collect()
            }
            _ => Vec::new(),
        };

        JobPage {
            jobs: page_jobs,
            total,
            page: current_page,
            page_size: self.page_size,
        }
    }
}

/// Convenience wrapper over [`JobQueryEngine::evaluate`] taking the page size per call.
pub fn evaluate<'a>(
    jobs: &'a [JobPosting],
    search_query: &str,
    category: Option<&str>,
    current_page: usize,
    page_size: usize,
) -> JobPage<'a> {
    JobQueryEngine::new(page_size).evaluate(jobs, search_query, category, current_page)
}
