use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::catalog::{CatalogError, JobSource};
use super::domain::JobPosting;
use super::query::JobQueryEngine;

/// Query-string parameters accepted by the job search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSearchRequest {
    pub q: String,
    pub category: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// One page of search results with the counts needed for pagination controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

/// Service pairing a job source with the query engine.
pub struct JobSearchService<S> {
    source: Arc<S>,
    engine: JobQueryEngine,
}

impl<S> JobSearchService<S>
where
    S: JobSource + 'static,
{
    pub fn new(source: Arc<S>, engine: JobQueryEngine) -> Self {
        Self { source, engine }
    }

    pub fn engine(&self) -> JobQueryEngine {
        self.engine
    }

    /// Fetches the current collection and evaluates the request against it.
    ///
    /// Missing `page` means page 1 and missing `page_size` falls back to the engine default.
    pub fn search(&self, request: &JobSearchRequest) -> Result<JobSearchResponse, CatalogError> {
        let jobs = self.source.all_jobs()?;
        let engine = request
            .page_size
            .map(JobQueryEngine::new)
            .unwrap_or(self.engine);

        let page = engine.evaluate(
            &jobs,
            &request.q,
            request.category.as_deref(),
            request.page.unwrap_or(1),
        );
        let page_count = page.page_count();

        Ok(JobSearchResponse {
            jobs: page.jobs.into_iter().cloned().collect(),
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            page_count,
        })
    }
}
