use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::jobs::catalog::{CatalogError, InMemoryJobCatalog, JobSource};
use crate::jobs::domain::{JobId, JobPosting};
use crate::jobs::query::JobQueryEngine;
use crate::jobs::service::JobSearchService;

pub(super) fn posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: JobId(id.to_string()),
        title: title.to_string(),
        ..JobPosting::default()
    }
}

pub(super) fn backend_engineer() -> JobPosting {
    JobPosting {
        location: "Mumbai".to_string(),
        min_salary: "50000".to_string(),
        max_salary: "70000".to_string(),
        salary_type: "Yearly".to_string(),
        employment_type: "Full-time".to_string(),
        ..posting("job-1", "Backend Engineer")
    }
}

pub(super) fn frontend_dev() -> JobPosting {
    JobPosting {
        location: "Remote".to_string(),
        min_salary: "40000".to_string(),
        max_salary: "60000".to_string(),
        employment_type: "Part-time".to_string(),
        ..posting("job-2", "Frontend Dev")
    }
}

/// The two-posting collection used by the reference scenarios.
pub(super) fn scenario_jobs() -> Vec<JobPosting> {
    vec![backend_engineer(), frontend_dev()]
}

/// Sequentially titled postings for pagination tests.
pub(super) fn numbered_jobs(count: usize) -> Vec<JobPosting> {
    (1..=count)
        .map(|n| posting(&format!("job-{n}"), &format!("Engineer {n}")))
        .collect()
}

pub(super) fn titles(jobs: &[&JobPosting]) -> Vec<String> {
    jobs.iter().map(|job| job.title.clone()).collect()
}

pub(super) fn search_service(jobs: Vec<JobPosting>) -> Arc<JobSearchService<InMemoryJobCatalog>> {
    Arc::new(JobSearchService::new(
        Arc::new(InMemoryJobCatalog::new(jobs)),
        JobQueryEngine::default(),
    ))
}

/// Source that counts fetches so tests can check the engine never caches.
#[derive(Default)]
pub(super) struct CountingSource {
    pub(super) fetches: AtomicUsize,
    pub(super) jobs: Vec<JobPosting>,
}

impl JobSource for CountingSource {
    fn all_jobs(&self) -> Result<Arc<[JobPosting]>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.jobs.clone().into())
    }
}

pub(super) struct UnavailableSource;

impl JobSource for UnavailableSource {
    fn all_jobs(&self) -> Result<Arc<[JobPosting]>, CatalogError> {
        Err(CatalogError::Unavailable("listing endpoint timed out".to_string()))
    }
}

pub(super) struct BrokenSource;

impl JobSource for BrokenSource {
    fn all_jobs(&self) -> Result<Arc<[JobPosting]>, CatalogError> {
        Err(CatalogError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "jobs.json missing",
        )))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
