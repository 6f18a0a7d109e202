//! Job postings and the query engine that filters and paginates them for the browse view.

pub mod catalog;
pub mod domain;
pub mod presets;
pub mod query;
pub mod router;
pub mod service;
pub mod state;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, InMemoryJobCatalog, JobSource};
pub use domain::{JobId, JobPosting};
pub use presets::PostingWindow;
pub use query::{
    evaluate, CategoryFilter, EmploymentAlias, FilterPredicate, JobPage, JobQueryEngine,
    DEFAULT_PAGE_SIZE,
};
pub use router::jobs_router;
pub use service::{JobSearchRequest, JobSearchResponse, JobSearchService};
pub use state::QueryState;
