use hirehub::config::JobsConfig;
use hirehub::jobs::{CatalogError, InMemoryJobCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured catalog file, or the seeded demo postings when none is set.
pub(crate) fn load_catalog(config: &JobsConfig) -> Result<InMemoryJobCatalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => InMemoryJobCatalog::from_path(path),
        None => {
            let catalog = InMemoryJobCatalog::demo();
            info!(jobs = catalog.len(), "serving demo job catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn parse_positive(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(format!("'{raw}' is not a positive integer")),
    }
}
