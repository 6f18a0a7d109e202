use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::error;

use super::catalog::{CatalogError, JobSource};
use super::service::{JobSearchRequest, JobSearchService};
use crate::error::AppError;

/// Router builder exposing the job search endpoint.
pub fn jobs_router<S>(service: Arc<JobSearchService<S>>) -> Router
where
    S: JobSource + 'static,
{
    Router::new()
        .route("/api/v1/jobs/search", get(search_handler::<S>))
        .with_state(service)
}

pub(crate) async fn search_handler<S>(
    State(service): State<Arc<JobSearchService<S>>>,
    Query(request): Query<JobSearchRequest>,
) -> Result<Response, AppError>
where
    S: JobSource + 'static,
{
    if request.page_size == Some(0) {
        let payload = json!({
            "error": "page_size must be a positive integer",
        });
        return Ok((StatusCode::BAD_REQUEST, axum::Json(payload)).into_response());
    }

    let results = service.search(&request).map_err(|err| {
        if !matches!(err, CatalogError::Unavailable(_)) {
            error!(error = %err, "job search failed");
        }
        AppError::from(err)
    })?;

    Ok((StatusCode::OK, axum::Json(results)).into_response())
}
