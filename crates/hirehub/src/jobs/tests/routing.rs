use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::jobs::query::JobQueryEngine;
use crate::jobs::router::{jobs_router, search_handler};
use crate::jobs::service::{JobSearchRequest, JobSearchService};

#[tokio::test]
async fn search_handler_returns_page_and_counts() {
    let service = search_service(scenario_jobs());

    let response = search_handler(
        State(service),
        Query(JobSearchRequest {
            category: Some("60000".to_string()),
            ..JobSearchRequest::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total").and_then(Value::as_u64), Some(2));
    assert_eq!(payload.get("page").and_then(Value::as_u64), Some(1));
    assert_eq!(payload.get("page_size").and_then(Value::as_u64), Some(6));
    assert_eq!(payload.get("page_count").and_then(Value::as_u64), Some(1));
    let titles: Vec<&str> = payload["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .filter_map(|job| job.get("jobTitle").and_then(Value::as_str))
        .collect();
    assert_eq!(titles, vec!["Backend Engineer", "Frontend Dev"]);
}

#[tokio::test]
async fn search_handler_rejects_zero_page_size() {
    let service = search_service(scenario_jobs());

    let response = search_handler(
        State(service),
        Query(JobSearchRequest {
            page_size: Some(0),
            ..JobSearchRequest::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_handler_reports_unavailable_source() {
    let service = Arc::new(JobSearchService::new(
        Arc::new(UnavailableSource),
        JobQueryEngine::default(),
    ));

    let response = search_handler(State(service), Query(JobSearchRequest::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let payload = read_json_body(response).await;
    let message = payload["error"].as_str().unwrap_or_default();
    assert!(message.starts_with("job catalog error:"), "rendered by AppError: {message}");
    assert!(message.contains("timed out"));
}

#[tokio::test]
async fn search_handler_returns_internal_error_on_catalog_failure() {
    let service = Arc::new(JobSearchService::new(
        Arc::new(BrokenSource),
        JobQueryEngine::default(),
    ));

    let response = search_handler(State(service), Query(JobSearchRequest::default()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn search_route_parses_query_string() {
    let router = jobs_router(search_service(numbered_jobs(9)));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/jobs/search?q=Engineer&page=2&page_size=4")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 9);
    assert_eq!(payload["page_count"], 3);
    let ids: Vec<&str> = payload["jobs"]
        .as_array()
        .expect("jobs array")
        .iter()
        .filter_map(|job| job["_id"].as_str())
        .collect();
    assert_eq!(ids, vec!["job-5", "job-6", "job-7", "job-8"]);
}

#[tokio::test]
async fn search_route_returns_empty_page_past_the_end() {
    let router = jobs_router(search_service(scenario_jobs()));

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/jobs/search?category=Mumbai&page=5")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["jobs"], Value::Array(Vec::new()));
}

#[test]
fn every_search_fetches_a_fresh_collection() {
    let source = Arc::new(CountingSource {
        jobs: scenario_jobs(),
        ..CountingSource::default()
    });
    let service = JobSearchService::new(source.clone(), JobQueryEngine::default());

    let request = JobSearchRequest {
        q: "dev".to_string(),
        ..JobSearchRequest::default()
    };
    let first = service.search(&request).expect("search succeeds");
    let second = service.search(&request).expect("search succeeds");

    assert_eq!(first, second);
    assert_eq!(first.total, 1);
    assert_eq!(source.fetches.load(Ordering::Relaxed), 2);
}
