//! HireHub job portal: job search, category filtering, and pagination.
//!
//! The [`jobs`] module holds the query engine and its HTTP surface. Configuration, error
//! handling, and telemetry are shared with the `hirehub-api` service binary.

pub mod config;
pub mod error;
pub mod jobs;
pub mod telemetry;
