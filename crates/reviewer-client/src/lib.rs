//! HTTP client for the remote code-review service.
//!
//! [`ReviewClient`] submits an [`reviewer_models::AnalysisRequest`] to the
//! service's `POST /api/analyze` endpoint and returns the parsed findings.
//! A single attempt is made per call: no retries, no client-side timeout.
//! Transport failures, non-2xx statuses, and unparseable bodies are kept
//! apart in [`ClientError`] for diagnostics, but all of them render the same
//! user-facing message (see [`error::SERVICE_UNAVAILABLE_MESSAGE`]).

pub mod client;
pub mod config;
pub mod error;

pub use client::ReviewClient;
pub use config::{ClientConfig, API_URL_ENV, DEFAULT_API_URL};
pub use error::{ClientError, Result, SERVICE_UNAVAILABLE_MESSAGE};
