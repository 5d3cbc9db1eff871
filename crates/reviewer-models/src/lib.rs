//! Core data models for the Reviewer analysis client.
//!
//! This crate defines the types exchanged with the remote code-review
//! service and shared by every other crate in the workspace:
//!
//! - [`Language`]: the supported language identifiers
//! - [`AnalysisRequest`]: the payload submitted for analysis
//! - [`AnalysisResult`]: the findings the service returns
//! - [`Issue`], [`Severity`], [`Metrics`]: the pieces of a result
//! - [`ServiceHealth`]: the health-check body
//!
//! The result types deliberately treat every field as optional: the response
//! schema is owned by the remote service and may gain or lose fields, so
//! parsing defaults anything absent instead of failing.

pub mod analysis;
pub mod language;

pub use analysis::{AnalysisRequest, AnalysisResult, Issue, Metrics, ServiceHealth, Severity};
pub use language::{Language, UnsupportedLanguage};
