//! Request and result payloads for the analysis endpoint.
//!
//! The request shape is ours; the result shape is owned by the remote
//! service. Every result field is defaulted so that a partial or evolved
//! payload parses instead of failing, and unknown fields are retained so
//! the raw response can still be shown for inspection.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Payload submitted to `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Source text to analyze.
    pub code: String,
    /// Declared language of the source.
    pub language: Language,
}

impl AnalysisRequest {
    /// Creates a request for the given source and language.
    pub fn new(code: impl Into<String>, language: Language) -> Self {
        Self {
            code: code.into(),
            language,
        }
    }
}

/// Severity of a reported issue, most severe first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must-fix problems (e.g. leaked credentials).
    Critical,
    /// Serious problems worth addressing soon.
    High,
    /// Moderate problems.
    Medium,
    /// Minor or stylistic problems.
    Low,
    /// Anything the service reports that this client does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Uppercase badge text (e.g. `CRITICAL`).
    pub fn badge(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

/// A single finding reported by the service.
///
/// Accepts the service's `type` / `line_number` spellings as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Issue {
    /// Issue category (security, style, performance, ...).
    #[serde(default, alias = "type")]
    pub category: String,

    /// How severe the service considers the issue.
    #[serde(default)]
    pub severity: Severity,

    /// Human-readable description.
    #[serde(default)]
    pub message: String,

    /// 1-based line in the submitted source, when the service located one.
    #[serde(default, alias = "line_number", skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,

    /// Suggested fix, when the service offered one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// Aggregate counts reported alongside the issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Metrics {
    /// Total number of issues found.
    #[serde(default)]
    pub total_issues: u64,
    /// Number of critical issues.
    #[serde(default)]
    pub critical: u64,
    /// Number of high-severity issues.
    #[serde(default)]
    pub high: u64,
    /// Number of medium-severity issues.
    #[serde(default)]
    pub medium: u64,
    /// Number of low-severity issues.
    #[serde(default)]
    pub low: u64,
}

/// Findings returned by the analysis service.
///
/// The schema is dictated by the service; absent fields default and
/// unrecognized fields are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisResult {
    /// Conversational summary of the findings.
    #[serde(default)]
    pub summary: String,

    /// Individual findings.
    #[serde(default)]
    pub issues: Vec<Issue>,

    /// Aggregate counts.
    #[serde(default)]
    pub metrics: Metrics,

    /// Fields this client does not model, preserved as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of the service's `GET /health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ServiceHealth {
    /// Reported status string.
    #[serde(default)]
    pub status: String,
}
