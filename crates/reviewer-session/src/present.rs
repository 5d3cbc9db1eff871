//! Derives a display-ready view from the session state.

use reviewer_models::{AnalysisResult, Issue};

use crate::session::{Session, SessionState};

/// Display-ready projection of a [`SessionState`].
///
/// Rendering layers (TUI, one-shot text, JSON) consume this instead of the
/// raw state so that every field access on the service payload happens here,
/// defensively, in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    /// Nothing analyzed yet; show the placeholder.
    Empty,
    /// Request in flight; show the progress indicator, no partial results.
    InProgress,
    /// Show an error banner with the literal message.
    Error {
        /// User-facing message text.
        message: String,
    },
    /// Show the findings.
    Report(ReportView),
}

/// The findings of a completed analysis, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    /// Total issue count (0 when the service omitted it).
    pub total_issues: u64,
    /// Critical issue count.
    pub critical: u64,
    /// High-severity issue count.
    pub high: u64,
    /// Medium-severity issue count.
    pub medium: u64,
    /// Low-severity issue count.
    pub low: u64,
    /// Conversational summary (may be empty).
    pub summary: String,
    /// Issues sorted most-severe first.
    pub issues: Vec<Issue>,
    /// Pretty-printed payload for inspection.
    pub raw: String,
}

impl ReportView {
    fn from_result(result: &AnalysisResult) -> Self {
        let mut issues = result.issues.clone();
        issues.sort_by_key(|issue| issue.severity);

        let raw = serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string());

        Self {
            total_issues: result.metrics.total_issues,
            critical: result.metrics.critical,
            high: result.metrics.high,
            medium: result.metrics.medium,
            low: result.metrics.low,
            summary: result.summary.clone(),
            issues,
            raw,
        }
    }
}

/// Maps the current state to its view model.
///
/// Pure and idempotent: the same state always yields the same view.
pub fn present(state: &SessionState) -> ViewModel {
    match state {
        SessionState::Idle => ViewModel::Empty,
        SessionState::Loading => ViewModel::InProgress,
        SessionState::Failed(failure) => ViewModel::Error {
            message: failure.message().to_string(),
        },
        SessionState::Succeeded(result) => ViewModel::Report(ReportView::from_result(result)),
    }
}

impl Session {
    /// Shorthand for [`present`] on the current state.
    pub fn view(&self) -> ViewModel {
        present(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionFailure;
    use reviewer_models::Severity;
    use serde_json::json;

    fn succeeded(payload: serde_json::Value) -> SessionState {
        SessionState::Succeeded(serde_json::from_value(payload).unwrap())
    }

    #[test]
    fn test_idle_presents_empty() {
        assert_eq!(present(&SessionState::Idle), ViewModel::Empty);
    }

    #[test]
    fn test_present_is_idempotent() {
        let first = present(&SessionState::Idle);
        let second = present(&SessionState::Idle);
        assert_eq!(first, second);
    }

    #[test]
    fn test_loading_presents_in_progress() {
        assert_eq!(present(&SessionState::Loading), ViewModel::InProgress);
    }

    #[test]
    fn test_failed_presents_literal_message() {
        let state = SessionState::Failed(SessionFailure::Service(
            "Failed to analyze code. Make sure the backend is running.".to_string(),
        ));
        assert_eq!(
            present(&state),
            ViewModel::Error {
                message: "Failed to analyze code. Make sure the backend is running.".to_string()
            }
        );
    }

    #[test]
    fn test_metrics_only_payload_presents_without_issues() {
        let state = succeeded(json!({"metrics": {"total_issues": 5}}));
        match present(&state) {
            ViewModel::Report(report) => {
                assert_eq!(report.total_issues, 5);
                assert!(report.issues.is_empty());
                assert_eq!(report.critical, 0);
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_metrics_default_to_zero() {
        let state = succeeded(json!({"summary": "looks fine"}));
        match present(&state) {
            ViewModel::Report(report) => {
                assert_eq!(report.total_issues, 0);
                assert_eq!(report.summary, "looks fine");
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_issues_sorted_most_severe_first() {
        let state = succeeded(json!({
            "issues": [
                {"type": "style", "severity": "low", "message": "long line"},
                {"type": "security", "severity": "critical", "message": "leaked key"},
                {"type": "performance", "severity": "medium", "message": "n+1 query"}
            ]
        }));
        match present(&state) {
            ViewModel::Report(report) => {
                let severities: Vec<Severity> =
                    report.issues.iter().map(|i| i.severity).collect();
                assert_eq!(
                    severities,
                    vec![Severity::Critical, Severity::Medium, Severity::Low]
                );
            }
            other => panic!("expected report, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_rendering_keeps_unmodeled_fields() {
        let state = succeeded(json!({"model_version": "2024-06"}));
        match present(&state) {
            ViewModel::Report(report) => {
                assert!(report.raw.contains("model_version"));
            }
            other => panic!("expected report, got {:?}", other),
        }
    }
}
