//! The analysis session state machine.

use reviewer_client::{ClientError, ReviewClient};
use reviewer_models::{AnalysisRequest, AnalysisResult, Language};
use thiserror::Error;
use tracing::{debug, warn};

use crate::validate::{validate, ValidationOutcome};

/// Why a session ended up in [`SessionState::Failed`].
///
/// Both kinds render their literal user-facing message; keeping them apart
/// lets callers (and future diagnostics) tell a local rejection from a
/// service failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionFailure {
    /// The input was rejected locally; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The analysis service call failed.
    #[error("{0}")]
    Service(String),
}

impl SessionFailure {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            SessionFailure::Validation(message) | SessionFailure::Service(message) => message,
        }
    }
}

/// State of an analysis session.
///
/// Exactly one variant is active at any time. `Succeeded` and `Failed` are
/// "last outcome" states, not terminal: the next analyze action re-enters
/// `Loading` and discards them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No analysis has been requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last analysis completed with findings.
    Succeeded(AnalysisResult),
    /// The last analysis was rejected locally or failed remotely.
    Failed(SessionFailure),
}

impl SessionState {
    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }
}

/// Owns the single [`SessionState`] and sequences validation, dispatch, and
/// settlement.
///
/// The machine performs no IO. [`Session::analyze_requested`] validates and,
/// on acceptance, returns the request for the caller to dispatch; the caller
/// reports the outcome through [`Session::settle`]. At most one request is
/// in flight: triggers while `Loading` are ignored.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Creates a session in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handles an analyze trigger.
    ///
    /// Returns the request to dispatch when the input was accepted. Returns
    /// `None` when a request is already in flight (state unchanged) or when
    /// validation rejected the input (state moves to `Failed` with the
    /// literal message, and nothing must be sent).
    pub fn analyze_requested(
        &mut self,
        code: &str,
        language: Language,
    ) -> Option<AnalysisRequest> {
        if self.state.is_loading() {
            debug!("analysis already in flight, ignoring trigger");
            return None;
        }

        match validate(code) {
            ValidationOutcome::Rejected(message) => {
                debug!("input rejected: {}", message);
                self.state = SessionState::Failed(SessionFailure::Validation(message));
                None
            }
            ValidationOutcome::Accepted => {
                self.state = SessionState::Loading;
                Some(AnalysisRequest::new(code, language))
            }
        }
    }

    /// Reports the outcome of the dispatched request.
    ///
    /// Moves `Loading` to `Succeeded` or `Failed`. A settle without an
    /// in-flight request is ignored.
    pub fn settle(&mut self, outcome: Result<AnalysisResult, ClientError>) {
        match outcome {
            Ok(result) => {
                if !self.state.is_loading() {
                    warn!("settle without an in-flight analysis, ignoring");
                    return;
                }
                debug!(
                    "analysis succeeded: {} issues",
                    result.metrics.total_issues
                );
                self.state = SessionState::Succeeded(result);
            }
            Err(err) => {
                warn!("analysis failed: {}", err);
                self.fail_service(err.user_message());
            }
        }
    }

    /// Moves an in-flight analysis to `Failed` with the given message.
    ///
    /// This is the guarantee that `Loading` clears on every exit path: it
    /// also covers the case where the transport task vanished without
    /// reporting an outcome. Ignored when no request is in flight.
    pub fn fail_service(&mut self, message: impl Into<String>) {
        if !self.state.is_loading() {
            warn!("service failure without an in-flight analysis, ignoring");
            return;
        }
        self.state = SessionState::Failed(SessionFailure::Service(message.into()));
    }

    /// Runs one full analyze action: validate, dispatch, settle.
    ///
    /// Convenience driver for one-shot callers that do not need to observe
    /// the `Loading` state from another thread.
    pub async fn run(&mut self, client: &ReviewClient, code: &str, language: Language) {
        if let Some(request) = self.analyze_requested(code, language) {
            let outcome = client.analyze(&request).await;
            self.settle(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewer_models::Metrics;

    fn service_error() -> ClientError {
        serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into()
    }

    fn result_with_total(total_issues: u64) -> AnalysisResult {
        AnalysisResult {
            metrics: Metrics {
                total_issues,
                ..Metrics::default()
            },
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn test_starts_idle() {
        let session = Session::new();
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_empty_input_fails_without_dispatch() {
        let mut session = Session::new();
        let request = session.analyze_requested("", Language::Python);
        assert!(request.is_none());
        assert_eq!(
            *session.state(),
            SessionState::Failed(SessionFailure::Validation(
                "Please enter some code to analyze".to_string()
            ))
        );
    }

    #[test]
    fn test_oversized_input_reports_line_count() {
        let mut session = Session::new();
        let code = vec!["x"; 2001].join("\n");
        let request = session.analyze_requested(&code, Language::Python);
        assert!(request.is_none());
        assert_eq!(
            *session.state(),
            SessionState::Failed(SessionFailure::Validation(
                "Code has 2001 lines. Maximum is 2000 lines.".to_string()
            ))
        );
    }

    #[test]
    fn test_accepted_input_enters_loading() {
        let mut session = Session::new();
        let request = session.analyze_requested("print(1)", Language::Python);
        assert_eq!(
            request,
            Some(AnalysisRequest::new("print(1)", Language::Python))
        );
        assert!(session.state().is_loading());
    }

    #[test]
    fn test_trigger_while_loading_is_a_no_op() {
        let mut session = Session::new();
        assert!(session
            .analyze_requested("print(1)", Language::Python)
            .is_some());

        // Second rapid trigger: nothing dispatched, state unchanged.
        assert!(session
            .analyze_requested("print(2)", Language::Python)
            .is_none());
        assert!(session.state().is_loading());
    }

    #[test]
    fn test_settle_success() {
        let mut session = Session::new();
        session.analyze_requested("print(1)", Language::Python);
        session.settle(Ok(result_with_total(0)));
        assert_eq!(
            *session.state(),
            SessionState::Succeeded(result_with_total(0))
        );
    }

    #[test]
    fn test_settle_failure_uses_user_message() {
        let mut session = Session::new();
        session.analyze_requested("print(1)", Language::Python);
        session.settle(Err(service_error()));
        assert_eq!(
            *session.state(),
            SessionState::Failed(SessionFailure::Service(
                "Failed to analyze code. Make sure the backend is running.".to_string()
            ))
        );
    }

    #[test]
    fn test_settle_without_loading_is_ignored() {
        let mut session = Session::new();
        session.settle(Ok(result_with_total(3)));
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_reanalyze_discards_previous_outcome() {
        let mut session = Session::new();
        session.analyze_requested("print(1)", Language::Python);
        session.settle(Err(service_error()));

        // A new trigger clears the previous failure and re-enters Loading.
        assert!(session
            .analyze_requested("print(2)", Language::Python)
            .is_some());
        assert!(session.state().is_loading());

        session.settle(Ok(result_with_total(2)));
        assert_eq!(
            *session.state(),
            SessionState::Succeeded(result_with_total(2))
        );
    }

    #[test]
    fn test_validation_failure_overwrites_previous_success() {
        let mut session = Session::new();
        session.analyze_requested("print(1)", Language::Python);
        session.settle(Ok(result_with_total(1)));

        session.analyze_requested("", Language::Python);
        assert!(matches!(
            session.state(),
            SessionState::Failed(SessionFailure::Validation(_))
        ));
    }

    #[test]
    fn test_fail_service_clears_loading() {
        let mut session = Session::new();
        session.analyze_requested("print(1)", Language::Python);
        session.fail_service("Failed to analyze code. Make sure the backend is running.");
        assert!(matches!(
            session.state(),
            SessionState::Failed(SessionFailure::Service(_))
        ));
    }

    #[test]
    fn test_failure_kinds_stay_distinguishable() {
        let validation = SessionFailure::Validation("Please enter some code to analyze".into());
        let service =
            SessionFailure::Service("Failed to analyze code. Make sure the backend is running.".into());
        assert_ne!(validation, service);
        assert_eq!(validation.message(), validation.to_string());
        assert_eq!(service.message(), service.to_string());
    }
}
