//! Local input validation, run before any network call.

/// Maximum number of lines accepted for analysis.
pub const MAX_LINES: usize = 2000;

/// Message shown when the submitted code is empty.
pub const EMPTY_CODE_MESSAGE: &str = "Please enter some code to analyze";

/// Outcome of validating a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The snippet may be submitted.
    Accepted,
    /// The snippet must not be submitted; the message is user-facing.
    Rejected(String),
}

impl ValidationOutcome {
    /// Whether the snippet was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted)
    }
}

/// Validates a snippet against the emptiness and size rules.
///
/// Line count is the number of `\n`-delimited segments in the raw text;
/// emptiness is judged on the trimmed text.
pub fn validate(code: &str) -> ValidationOutcome {
    if code.trim().is_empty() {
        return ValidationOutcome::Rejected(EMPTY_CODE_MESSAGE.to_string());
    }

    let lines = code.split('\n').count();
    if lines > MAX_LINES {
        return ValidationOutcome::Rejected(format!(
            "Code has {} lines. Maximum is {} lines.",
            lines, MAX_LINES
        ));
    }

    ValidationOutcome::Accepted
}
