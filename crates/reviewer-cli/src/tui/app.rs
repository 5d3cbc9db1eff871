//! TUI application state and logic.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use reviewer_client::{ClientConfig, ClientError, ReviewClient, SERVICE_UNAVAILABLE_MESSAGE};
use reviewer_models::{AnalysisResult, Language};
use reviewer_session::Session;

/// A timestamped entry in the activity log.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
    /// What happened.
    pub text: String,
}

impl ActivityEntry {
    fn new(text: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
        }
    }
}

/// TUI application state.
pub struct App {
    // Session state
    /// The one analysis session driving the results area.
    pub session: Session,
    /// Source file being reviewed, if any.
    pub source: Option<PathBuf>,
    /// Current source text.
    pub code: String,
    /// Declared language for the next analysis.
    pub language: Language,

    // UI state
    /// Activity log shown below the results.
    pub activity: Vec<ActivityEntry>,
    /// Scroll offset for the results area (lines from top).
    pub scroll_offset: usize,
    /// Whether the raw payload view is active.
    pub show_raw: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    // Runtime
    client: Arc<ReviewClient>,
    runtime: tokio::runtime::Runtime,
    /// Channel carrying the outcome of the in-flight request, if any.
    pending: Option<Receiver<Result<AnalysisResult, ClientError>>>,
    /// When the in-flight request was dispatched.
    started_at: Option<Instant>,
}

impl App {
    /// Create a new App instance.
    pub fn new(
        config: ClientConfig,
        source: Option<PathBuf>,
        language: Language,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;

        let mut app = Self {
            session: Session::new(),
            source,
            code: String::new(),
            language,

            activity: Vec::new(),
            scroll_offset: 0,
            show_raw: false,
            should_quit: false,

            client: Arc::new(ReviewClient::new(config)),
            runtime,
            pending: None,
            started_at: None,
        };

        app.push_activity(format!(
            "Connected to {}",
            app.client.config().base_url
        ));
        if app.source.is_some() {
            app.reload_source();
        } else {
            app.push_activity("No source file; open one with: reviewer tui <file>");
        }
        app.push_activity("Press 'a' to analyze, 'q' to quit");

        Ok(app)
    }

    /// Append an entry to the activity log.
    pub fn push_activity(&mut self, text: impl Into<String>) {
        self.activity.push(ActivityEntry::new(text));
    }

    /// Re-read the source file into the buffer.
    ///
    /// A vanished or unreadable file normalizes to an empty buffer, which
    /// validation then rejects with its usual message.
    pub fn reload_source(&mut self) {
        let Some(path) = self.source.clone() else {
            return;
        };
        match std::fs::read_to_string(&path) {
            Ok(code) => {
                let lines = code.split('\n').count();
                self.code = code;
                self.push_activity(format!("Loaded {} ({} lines)", path.display(), lines));
            }
            Err(e) => {
                self.code = String::new();
                self.push_activity(format!("Failed to read {}: {}", path.display(), e));
            }
        }
    }

    /// Handle the analyze trigger.
    ///
    /// Re-reads the source, asks the session for a request, and dispatches
    /// it on the runtime. While a request is in flight this is a no-op (the
    /// machine ignores the trigger; the log notes it).
    pub fn request_analysis(&mut self) {
        if self.session.state().is_loading() {
            self.push_activity("Analysis already running");
            return;
        }

        self.reload_source();

        let Some(request) = self.session.analyze_requested(&self.code, self.language) else {
            // Validation rejected the input; the results area shows why.
            return;
        };

        let lines = request.code.split('\n').count();
        self.push_activity(format!(
            "Analyzing {} lines of {}...",
            lines,
            self.language.label()
        ));

        let (tx, rx) = mpsc::channel();
        let client = Arc::clone(&self.client);
        self.runtime.spawn(async move {
            let _ = tx.send(client.analyze(&request).await);
        });

        self.pending = Some(rx);
        self.started_at = Some(Instant::now());
        self.scroll_offset = 0;
    }

    /// Poll the in-flight request and settle the session when it finishes.
    ///
    /// Called once per event-loop tick; does nothing when no request is in
    /// flight.
    pub fn poll_settle(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        match rx.try_recv() {
            Ok(outcome) => {
                let note = match &outcome {
                    Ok(result) => format!(
                        "Analysis complete: {} issues",
                        result.metrics.total_issues
                    ),
                    Err(e) => format!("Analysis failed: {}", e),
                };
                self.session.settle(outcome);
                self.push_activity(note);
                self.pending = None;
                self.started_at = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // The transport task vanished without reporting; clear the
                // loading state so the UI is never stuck.
                self.session.fail_service(SERVICE_UNAVAILABLE_MESSAGE);
                self.push_activity("Analysis task dropped");
                self.pending = None;
                self.started_at = None;
            }
        }
    }

    /// Seconds since the in-flight request was dispatched.
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.started_at.map(|t| t.elapsed().as_secs())
    }

    /// Select the next language.
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
    }

    /// Toggle between the report view and the raw payload view.
    pub fn toggle_raw(&mut self) {
        self.show_raw = !self.show_raw;
        self.scroll_offset = 0;
    }

    /// Scroll the results area up.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll the results area down.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }
}
