//! Command handlers for CLI subcommands.

use std::io::Read;
use std::path::Path;

use reviewer_client::{ClientConfig, ReviewClient};
use reviewer_session::{present, ReportView, Session, ViewModel};
use tracing::info;

use crate::cli::{Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(command: Commands, config: ClientConfig) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            language,
            format,
        } => cmd_analyze(config, file.as_deref(), language, format),
        Commands::Health => cmd_health(config),
        Commands::Tui { .. } => {
            // TUI is handled separately in main
            Ok(())
        }
    }
}

fn cmd_analyze(
    config: ClientConfig,
    file: Option<&Path>,
    language: reviewer_models::Language,
    format: OutputFormat,
) -> Result<()> {
    let code = read_source(file)?;

    info!(
        language = %language,
        bytes = code.len(),
        "analyzing source"
    );

    let client = ReviewClient::new(config);
    let runtime = tokio::runtime::Runtime::new()?;

    let mut session = Session::new();
    runtime.block_on(session.run(&client, &code, language));

    match present(session.state()) {
        ViewModel::Report(report) => {
            match format {
                OutputFormat::Text => print!("{}", render_text_report(&report)),
                OutputFormat::Json => println!("{}", report.raw),
            }
            Ok(())
        }
        ViewModel::Error { message } => Err(message.into()),
        // A one-shot run always settles; nothing else is reachable.
        ViewModel::Empty | ViewModel::InProgress => Err("analysis did not settle".into()),
    }
}

fn cmd_health(config: ClientConfig) -> Result<()> {
    let client = ReviewClient::new(config);
    let runtime = tokio::runtime::Runtime::new()?;

    let health = runtime.block_on(client.health())?;
    println!("Service status: {}", health.status);
    Ok(())
}

/// Reads the source to analyze from a file, or stdin when no file is given.
fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            let code = std::fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            Ok(code)
        }
        None => {
            let mut code = String::new();
            std::io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}

/// Renders the findings as the plain-text report.
fn render_text_report(report: &ReportView) -> String {
    let mut out = String::new();

    out.push_str("Metrics Overview\n");
    out.push_str(&format!(
        "  Total issues: {}  Critical: {}  High: {}  Medium: {}  Low: {}\n",
        report.total_issues, report.critical, report.high, report.medium, report.low
    ));

    if !report.summary.is_empty() {
        out.push_str("\nSummary\n");
        for line in report.summary.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out.push_str("\nIssues Found\n");
    if report.issues.is_empty() {
        out.push_str("  No issues found.\n");
    }
    for issue in &report.issues {
        let location = match issue.line {
            Some(line) => format!(" (line {})", line),
            None => String::new(),
        };
        out.push_str(&format!(
            "  [{}] {}{}: {}\n",
            issue.severity.badge(),
            issue.category,
            location,
            issue.message
        ));
        if let Some(suggestion) = &issue.suggestion {
            out.push_str(&format!("      Suggestion: {}\n", suggestion));
        }
    }

    out
}
