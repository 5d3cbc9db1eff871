//! TUI rendering using ratatui.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use reviewer_models::{Issue, Severity};
use reviewer_session::{ReportView, ViewModel};

use super::app::App;

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Results area
            Constraint::Length(6), // Activity log
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_results(frame, app, chunks[1]);
    draw_activity(frame, app, chunks[2]);
    draw_status(frame, app, chunks[3]);
    draw_footer(frame, app, chunks[4]);
}

/// Draw the header bar.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let source = app
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "no file".to_string());

    let header_text = format!(" Reviewer - {} [{}] ", source, app.language.label());

    let header = Paragraph::new(header_text).style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    frame.render_widget(header, area);
}

/// Draw the results area from the session's view model.
fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    match app.session.view() {
        ViewModel::Empty => draw_placeholder(frame, area),
        ViewModel::InProgress => draw_in_progress(frame, app, area),
        ViewModel::Error { message } => draw_error(frame, &message, area),
        ViewModel::Report(report) => {
            if app.show_raw {
                draw_raw(frame, app, &report, area);
            } else {
                draw_report(frame, app, &report, area);
            }
        }
    }
}

/// Empty state: nothing analyzed yet.
fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("Results will appear here after analysis"),
        Line::from(""),
        Line::from(Span::styled(
            "press 'a' to analyze",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let placeholder = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" Results "));
    frame.render_widget(placeholder, area);
}

/// Loading state: request in flight.
fn draw_in_progress(frame: &mut Frame, app: &App, area: Rect) {
    let elapsed = app.elapsed_secs().unwrap_or(0);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Analyzing your code...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}s elapsed (large submissions can take 30-60 seconds)", elapsed),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let progress = Paragraph::new(lines)
        .centered()
        .block(Block::default().borders(Borders::ALL).title(" Results "));
    frame.render_widget(progress, area);
}

/// Error state: literal message in a banner.
fn draw_error(frame: &mut Frame, message: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Error "),
    );
    frame.render_widget(banner, area);
}

/// Success state: metrics cards, summary, and the issue list.
fn draw_report(frame: &mut Frame, app: &App, report: &ReportView, area: Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Metrics cards
            Constraint::Length(4), // Summary
            Constraint::Min(3),    // Issues
        ])
        .split(area);

    draw_metrics_cards(frame, report, sections[0]);
    draw_summary(frame, report, sections[1]);
    draw_issues(frame, app, report, sections[2]);
}

/// One metric card per severity bucket, plus the total.
fn draw_metrics_cards(frame: &mut Frame, report: &ReportView, area: Rect) {
    let cards = [
        ("Total", report.total_issues, Color::Blue),
        ("Critical", report.critical, Color::Red),
        ("High", report.high, Color::LightRed),
        ("Medium", report.medium, Color::Yellow),
        ("Low", report.low, Color::Green),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for ((label, count, color), column) in cards.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                count.to_string(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*label, Style::default().fg(*color))),
        ])
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(*color)),
        );
        frame.render_widget(card, *column);
    }
}

/// The conversational summary, when the service produced one.
fn draw_summary(frame: &mut Frame, report: &ReportView, area: Rect) {
    let text = if report.summary.is_empty() {
        Line::from(Span::styled(
            "No summary provided",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(report.summary.clone())
    };

    let summary = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Summary "));
    frame.render_widget(summary, area);
}

/// The issue list, windowed by the scroll offset.
fn draw_issues(frame: &mut Frame, app: &App, report: &ReportView, area: Rect) {
    let inner_height = area.height.saturating_sub(2) as usize; // Account for borders

    let title = if app.scroll_offset > 0 {
        format!(" Issues Found [scroll: {}] ", app.scroll_offset)
    } else {
        " Issues Found ".to_string()
    };

    if report.issues.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No issues found",
            Style::default().fg(Color::Green),
        ))
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    let start_idx = app.scroll_offset.min(report.issues.len().saturating_sub(1));
    let end_idx = (start_idx + inner_height).min(report.issues.len());

    let items: Vec<ListItem> = report.issues[start_idx..end_idx]
        .iter()
        .map(issue_item)
        .collect();

    let issues = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(issues, area);
}

/// Render one issue as a list item: badge, category, location, message,
/// and an indented suggestion line when present.
fn issue_item(issue: &Issue) -> ListItem<'static> {
    let color = severity_color(issue.severity);

    let location = match issue.line {
        Some(line) => format!(" Line {}", line),
        None => String::new(),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("[{}]", issue.severity.badge()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}{}: ", issue.category, location),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(issue.message.clone()),
    ])];

    if let Some(suggestion) = &issue.suggestion {
        lines.push(Line::from(Span::styled(
            format!("    Suggestion: {}", suggestion),
            Style::default().fg(Color::DarkGray),
        )));
    }

    ListItem::new(lines)
}

/// Raw payload view for inspection.
fn draw_raw(frame: &mut Frame, app: &App, report: &ReportView, area: Rect) {
    let raw = Paragraph::new(report.raw.clone())
        .scroll((app.scroll_offset as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Raw Response "),
        );
    frame.render_widget(raw, area);
}

/// Draw the activity log.
fn draw_activity(frame: &mut Frame, app: &App, area: Rect) {
    let inner_height = area.height.saturating_sub(2) as usize;

    let start_idx = app.activity.len().saturating_sub(inner_height);
    let items: Vec<ListItem> = app.activity[start_idx..]
        .iter()
        .map(|entry| {
            let text = format!("[{}] {}", entry.timestamp.format("%H:%M:%S"), entry.text);
            ListItem::new(Line::from(Span::styled(
                text,
                Style::default().fg(Color::DarkGray),
            )))
        })
        .collect();

    let activity =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Activity "));
    frame.render_widget(activity, area);
}

/// Draw the status bar.
fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.session.view() {
        ViewModel::InProgress => (
            " Analyzing... ".to_string(),
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        ViewModel::Error { .. } => (
            " Failed ".to_string(),
            Style::default().bg(Color::Red).fg(Color::White),
        ),
        ViewModel::Report(report) => (
            format!(" Ready - {} issues ", report.total_issues),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ViewModel::Empty => (
            " Ready ".to_string(),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}

/// Draw the footer with keybindings.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = format!(
        " a: analyze | Tab: language ({}) | r: raw | l: reload | j/k: scroll | q: quit ",
        app.language.label()
    );
    let footer =
        Paragraph::new(keys).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(footer, area);
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::LightRed,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
        Severity::Unknown => Color::DarkGray,
    }
}
