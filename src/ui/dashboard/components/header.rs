//! Dashboard header component
//!
//! Renders the title line and the connection summary with the readiness
//! indicator.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header: title with version, then environment, uptime, and a
/// colored readiness indicator.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("AGENT CONSOLE v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Uptime comes from the backend snapshot; a literal fallback stands in
    // until one arrives.
    let uptime = state
        .status
        .as_ref()
        .filter(|s| !s.uptime.is_empty())
        .map(|s| s.uptime.as_str())
        .unwrap_or("--");

    let (indicator_text, indicator_color) = match &state.status {
        Some(status) if status.ready => ("● READY", Color::Green),
        Some(_) => ("● NOT READY", Color::Yellow),
        None => ("● UNKNOWN", Color::DarkGray),
    };

    let summary = Line::from(vec![
        Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(Color::LightBlue),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Uptime: {}", uptime),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw("   "),
        Span::styled(
            indicator_text,
            Style::default()
                .fg(indicator_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let summary_widget = Paragraph::new(summary)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(summary_widget, header_chunks[1]);
}

/// Render the persistent failure banner. Only called when an error is set.
pub fn render_error_banner(f: &mut Frame, area: ratatui::layout::Rect, message: &str) {
    let banner = Paragraph::new(format!("⚠ {}", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    f.render_widget(banner, area);
}
