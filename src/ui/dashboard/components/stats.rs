//! Dashboard stat card components
//!
//! Renders the four-cell summary row: session count, subagent count, model,
//! and workspace isolation.

use super::super::state::DashboardState;
use super::super::utils::{PLACEHOLDER, short_model_label};
use crate::api::models::SystemStatus;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Active session count as displayed: the list length, or a dash before the
/// first snapshot arrives.
pub fn session_count_text(status: Option<&SystemStatus>) -> String {
    match status {
        Some(status) => status.sessions.len().to_string(),
        None => "--".to_string(),
    }
}

/// Running subagent count as displayed.
pub fn subagent_count_text(status: Option<&SystemStatus>) -> String {
    match status {
        Some(status) => status.subagents.len().to_string(),
        None => "--".to_string(),
    }
}

/// Render the 4-cell stat summary row.
pub fn render_stats_row(f: &mut Frame, area: Rect, state: &DashboardState) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status = state.status.as_ref();

    render_card(
        f,
        cells[0],
        "SESSIONS",
        &session_count_text(status),
        "active",
        Color::LightBlue,
    );
    render_card(
        f,
        cells[1],
        "SUBAGENTS",
        &subagent_count_text(status),
        "running",
        Color::LightYellow,
    );

    let (model_label, model_full) = match status {
        Some(status) if !status.model.is_empty() => {
            (short_model_label(&status.model), status.model.clone())
        }
        _ => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    };
    render_card(f, cells[2], "MODEL", &model_label, &model_full, Color::LightCyan);

    let workspace = match status {
        Some(status) if !status.workspace.is_empty() => status.workspace.clone(),
        _ => "--".to_string(),
    };
    render_card(f, cells[3], "WORKSPACE", "Isolated", &workspace, Color::LightGreen);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    subtitle: &str,
    value_color: Color,
) {
    let lines = vec![
        Line::styled(
            value.to_string(),
            Style::default()
                .fg(value_color)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::DarkGray)),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(card, area);
}
