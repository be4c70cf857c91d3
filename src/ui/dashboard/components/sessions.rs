//! Dashboard session list component

use super::super::state::DashboardState;
use super::super::utils::{format_local_time, truncate_id};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding, Paragraph};

const KEY_DISPLAY_CHARS: usize = 14;

/// Render the active session list, or the empty-state placeholder.
pub fn render_sessions_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SESSIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let sessions = state
        .status
        .as_ref()
        .map(|s| s.sessions.as_slice())
        .unwrap_or(&[]);

    if sessions.is_empty() {
        let placeholder = Paragraph::new("No active sessions")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = sessions
        .iter()
        .map(|session| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_id(&session.key, KEY_DISPLAY_CHARS),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Updated {}", format_local_time(session.updated)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {} msgs", session.message_count),
                    Style::default().fg(Color::LightBlue),
                ),
                // Decorative affordance; no action is wired to it.
                Span::styled("  [view]", Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
