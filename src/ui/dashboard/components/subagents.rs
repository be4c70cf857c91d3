//! Dashboard subagent list component

use super::super::state::DashboardState;
use super::super::utils::{format_local_time, wrap_two_lines};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding, Paragraph};

/// Badge color for a free-text subagent status label.
fn status_badge_color(status: &str) -> Color {
    match status.to_lowercase().as_str() {
        "running" => Color::Green,
        "failed" | "error" => Color::Red,
        _ => Color::Yellow,
    }
}

/// Render the subagent list, or the empty-state placeholder.
pub fn render_subagents_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SUBAGENTS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let subagents = state
        .status
        .as_ref()
        .map(|s| s.subagents.as_slice())
        .unwrap_or(&[]);

    if subagents.is_empty() {
        let placeholder = Paragraph::new("No running subagents")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    // Task text gets at most two display lines; the data is never cut.
    let task_width = (area.width.saturating_sub(6)) as usize;

    let items: Vec<ListItem> = subagents
        .iter()
        .map(|subagent| {
            let badge = format!("[{}]", subagent.status.to_uppercase());
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    badge,
                    Style::default()
                        .fg(status_badge_color(&subagent.status))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", subagent.display_name()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  created {}", format_local_time(subagent.created)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];
            for task_line in wrap_two_lines(&subagent.task, task_width) {
                lines.push(Line::styled(task_line, Style::default().fg(Color::Gray)));
            }
            ListItem::new(lines)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
