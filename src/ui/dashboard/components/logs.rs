//! Dashboard log panel component
//!
//! Renders the backend log tail verbatim, whitespace preserved.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_logs_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("AGENT LOGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let widget = if state.logs.is_empty() {
        Paragraph::new("No log output yet.").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.logs.as_str()).style(Style::default().fg(Color::Gray))
    };

    f.render_widget(widget.block(block), area);
}
