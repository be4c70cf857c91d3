//! Dashboard service status panel component

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_service_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let block = Block::default()
        .title("SERVICE STATUS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let widget = if state.service.is_empty() {
        Paragraph::new("No service report yet.").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(state.service.as_str()).style(Style::default().fg(Color::Gray))
    };

    f.render_widget(widget.block(block), area);
}
