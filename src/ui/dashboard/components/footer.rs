//! Dashboard footer component

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer with the quit hint and watch duration.
pub fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let watched = state.start_time.elapsed().as_secs();
    let footer_text = format!(
        "[Q] Quit | Agent Console | watching {}m {}s",
        watched / 60,
        watched % 60
    );

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
