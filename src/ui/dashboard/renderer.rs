//! Dashboard main renderer

use super::components::{footer, header, logs, service, sessions, stats, subagents};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let mut constraints = vec![Constraint::Length(4)];
    if state.error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Percentage(30),
        Constraint::Length(2),
    ]);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(f.area());

    let mut next = 0;
    header::render_header(f, main_chunks[next], state);
    next += 1;

    if let Some(message) = &state.error {
        header::render_error_banner(f, main_chunks[next], message);
        next += 1;
    }

    stats::render_stats_row(f, main_chunks[next], state);

    let list_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[next + 1]);
    sessions::render_sessions_panel(f, list_chunks[0], state);
    subagents::render_subagents_panel(f, list_chunks[1], state);

    let text_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[next + 2]);
    logs::render_logs_panel(f, text_chunks[0], state);
    service::render_service_panel(f, text_chunks[1], state);

    footer::render_footer(f, main_chunks[next + 3], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::logging::LogLevel;
    use crate::poller::{PollPayload, PollUpdate};
    use chrono::Local;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const CAPTURED_STATUS: &str = r#"{
        "model": "claude-opus-4",
        "ready": true,
        "sessions": [
            {"key": "sess-alpha", "message_count": 12, "updated": 1754600000000, "created": 1754590000000},
            {"key": "sess-beta", "message_count": 3, "updated": 1754600100000, "created": 1754595000000}
        ],
        "subagents": [
            {"id": "sub-one", "task": "index the repository", "label": "indexer", "status": "running", "created": 1754598000000},
            {"id": "sub-two", "task": "summarize logs", "status": "running", "created": 1754599000000}
        ],
        "uptime": "3h 12m",
        "workspace": "/srv/agent/workspace"
    }"#;

    fn update(round: u64, payload: PollPayload) -> PollUpdate {
        PollUpdate {
            round,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            payload,
        }
    }

    fn render_to_text(state: &DashboardState) -> String {
        let backend = TestBackend::new(110, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            text.push('\n');
        }
        text
    }

    fn state_with_captured_status() -> DashboardState {
        let mut state = DashboardState::new(Environment::Local, false);
        let status = serde_json::from_str(CAPTURED_STATUS).unwrap();
        state.apply_update(update(1, PollPayload::Status(status)));
        state
    }

    #[test]
    // Every session key and subagent name from a captured payload shows up
    // exactly once, in order.
    fn test_captured_payload_round_trip() {
        let text = render_to_text(&state_with_captured_status());

        for needle in ["sess-alpha", "sess-beta", "indexer", "sub-two"] {
            assert_eq!(text.matches(needle).count(), 1, "expected one {needle}");
        }
        let alpha = text.find("sess-alpha").unwrap();
        let beta = text.find("sess-beta").unwrap();
        assert!(alpha < beta, "session order must be preserved");
    }

    #[test]
    // Stat cards show counts, the derived model label, and the full model id.
    fn test_stat_cards_rendered() {
        let text = render_to_text(&state_with_captured_status());
        assert!(text.contains("SESSIONS"));
        assert!(text.contains("SUBAGENTS"));
        assert!(text.contains("OPUS"));
        assert!(text.contains("claude-opus-4"));
        assert!(text.contains("Isolated"));
        assert!(text.contains("/srv/agent/workspace"));
        assert!(text.contains("3h 12m"));
    }

    #[test]
    // A status failure after a prior success keeps the lists and adds the
    // banner.
    fn test_failure_after_success_keeps_lists_and_shows_banner() {
        let mut state = state_with_captured_status();
        state.apply_update(update(
            2,
            PollPayload::StatusFailed {
                message: "HTTP error with status 500: boom".to_string(),
                level: LogLevel::Warn,
            },
        ));

        let text = render_to_text(&state);
        assert!(text.contains("sess-alpha"));
        assert!(text.contains("HTTP error with status 500"));
    }

    #[test]
    // No banner line is rendered while the error is unset.
    fn test_no_banner_without_error() {
        let text = render_to_text(&state_with_captured_status());
        assert!(!text.contains("⚠"));
    }

    #[test]
    // Empty lists render their placeholders, and the session count is zero.
    fn test_empty_lists_render_placeholders() {
        let mut state = DashboardState::new(Environment::Local, false);
        let status =
            serde_json::from_str(r#"{"model": "claude-opus-4", "ready": true}"#).unwrap();
        state.apply_update(update(1, PollPayload::Status(status)));

        let text = render_to_text(&state);
        assert!(text.contains("No active sessions"));
        assert!(text.contains("No running subagents"));
        assert_eq!(
            super::super::components::stats::session_count_text(state.status.as_ref()),
            "0"
        );
    }

    #[test]
    // Raw text panels show their placeholders until text arrives, then the
    // text verbatim.
    fn test_text_panels() {
        let mut state = state_with_captured_status();
        let text = render_to_text(&state);
        assert!(text.contains("No log output yet."));
        assert!(text.contains("No service report yet."));

        state.apply_update(update(1, PollPayload::LogTail("tail line".to_string())));
        state.apply_update(update(
            1,
            PollPayload::ServiceReport("agentd active (pid 3021)".to_string()),
        ));
        let text = render_to_text(&state);
        assert!(text.contains("tail line"));
        assert!(text.contains("agentd active (pid 3021)"));
    }

    #[test]
    // The readiness indicator tracks the health flag.
    fn test_readiness_indicator() {
        let text = render_to_text(&state_with_captured_status());
        assert!(text.contains("● READY"));

        let mut state = DashboardState::new(Environment::Local, false);
        let status = serde_json::from_str(r#"{"model": "m-1", "ready": false}"#).unwrap();
        state.apply_update(update(1, PollPayload::Status(status)));
        let text = render_to_text(&state);
        assert!(text.contains("● NOT READY"));
    }
}
