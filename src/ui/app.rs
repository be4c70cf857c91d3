//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::poller::PollUpdate;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Application state
#[derive(Debug)]
pub struct App {
    /// The dashboard view state, owned exclusively by the UI loop.
    pub state: DashboardState,

    /// Receives poll updates from the poller task.
    update_receiver: mpsc::Receiver<PollUpdate>,

    /// Broadcasts the shutdown signal to the poller on exit.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        state: DashboardState,
        update_receiver: mpsc::Receiver<PollUpdate>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            state,
            update_receiver,
            shutdown_sender,
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Queue all completed fetches, then apply them in one pass
        while let Ok(update) = app.update_receiver.try_recv() {
            app.state.add_update(update);
        }
        app.state.update();

        terminal.draw(|f| render(f, &app.state))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    // Stop the poller; in-flight fetches resolve into nothing
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the splash until the first status settles, then the dashboard.
fn render(f: &mut Frame, state: &DashboardState) {
    if state.is_initializing() {
        render_splash(f, state.tick);
    } else {
        render_dashboard(f, state);
    }
}
