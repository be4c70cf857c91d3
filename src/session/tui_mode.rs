//! TUI mode execution
//!
//! Sets up the terminal, wires the poller to the dashboard, and restores the
//! terminal on the way out.

use crate::api::AgentClient;
use crate::environment::Environment;
use crate::poller::start_poller;
use crate::ui::{self, App};
use crate::ui::dashboard::DashboardState;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Runs the dashboard against the given environment until the user quits.
pub async fn run_tui_mode(
    environment: Environment,
    with_background_color: bool,
) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Wire the poller to the dashboard and run the UI loop.
    let client = AgentClient::new(environment);
    let (shutdown_sender, _) = broadcast::channel(1);
    let update_receiver = start_poller(Arc::new(client), shutdown_sender.subscribe());
    let state = DashboardState::new(environment, with_background_color);
    let app = App::new(state, update_receiver, shutdown_sender);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
