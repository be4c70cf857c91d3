mod api;
mod consts;
mod environment;
mod logging;
mod poller;
mod session;
mod ui;

use crate::api::{AgentApi, AgentClient};
use crate::environment::Environment;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the monitoring dashboard
    Start {
        /// Environment to monitor: production, staging, or local
        #[arg(long, value_name = "ENVIRONMENT")]
        env: Option<String>,

        /// Print poll updates to the console instead of drawing the dashboard
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background fill
        #[arg(long)]
        no_background_color: bool,
    },
    /// Fetch the current status snapshot once and print it
    Status {
        /// Environment to query: production, staging, or local
        #[arg(long, value_name = "ENVIRONMENT")]
        env: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            env,
            headless,
            no_background_color,
        } => {
            let environment = resolve_environment(env)?;
            if headless {
                session::run_headless_mode(environment).await
            } else {
                session::run_tui_mode(environment, !no_background_color).await
            }
        }
        Command::Status { env } => {
            let environment = resolve_environment(env)?;
            print_status_once(environment).await
        }
    }
}

/// Resolves the environment to monitor: an explicit flag wins, then the
/// `AGENT_CONSOLE_ENV` variable, then host-name detection.
fn resolve_environment(flag_value: Option<String>) -> Result<Environment, Box<dyn Error>> {
    if let Some(value) = flag_value {
        return value.parse::<Environment>().map_err(|_| {
            format!("Unknown environment '{value}'. Expected production, staging, or local.")
                .into()
        });
    }

    if let Ok(value) = std::env::var("AGENT_CONSOLE_ENV") {
        if let Ok(environment) = value.parse::<Environment>() {
            return Ok(environment);
        }
    }

    Ok(match sysinfo::System::host_name() {
        Some(host) => Environment::from_host(&host),
        None => Environment::default(),
    })
}

/// One-shot status fetch with a plain-text summary.
async fn print_status_once(environment: Environment) -> Result<(), Box<dyn Error>> {
    let client = AgentClient::new(environment);
    println!("Querying {:?}", client.environment());

    match client.fetch_status().await {
        Ok(status) => {
            println!("Model:     {}", status.model);
            println!("Ready:     {}", status.ready);
            println!("Uptime:    {}", status.uptime);
            println!("Workspace: {}", status.workspace);
            println!("Sessions:  {}", status.sessions.len());
            for session in &status.sessions {
                println!("  {} ({} msgs)", session.key, session.message_count);
            }
            println!("Subagents: {}", status.subagents.len());
            for subagent in &status.subagents {
                println!("  [{}] {}", subagent.status, subagent.display_name());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to fetch status: {}", e);
            Err(e.into())
        }
    }
}
