//! Headless mode execution
//!
//! Prints poll updates to the console, filtered by the RUST_LOG threshold,
//! until Ctrl+C.

use crate::api::AgentClient;
use crate::environment::Environment;
use crate::poller::start_poller;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::broadcast;

pub async fn run_headless_mode(environment: Environment) -> Result<(), Box<dyn Error>> {
    log::set_max_level(crate::logging::get_rust_log_level().into());
    println!("Agent console starting in headless mode ({:?})", environment);

    let client = AgentClient::new(environment);
    let (shutdown_sender, _) = broadcast::channel(1);
    let mut update_receiver = start_poller(Arc::new(client), shutdown_sender.subscribe());

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    // Event loop: print updates to the console until shutdown
    let mut shutdown_receiver = shutdown_sender.subscribe();
    loop {
        tokio::select! {
            maybe_update = update_receiver.recv() => {
                match maybe_update {
                    Some(update) if update.should_display() => println!("{}", update),
                    Some(_) => {}
                    None => break,
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    println!("Agent console stopped.");
    Ok(())
}
