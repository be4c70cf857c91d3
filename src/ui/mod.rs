//! Terminal user interface for the agent console.

pub mod app;
pub mod dashboard;
pub mod splash;

pub use app::{App, run};
