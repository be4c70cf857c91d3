//! Dashboard panel components

pub mod footer;
pub mod header;
pub mod logs;
pub mod service;
pub mod sessions;
pub mod stats;
pub mod subagents;
