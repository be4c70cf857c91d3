//! Wire types for the agent service admin endpoints.
//!
//! Every omissible field carries a default so a sparse or partially
//! populated payload normalizes to safe values at the network boundary
//! instead of surfacing as a render-time fault.

use serde::Deserialize;

/// A conversational work context tracked by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    /// Unique session key.
    pub key: String,
    /// Number of messages exchanged in the session.
    #[serde(default)]
    pub message_count: u64,
    /// Last update time, epoch milliseconds.
    #[serde(default)]
    pub updated: i64,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created: i64,
}

/// A background worker managed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subagent {
    /// Unique subagent id.
    pub id: String,
    /// Free-text description of the work in progress.
    #[serde(default)]
    pub task: String,
    /// Optional display name; the id is shown when absent.
    #[serde(default)]
    pub label: Option<String>,
    /// Free-text state label, e.g. "running".
    #[serde(default)]
    pub status: String,
    /// Creation time, epoch milliseconds.
    #[serde(default)]
    pub created: i64,
}

impl Subagent {
    /// Display name: the label when present and non-empty, the id otherwise.
    pub fn display_name(&self) -> &str {
        match &self.label {
            Some(label) if !label.is_empty() => label,
            _ => &self.id,
        }
    }
}

/// Aggregate snapshot returned by `/admin/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemStatus {
    /// Model identifier, e.g. "claude-opus-4".
    #[serde(default)]
    pub model: String,
    /// Backend health flag.
    #[serde(default)]
    pub ready: bool,
    /// Active sessions, in backend order.
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Running subagents, in backend order.
    #[serde(default)]
    pub subagents: Vec<Subagent>,
    /// Human-readable uptime string.
    #[serde(default)]
    pub uptime: String,
    /// Workspace path label.
    #[serde(default)]
    pub workspace: String,
}

/// Response shape of `/admin/logs` and `/admin/service`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputPayload {
    /// Raw text output; empty when the backend omits the field.
    #[serde(default)]
    pub output: String,
}
