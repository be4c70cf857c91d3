//! Poll scheduling for the agent service admin endpoints.
//!
//! One round fires immediately on startup and every 5 seconds thereafter.
//! Each round fans out the three fetches as independent tasks, so a slow or
//! failing resource never blocks the others. Rounds may overlap; every update
//! carries its round number and the state layer discards stale arrivals.

use crate::api::AgentApi;
use crate::consts::cli_consts;
use crate::logging::LogLevel;
use crate::api::models::SystemStatus;
use chrono::Local;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// The three resources refreshed by a poll round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FetchKind {
    Status,
    Logs,
    Service,
}

/// Result of one fetch within a poll round.
#[derive(Debug, Clone)]
pub enum PollPayload {
    /// A parsed status snapshot.
    Status(SystemStatus),
    /// The status endpoint failed; carries the banner message and severity.
    StatusFailed { message: String, level: LogLevel },
    /// Fresh log tail text.
    LogTail(String),
    /// Fresh service report text.
    ServiceReport(String),
}

impl PollPayload {
    pub fn kind(&self) -> FetchKind {
        match self {
            PollPayload::Status(_) | PollPayload::StatusFailed { .. } => FetchKind::Status,
            PollPayload::LogTail(_) => FetchKind::Logs,
            PollPayload::ServiceReport(_) => FetchKind::Service,
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            PollPayload::Status(_) => LogLevel::Info,
            PollPayload::StatusFailed { level, .. } => *level,
            // Raw text refreshes are noise outside debug runs
            PollPayload::LogTail(_) | PollPayload::ServiceReport(_) => LogLevel::Debug,
        }
    }
}

/// One fetch completion, tagged with the round that issued it.
#[derive(Debug, Clone)]
pub struct PollUpdate {
    pub round: u64,
    pub timestamp: String,
    pub payload: PollPayload,
}

impl PollUpdate {
    fn new(round: u64, payload: PollPayload) -> Self {
        Self {
            round,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            payload,
        }
    }

    pub fn should_display(&self) -> bool {
        crate::logging::should_log_with_env(self.payload.log_level())
    }
}

impl Display for PollUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.payload {
            PollPayload::Status(status) => write!(
                f,
                "[{}] status: {} sessions, {} subagents, ready={}",
                self.timestamp,
                status.sessions.len(),
                status.subagents.len(),
                status.ready
            ),
            PollPayload::StatusFailed { message, .. } => {
                write!(f, "[{}] status fetch failed: {}", self.timestamp, message)
            }
            PollPayload::LogTail(text) => {
                write!(f, "[{}] logs: {} bytes", self.timestamp, text.len())
            }
            PollPayload::ServiceReport(text) => {
                write!(f, "[{}] service: {} bytes", self.timestamp, text.len())
            }
        }
    }
}

/// Spawns the poll scheduler. Updates arrive on the returned channel until a
/// shutdown signal is received; completions still in flight at shutdown are
/// dropped with the channel.
pub fn start_poller(
    api: Arc<dyn AgentApi>,
    mut shutdown: broadcast::Receiver<()>,
) -> mpsc::Receiver<PollUpdate> {
    let (update_sender, update_receiver) =
        mpsc::channel::<PollUpdate>(cli_consts::EVENT_QUEUE_SIZE);

    tokio::spawn(async move {
        let mut round: u64 = 0;
        let mut interval = tokio::time::interval(cli_consts::poll_interval());
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    round += 1;
                    spawn_round(api.clone(), update_sender.clone(), round);
                }
                _ = shutdown.recv() => break,
            }
        }
    });

    update_receiver
}

/// Issues the three fetches of one round as independent tasks.
fn spawn_round(api: Arc<dyn AgentApi>, sender: mpsc::Sender<PollUpdate>, round: u64) {
    {
        let api = api.clone();
        let sender = sender.clone();
        tokio::spawn(async move {
            let payload = match api.fetch_status().await {
                Ok(status) => PollPayload::Status(status),
                Err(e) => PollPayload::StatusFailed {
                    level: e.log_level(),
                    message: e.to_string(),
                },
            };
            // Send fails only after teardown; the late completion is a no-op.
            let _ = sender.send(PollUpdate::new(round, payload)).await;
        });
    }

    {
        let api = api.clone();
        let sender = sender.clone();
        tokio::spawn(async move {
            match api.fetch_logs().await {
                Ok(payload) => {
                    let update = PollUpdate::new(round, PollPayload::LogTail(payload.output));
                    let _ = sender.send(update).await;
                }
                // Log fetch failures are suppressed: no update, prior text stays.
                Err(e) => log::debug!("{} fetch failed in round {}: {}", FetchKind::Logs, round, e),
            }
        });
    }

    tokio::spawn(async move {
        match api.fetch_service().await {
            Ok(payload) => {
                let update = PollUpdate::new(round, PollPayload::ServiceReport(payload.output));
                let _ = sender.send(update).await;
            }
            Err(e) => log::debug!(
                "{} fetch failed in round {}: {}",
                FetchKind::Service,
                round,
                e
            ),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAgentApi;
    use crate::api::error::ApiError;
    use crate::api::models::OutputPayload;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::mpsc::error::TryRecvError;

    fn sample_status() -> SystemStatus {
        serde_json::from_str(r#"{"model": "claude-opus-4", "ready": true}"#).unwrap()
    }

    /// Let spawned fetch tasks run to completion at the current virtual time.
    async fn settle() {
        for _ in 0..25 {
            tokio::task::yield_now().await;
        }
    }

    fn counting_mock(calls: Arc<AtomicUsize>) -> MockAgentApi {
        let mut mock = MockAgentApi::new();
        mock.expect_fetch_status().returning(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(sample_status())
        });
        mock.expect_fetch_logs()
            .returning(|| Ok(OutputPayload::default()));
        mock.expect_fetch_service()
            .returning(|| Ok(OutputPayload::default()));
        mock
    }

    #[tokio::test(start_paused = true)]
    // One immediate round plus one every 5 seconds: 5 rounds over 20 seconds.
    async fn test_poll_cadence_over_twenty_seconds() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (shutdown_sender, _) = broadcast::channel(1);
        let _updates = start_poller(
            Arc::new(counting_mock(calls.clone())),
            shutdown_sender.subscribe(),
        );

        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        for expected in 2..=5 {
            tokio::time::advance(Duration::from_secs(5)).await;
            settle().await;
            assert_eq!(calls.load(Ordering::SeqCst), expected);
        }
    }

    #[tokio::test(start_paused = true)]
    // After teardown at t=12s, no further fetches are issued.
    async fn test_teardown_stops_polling() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (shutdown_sender, _) = broadcast::channel(1);
        let mut updates = start_poller(
            Arc::new(counting_mock(calls.clone())),
            shutdown_sender.subscribe(),
        );

        settle().await;
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        // Rounds fired at t=0, 5, 10
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        tokio::time::advance(Duration::from_secs(2)).await;
        shutdown_sender.send(()).unwrap();
        settle().await;

        tokio::time::advance(Duration::from_secs(20)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        // The channel drains and then closes.
        while updates.try_recv().is_ok() {}
        assert!(matches!(updates.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[tokio::test(start_paused = true)]
    // Each round produces one update per resource, all tagged with the round.
    async fn test_round_fans_out_three_updates() {
        let calls = Arc::new(AtomicUsize::new(0));
        let (shutdown_sender, _) = broadcast::channel(1);
        let mut updates = start_poller(Arc::new(counting_mock(calls)), shutdown_sender.subscribe());

        settle().await;
        let mut kinds = Vec::new();
        while let Ok(update) = updates.try_recv() {
            assert_eq!(update.round, 1);
            kinds.push(update.payload.kind());
        }
        kinds.sort_by_key(|k| format!("{k}"));
        assert_eq!(kinds, vec![FetchKind::Logs, FetchKind::Service, FetchKind::Status]);
    }

    #[tokio::test(start_paused = true)]
    // Status failures surface as updates; log failures are fully suppressed.
    async fn test_status_failure_reported_logs_failure_suppressed() {
        let mut mock = MockAgentApi::new();
        mock.expect_fetch_status().returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "internal error".to_string(),
            })
        });
        mock.expect_fetch_logs().returning(|| {
            Err(ApiError::Http {
                status: 502,
                message: "bad gateway".to_string(),
            })
        });
        mock.expect_fetch_service()
            .returning(|| Ok(OutputPayload { output: "ok".to_string() }));

        let (shutdown_sender, _) = broadcast::channel(1);
        let mut updates = start_poller(Arc::new(mock), shutdown_sender.subscribe());
        settle().await;

        let mut got_status_failure = false;
        let mut got_service = false;
        while let Ok(update) = updates.try_recv() {
            match update.payload {
                PollPayload::StatusFailed { message, level } => {
                    assert!(message.contains("500"));
                    assert_eq!(level, LogLevel::Warn);
                    got_status_failure = true;
                }
                PollPayload::ServiceReport(text) => {
                    assert_eq!(text, "ok");
                    got_service = true;
                }
                other => panic!("unexpected update: {:?}", other),
            }
        }
        assert!(got_status_failure);
        assert!(got_service);
    }
}
