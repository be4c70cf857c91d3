//! Dashboard state management
//!
//! Holds the latest view of the agent service, updated from poll rounds.

use crate::api::models::SystemStatus;
use crate::environment::Environment;
use crate::poller::PollUpdate;

use std::collections::VecDeque;
use std::time::Instant;

/// Client-held snapshot of the most recently fetched backend state, plus
/// loading/error flags. Replaced wholesale per resource on each applied
/// update; never merged or diffed.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment being monitored.
    pub environment: Environment,
    /// Console start time, used for the footer watch duration.
    pub start_time: Instant,
    /// Latest successfully parsed status snapshot, if any.
    pub status: Option<SystemStatus>,
    /// Latest log tail text; empty until the first successful logs fetch.
    pub logs: String,
    /// Latest service report text; empty until the first successful fetch.
    pub service: String,
    /// True until the first status fetch settles, success or failure.
    pub loading: bool,
    /// Banner message from the most recent status failure, cleared by the
    /// next successful status fetch.
    pub error: Option<String>,
    /// Updates waiting to be applied on the UI task.
    pub pending_updates: VecDeque<PollUpdate>,
    /// Whether to fill the terminal background.
    pub with_background_color: bool,
    /// Animation tick counter.
    pub tick: usize,

    /// Highest round applied per resource; older arrivals are discarded.
    status_round: u64,
    logs_round: u64,
    service_round: u64,
}

impl DashboardState {
    /// Creates the initial state: nothing loaded, loading flag raised.
    pub fn new(environment: Environment, with_background_color: bool) -> Self {
        Self {
            environment,
            start_time: Instant::now(),
            status: None,
            logs: String::new(),
            service: String::new(),
            loading: true,
            error: None,
            pending_updates: VecDeque::new(),
            with_background_color,
            tick: 0,
            status_round: 0,
            logs_round: 0,
            service_round: 0,
        }
    }

    /// Queue an update for processing on the next UI pass.
    pub fn add_update(&mut self, update: PollUpdate) {
        self.pending_updates.push_back(update);
    }

    /// True while the initializing splash should be shown: still loading and
    /// no status snapshot has ever arrived.
    pub fn is_initializing(&self) -> bool {
        self.loading && self.status.is_none()
    }

    // Round accessors for the updaters
    pub(super) fn status_round(&self) -> u64 {
        self.status_round
    }

    pub(super) fn set_status_round(&mut self, round: u64) {
        self.status_round = round;
    }

    pub(super) fn logs_round(&self) -> u64 {
        self.logs_round
    }

    pub(super) fn set_logs_round(&mut self, round: u64) {
        self.logs_round = round;
    }

    pub(super) fn service_round(&self) -> u64 {
        self.service_round
    }

    pub(super) fn set_service_round(&mut self, round: u64) {
        self.service_round = round;
    }
}
