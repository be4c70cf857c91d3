//! Dashboard state update logic
//!
//! Applies queued poll updates to the view state, enforcing the per-resource
//! freshness guard and the partial-failure policy.

use super::state::DashboardState;
use crate::poller::{PollPayload, PollUpdate};

impl DashboardState {
    /// Advance the animation tick and apply all queued updates.
    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }
    }

    /// Apply one fetch completion. An update from an older round than one
    /// already applied for the same resource is discarded, so network
    /// reordering cannot roll the view back.
    pub fn apply_update(&mut self, update: PollUpdate) {
        let round = update.round;
        match update.payload {
            PollPayload::Status(status) => {
                if round < self.status_round() {
                    return;
                }
                self.set_status_round(round);
                self.status = Some(status);
                self.error = None;
                self.loading = false;
            }
            PollPayload::StatusFailed { message, .. } => {
                if round < self.status_round() {
                    return;
                }
                self.set_status_round(round);
                // Prior snapshot stays visible; only the banner changes.
                self.error = Some(message);
                self.loading = false;
            }
            PollPayload::LogTail(text) => {
                if round < self.logs_round() {
                    return;
                }
                self.set_logs_round(round);
                self.logs = text;
            }
            PollPayload::ServiceReport(text) => {
                if round < self.service_round() {
                    return;
                }
                self.set_service_round(round);
                self.service = text;
            }
        }
    }
}
