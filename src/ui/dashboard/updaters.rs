//! Dashboard state update logic
//!
//! Applies queued poller updates to the view state

use super::state::DashboardState;

use crate::events::PollerUpdate;
use chrono::Local;

impl DashboardState {
    /// Apply all queued updates one by one.
    pub fn update(&mut self) {
        while let Some(update) = self.pending_updates.pop_front() {
            self.apply_update(update);
        }
    }

    /// Apply a single poller update. Snapshot slots are replaced wholesale;
    /// diagnostics only append to the activity log.
    fn apply_update(&mut self, update: PollerUpdate) {
        match update {
            PollerUpdate::Portfolio(snapshot) => {
                self.chart.sync(&snapshot);
                self.set_last_sync(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
                self.set_portfolio(snapshot);
            }
            PollerUpdate::Config(snapshot) => {
                self.set_config(snapshot);
            }
            PollerUpdate::Log(event) => {
                self.add_to_activity_log(event);
            }
        }
    }
}
