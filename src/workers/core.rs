//! Core worker utilities

use crate::events::{Event, EventType, PollerUpdate};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common update sending utilities for the polling worker
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<PollerUpdate>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<PollerUpdate>) -> Self {
        Self { sender }
    }

    /// Send a generic update
    pub async fn send_update(&self, update: PollerUpdate) {
        let _ = self.sender.send(update).await;
    }

    pub async fn send_portfolio_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(PollerUpdate::Log(Event::portfolio_with_level(
                message, event_type, log_level,
            )))
            .await;
    }

    pub async fn send_config_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        let _ = self
            .sender
            .send(PollerUpdate::Log(Event::config_with_level(
                message, event_type, log_level,
            )))
            .await;
    }
}
