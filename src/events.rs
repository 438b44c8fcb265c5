//! Event System
//!
//! Types for poller diagnostics and the updates published to the UI

use crate::logging::{LogLevel, should_log_with_env};
use crate::models::{ConfigSnapshot, PortfolioSnapshot};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Poll leg that fetches the portfolio snapshot.
    PortfolioFetcher,
    /// Poll leg that fetches the live config.
    ConfigFetcher,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
}

/// A diagnostic event shown in the dashboard activity log.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn portfolio_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::PortfolioFetcher, msg, event_type, log_level)
    }

    pub fn config_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::ConfigFetcher, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

/// Messages published by the polling worker. Snapshot updates always replace
/// the corresponding state slot wholesale; a failed fetch publishes only a
/// `Log` event, leaving the slot untouched.
#[derive(Debug, Clone)]
pub enum PollerUpdate {
    Portfolio(PortfolioSnapshot),
    Config(ConfigSnapshot),
    Log(Event),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_events_always_display() {
        let event = Event::portfolio_with_level(
            "Synced portfolio".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        assert!(event.should_display());
    }

    #[test]
    fn event_display_includes_type_and_message() {
        let event = Event::config_with_level(
            "Failed to fetch config".to_string(),
            EventType::Error,
            LogLevel::Warn,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Error ["));
        assert!(rendered.ends_with("Failed to fetch config"));
    }
}
