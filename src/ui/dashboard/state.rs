//! Dashboard state management
//!
//! The view state store: the latest snapshots, the active tab, and the
//! locally-selected strategy mode. Snapshot slots are only ever replaced
//! wholesale; a failed poll never touches them.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::{Event as WorkerEvent, PollerUpdate};
use crate::models::{ConfigSnapshot, PortfolioSnapshot, SentimentVector};
use crate::ui::dashboard::chart::PositionChart;

use std::collections::VecDeque;
use std::time::Instant;

/// The dashboard's content tabs, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tab {
    Dashboard,
    Sentiment,
    Strategy,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Sentiment, Tab::Strategy];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Sentiment => "Sentiment",
            Tab::Strategy => "Strategy",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Strategy mode selector. UI-only state: the observed system never
/// transmits the selection to the backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum StrategyMode {
    #[strum(serialize = "RL")]
    Rl,
    #[strum(serialize = "Momentum")]
    Momentum,
    #[strum(serialize = "Mean Reversion")]
    MeanReversion,
}

impl StrategyMode {
    pub const ALL: [StrategyMode; 3] = [
        StrategyMode::Rl,
        StrategyMode::Momentum,
        StrategyMode::MeanReversion,
    ];

    fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    pub fn next(&self) -> StrategyMode {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> StrategyMode {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Dashboard state with the latest bot snapshots and UI selections.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment the dashboard is polling.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Currently selected content tab.
    pub active_tab: Tab,
    /// Locally-selected strategy mode (never sent to the backend).
    pub strategy: StrategyMode,
    /// Per-asset sentiment scores; static default, not backend-sourced.
    pub sentiment: SentimentVector,
    /// Chart bound to the current portfolio snapshot.
    pub chart: PositionChart,
    /// Queue of updates waiting to be applied
    pub pending_updates: VecDeque<PollerUpdate>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,

    /// Latest portfolio snapshot; `None` until the first successful poll.
    portfolio: Option<PortfolioSnapshot>,
    /// Latest config snapshot.
    config: Option<ConfigSnapshot>,
    /// Timestamp of the last successful portfolio sync.
    last_sync: Option<String>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant) -> Self {
        Self {
            environment,
            start_time,
            active_tab: Tab::Dashboard,
            strategy: StrategyMode::Rl,
            sentiment: SentimentVector::default(),
            chart: PositionChart::default(),
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            portfolio: None,
            config: None,
            last_sync: None,
        }
    }

    // Getter methods for private fields
    pub fn portfolio(&self) -> Option<&PortfolioSnapshot> {
        self.portfolio.as_ref()
    }

    pub fn config(&self) -> Option<&ConfigSnapshot> {
        self.config.as_ref()
    }

    pub fn last_sync(&self) -> Option<&str> {
        self.last_sync.as_deref()
    }

    // Setter methods for private fields (for updaters)
    pub(super) fn set_portfolio(&mut self, snapshot: PortfolioSnapshot) {
        self.portfolio = Some(snapshot);
    }

    pub(super) fn set_config(&mut self, snapshot: ConfigSnapshot) {
        self.config = Some(snapshot);
    }

    pub(super) fn set_last_sync(&mut self, timestamp: String) {
        self.last_sync = Some(timestamp);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an update to the processing queue
    pub fn add_update(&mut self, update: PollerUpdate) {
        self.pending_updates.push_back(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_in_display_order() {
        assert_eq!(Tab::Dashboard.next(), Tab::Sentiment);
        assert_eq!(Tab::Sentiment.next(), Tab::Strategy);
        assert_eq!(Tab::Strategy.next(), Tab::Dashboard);
    }

    #[test]
    fn strategy_modes_cycle_both_ways() {
        assert_eq!(StrategyMode::Rl.next(), StrategyMode::Momentum);
        assert_eq!(StrategyMode::Rl.prev(), StrategyMode::MeanReversion);
        assert_eq!(StrategyMode::MeanReversion.next(), StrategyMode::Rl);
    }

    #[test]
    fn strategy_mode_labels() {
        assert_eq!(StrategyMode::Rl.to_string(), "RL");
        assert_eq!(StrategyMode::Momentum.to_string(), "Momentum");
        assert_eq!(StrategyMode::MeanReversion.to_string(), "Mean Reversion");
    }

    #[test]
    fn activity_log_is_capped() {
        use crate::events::{Event, EventType};
        use crate::logging::LogLevel;

        let mut state = DashboardState::new(Environment::Local, Instant::now());
        for i in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.add_to_activity_log(Event::portfolio_with_level(
                format!("event {i}"),
                EventType::Success,
                LogLevel::Info,
            ));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 10");
    }
}
