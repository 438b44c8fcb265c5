//! Live data polling worker
//!
//! The polling controller behind the dashboard: one immediate fetch cycle on
//! start, then a fixed-interval cycle until the shutdown signal arrives.
//! Within a cycle the portfolio and config fetches are independent; a failure
//! on one leg never blocks the other, and a failed leg publishes only a
//! diagnostic event so the UI keeps its previous snapshot.

use crate::api::BotApi;
use crate::consts::cli_consts;
use crate::error_classifier::ErrorClassifier;
use crate::events::{EventType, PollerUpdate};
use crate::logging::LogLevel;
use crate::workers::core::UpdateSender;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Polling configuration with an injectable interval, so tests can run the
/// controller against a paused clock.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: cli_consts::polling::poll_interval(),
        }
    }
}

/// Polls the bot API and publishes snapshots and diagnostics to the UI.
pub struct Poller {
    api: Arc<dyn BotApi>,
    sender: UpdateSender,
    config: PollerConfig,
    classifier: ErrorClassifier,
}

impl Poller {
    pub fn new(api: Arc<dyn BotApi>, sender: UpdateSender, config: PollerConfig) -> Self {
        Self {
            api,
            sender,
            config,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Spawns the polling loop. The first cycle runs immediately; afterwards
    /// one cycle per interval. Stopping cancels future ticks only; an
    /// in-flight response is discarded when the update channel closes.
    pub fn start(self, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.config.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = interval.tick() => self.run_cycle().await,
                }
            }
        })
    }

    /// One poll cycle: fetch both endpoints, publish whatever succeeded.
    async fn run_cycle(&self) {
        self.sender
            .send_portfolio_event(
                "Polling bot API...".to_string(),
                EventType::Refresh,
                LogLevel::Debug,
            )
            .await;

        let (portfolio, config) =
            tokio::join!(self.api.fetch_portfolio(), self.api.fetch_config());

        match portfolio {
            Ok(snapshot) => {
                self.sender
                    .send_portfolio_event(
                        format!("Synced portfolio (value ${})", snapshot.display_value()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.sender.send_update(PollerUpdate::Portfolio(snapshot)).await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.sender
                    .send_portfolio_event(
                        format!("Failed to fetch portfolio: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }

        match config {
            Ok(snapshot) => {
                self.sender
                    .send_config_event(
                        format!("Synced config ({} keys)", snapshot.len()),
                        EventType::Success,
                        LogLevel::Info,
                    )
                    .await;
                self.sender.send_update(PollerUpdate::Config(snapshot)).await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.sender
                    .send_config_event(
                        format!("Failed to fetch config: {}", e),
                        EventType::Error,
                        log_level,
                    )
                    .await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockBotApi;
    use crate::api::error::ApiError;
    use crate::events::Worker;
    use crate::models::PortfolioSnapshot;
    use tokio::sync::mpsc;

    fn sample_snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            portfolio_value: Some(300.0),
            positions: [("SOLUSD".to_string(), 2.0)].into_iter().collect(),
            last_trade: None,
            status: Some("Running".to_string()),
            alpha: None,
        }
    }

    fn sample_config() -> crate::models::ConfigSnapshot {
        let mut map = crate::models::ConfigSnapshot::new();
        map.insert("capital".to_string(), serde_json::json!(400.0));
        map
    }

    fn spawn_poller(
        mock: MockBotApi,
        interval: Duration,
    ) -> (
        mpsc::Receiver<PollerUpdate>,
        broadcast::Sender<()>,
        JoinHandle<()>,
    ) {
        let (tx, rx) = mpsc::channel(cli_consts::UPDATE_QUEUE_SIZE);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let poller = Poller::new(
            Arc::new(mock),
            UpdateSender::new(tx),
            PollerConfig { interval },
        );
        let handle = poller.start(shutdown_rx);
        (rx, shutdown_tx, handle)
    }

    /// Receive updates until both a portfolio and a config snapshot arrive,
    /// returning everything seen along the way.
    async fn recv_one_cycle(rx: &mut mpsc::Receiver<PollerUpdate>) -> Vec<PollerUpdate> {
        let mut seen = Vec::new();
        let mut got_portfolio_outcome = false;
        let mut got_config_outcome = false;
        while !(got_portfolio_outcome && got_config_outcome) {
            let update = rx.recv().await.expect("channel open");
            match &update {
                PollerUpdate::Portfolio(_) => got_portfolio_outcome = true,
                PollerUpdate::Config(_) => got_config_outcome = true,
                PollerUpdate::Log(event) if event.event_type == EventType::Error => {
                    match event.worker {
                        Worker::PortfolioFetcher => got_portfolio_outcome = true,
                        Worker::ConfigFetcher => got_config_outcome = true,
                    }
                }
                PollerUpdate::Log(_) => {}
            }
            seen.push(update);
        }
        seen
    }

    #[tokio::test(start_paused = true)]
    async fn first_cycle_fires_immediately() {
        let mut mock = MockBotApi::new();
        mock.expect_fetch_portfolio()
            .times(1)
            .returning(|| Ok(sample_snapshot()));
        mock.expect_fetch_config()
            .times(1)
            .returning(|| Ok(sample_config()));

        let (mut rx, shutdown_tx, handle) =
            spawn_poller(mock, cli_consts::polling::poll_interval());

        let updates = recv_one_cycle(&mut rx).await;
        assert!(updates.iter().any(|u| matches!(
            u,
            PollerUpdate::Portfolio(s) if s.portfolio_value == Some(300.0)
        )));
        assert!(updates
            .iter()
            .any(|u| matches!(u, PollerUpdate::Config(c) if c.contains_key("capital"))));

        shutdown_tx.send(()).expect("poller listening");
        handle.await.expect("poller exits cleanly");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_portfolio_leg_publishes_only_a_diagnostic() {
        let mut mock = MockBotApi::new();
        mock.expect_fetch_portfolio().times(1).returning(|| {
            Err(ApiError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        mock.expect_fetch_config()
            .times(1)
            .returning(|| Ok(sample_config()));

        let (mut rx, shutdown_tx, handle) =
            spawn_poller(mock, cli_consts::polling::poll_interval());

        let updates = recv_one_cycle(&mut rx).await;
        // The failed leg must not publish a snapshot, and must not block the
        // config leg.
        assert!(!updates
            .iter()
            .any(|u| matches!(u, PollerUpdate::Portfolio(_))));
        assert!(updates.iter().any(|u| matches!(u, PollerUpdate::Config(_))));
        assert!(updates.iter().any(|u| matches!(
            u,
            PollerUpdate::Log(e) if e.event_type == EventType::Error
                && e.worker == Worker::PortfolioFetcher
                && e.log_level == LogLevel::Warn
        )));

        shutdown_tx.send(()).expect("poller listening");
        handle.await.expect("poller exits cleanly");
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_stops_future_fetches() {
        let mut mock = MockBotApi::new();
        mock.expect_fetch_portfolio()
            .times(1)
            .returning(|| Ok(sample_snapshot()));
        mock.expect_fetch_config()
            .times(1)
            .returning(|| Ok(sample_config()));

        let interval = Duration::from_secs(10);
        let (mut rx, shutdown_tx, handle) = spawn_poller(mock, interval);

        recv_one_cycle(&mut rx).await;
        shutdown_tx.send(()).expect("poller listening");
        handle.await.expect("poller exits cleanly");

        // Advance well past one interval: the mock's times(1) would trip on
        // any further fetch, and the closed channel yields no more updates.
        tokio::time::advance(interval * 2).await;
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn interval_is_injectable() {
        let mut mock = MockBotApi::new();
        mock.expect_fetch_portfolio()
            .times(3..)
            .returning(|| Ok(sample_snapshot()));
        mock.expect_fetch_config()
            .times(3..)
            .returning(|| Ok(sample_config()));

        let (mut rx, shutdown_tx, handle) = spawn_poller(mock, Duration::from_secs(1));

        // The paused clock auto-advances between cycles.
        for _ in 0..3 {
            recv_one_cycle(&mut rx).await;
        }

        shutdown_tx.send(()).expect("poller listening");
        handle.await.expect("poller exits cleanly");
    }
}
