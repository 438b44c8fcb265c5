//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::environment::Environment;
use crate::events::PollerUpdate;
use crate::ui::dashboard::state::Tab;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying bot state.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// The environment whose bot API is being polled.
    environment: Environment,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives updates from the polling worker.
    update_receiver: mpsc::Receiver<PollerUpdate>,

    /// Broadcasts shutdown signal to the polling worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        environment: Environment,
        update_receiver: mpsc::Receiver<PollerUpdate>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            environment,
            current_screen: Screen::Splash,
            update_receiver,
            shutdown_sender,
        }
    }

    fn open_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard(Box::new(DashboardState::new(
            self.environment.clone(),
            self.start_time,
        )));
    }

    /// Queue all incoming poller updates for processing. Only drains while
    /// the dashboard is mounted; during the splash screen the channel buffers
    /// updates so the immediate first poll is not lost.
    fn drain_updates(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            while let Ok(update) = self.update_receiver.try_recv() {
                state.add_update(update);
            }
        }
    }

    /// Tear down the current screen. The chart must be disposed whenever the
    /// dashboard unmounts.
    fn close(&mut self) {
        if let Screen::Dashboard(state) = &mut self.current_screen {
            state.chart.dispose();
        }
        let _ = self.shutdown_sender.send(());
    }
}

/// Runs the application UI in a loop, handling events and rendering the
/// appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        app.drain_updates();

        // Update the state based on the current screen
        match &mut app.current_screen {
            Screen::Splash => {}
            Screen::Dashboard(state) => {
                state.update();
            }
        }
        terminal.draw(|f| render(f, &app.current_screen))?;

        // Handle splash-to-dashboard transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.open_dashboard();
                continue;
            }
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    app.close();
                    return Ok(());
                }

                match &mut app.current_screen {
                    Screen::Splash => {
                        // Any other key press skips the splash screen
                        app.open_dashboard();
                    }
                    Screen::Dashboard(state) => match key.code {
                        KeyCode::Tab => state.active_tab = state.active_tab.next(),
                        KeyCode::Char('1') => state.active_tab = Tab::Dashboard,
                        KeyCode::Char('2') => state.active_tab = Tab::Sentiment,
                        KeyCode::Char('3') => state.active_tab = Tab::Strategy,
                        KeyCode::Left if state.active_tab == Tab::Strategy => {
                            state.strategy = state.strategy.prev();
                        }
                        KeyCode::Right if state.active_tab == Tab::Strategy => {
                            state.strategy = state.strategy.next();
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PortfolioSnapshot;

    fn app_with_channel() -> (App, mpsc::Sender<PollerUpdate>) {
        let (update_sender, update_receiver) = mpsc::channel(16);
        let (shutdown_sender, _) = broadcast::channel(1);
        let app = App::new(Environment::Local, update_receiver, shutdown_sender);
        (app, update_sender)
    }

    #[tokio::test]
    async fn updates_arriving_during_splash_apply_on_the_dashboard() {
        let (mut app, update_sender) = app_with_channel();
        let snapshot = PortfolioSnapshot {
            portfolio_value: Some(300.0),
            ..Default::default()
        };
        update_sender
            .send(PollerUpdate::Portfolio(snapshot))
            .await
            .expect("receiver alive");

        // The splash screen must leave the update buffered in the channel.
        app.drain_updates();
        assert!(matches!(app.current_screen, Screen::Splash));

        app.open_dashboard();
        app.drain_updates();
        let Screen::Dashboard(state) = &mut app.current_screen else {
            panic!("dashboard should be open");
        };
        state.update();
        assert_eq!(
            state.portfolio().and_then(|s| s.portfolio_value),
            Some(300.0)
        );
    }
}
