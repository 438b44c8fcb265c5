mod api;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod models;
mod ui;
mod workers;

use crate::api::{BotApi, BotApiClient};
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::workers::{Poller, PollerConfig, UpdateSender};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::Arc;
use std::time::Duration;
use std::{error::Error, io};
use tokio::sync::{broadcast, mpsc};

#[derive(Parser)]
#[command(author, version, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch the live dashboard
    Start {
        /// Base URL of the trading bot API
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,

        /// Polling interval in seconds
        #[arg(long, value_name = "SECONDS")]
        poll_interval: Option<u64>,
    },
    /// Print a one-shot portfolio overview and exit
    Status {
        /// Base URL of the trading bot API
        #[arg(long, value_name = "BASE_URL")]
        base_url: Option<String>,
    },
}

/// Resolve the target environment: flag first, then the SURGE_API_URL
/// environment variable, then the local default. An unparseable value is an
/// error, not a fallback.
fn resolve_environment(base_url: Option<String>) -> Result<Environment, Box<dyn Error>> {
    match base_url.or_else(|| std::env::var("SURGE_API_URL").ok()) {
        Some(s) => s.parse::<Environment>().map_err(|_| {
            format!("invalid base URL '{}': expected an http(s) URL or 'local'", s).into()
        }),
        None => Ok(Environment::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            base_url,
            poll_interval,
        } => {
            let environment = resolve_environment(base_url)?;
            let interval = poll_interval
                .map(Duration::from_secs)
                .unwrap_or_else(cli_consts::polling::poll_interval);
            start(environment, interval).await
        }
        Command::Status { base_url } => {
            let environment = resolve_environment(base_url)?;
            let client = BotApiClient::new(environment);
            match client.fetch_portfolio().await {
                Ok(snapshot) => {
                    println!("Portfolio Value: ${}", snapshot.display_value());
                    println!(
                        "Last Trade: {}",
                        snapshot
                            .last_trade_label()
                            .unwrap_or_else(|| "None".to_string())
                    );
                    println!("Status: {}", snapshot.status_label());
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Failed to fetch portfolio: {}", e);
                    Err(e.into())
                }
            }
        }
    }
}

/// Starts the dashboard: spawns the polling worker, runs the TUI, and tears
/// both down cleanly.
async fn start(environment: Environment, interval: Duration) -> Result<(), Box<dyn Error>> {
    let (update_sender, update_receiver) = mpsc::channel(cli_consts::UPDATE_QUEUE_SIZE);
    let (shutdown_sender, shutdown_receiver) = broadcast::channel(1);

    let api: Arc<dyn BotApi> = Arc::new(BotApiClient::new(environment.clone()));
    let poller = Poller::new(
        api,
        UpdateSender::new(update_sender),
        PollerConfig { interval },
    );
    let poller_handle = poller.start(shutdown_receiver);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it.
    let app = ui::App::new(environment, update_receiver, shutdown_sender.clone());
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // The UI sends the shutdown signal on quit; this covers error exits.
    let _ = shutdown_sender.send(());
    let _ = poller_handle.await;

    result?;
    Ok(())
}
