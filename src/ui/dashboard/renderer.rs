//! Dashboard main renderer

use super::components::{config_panel, footer, header, logs, overview, sentiment, strategy, tabs};
use super::state::{DashboardState, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    f.render_widget(
        Block::default().style(Style::default().bg(Color::Rgb(10, 10, 26))),
        f.area(),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    tabs::render_tabs(f, main_chunks[1], state);
    render_trade_banner(f, main_chunks[2], state);
    render_content(f, main_chunks[3], state);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[4]);

    config_panel::render_config_panel(f, bottom_chunks[0], state);
    logs::render_logs_panel(f, bottom_chunks[1], state);
    footer::render_footer(f, main_chunks[5]);
}

/// One-line banner with the most recent trade.
fn render_trade_banner(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let banner = match state.portfolio() {
        Some(snapshot) => match snapshot.trade_banner() {
            Some(trade) => Paragraph::new(format!("Last Trade: {}", trade))
                .style(Style::default().fg(Color::LightGreen)),
            None => {
                Paragraph::new("No trades yet.").style(Style::default().fg(Color::LightYellow))
            }
        },
        None => Paragraph::new(""),
    };
    f.render_widget(banner, area);
}

/// Render the active tab's panel, or the sync placeholder before the first
/// successful poll.
fn render_content(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    if state.portfolio().is_none() {
        let waiting = Paragraph::new("Waiting for bot to sync...")
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(waiting, area);
        return;
    }

    match state.active_tab {
        Tab::Dashboard => overview::render_overview(f, area, state),
        Tab::Sentiment => sentiment::render_sentiment(f, area, state),
        Tab::Strategy => strategy::render_strategy(f, area, state),
    }
}
