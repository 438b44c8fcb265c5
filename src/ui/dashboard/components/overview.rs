//! Portfolio overview component
//!
//! Renders the portfolio value, last trade, raw snapshot JSON, and the
//! position value chart

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_overview(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let Some(snapshot) = state.portfolio() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Portfolio Value: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("${}", snapshot.display_value()),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Last Trade: ", Style::default().fg(Color::Gray)),
        Span::styled(
            snapshot
                .last_trade_label()
                .unwrap_or_else(|| "None".to_string()),
            Style::default().fg(Color::LightGreen),
        ),
    ]));
    if let Some(timestamp) = state.last_sync() {
        lines.push(Line::from(vec![
            Span::styled("Last Sync: ", Style::default().fg(Color::Gray)),
            Span::styled(timestamp.to_string(), Style::default().fg(Color::Yellow)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Env: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.environment.to_string(),
            Style::default().fg(Color::LightBlue),
        ),
    ]));
    let uptime = state.start_time.elapsed();
    lines.push(Line::from(vec![
        Span::styled("Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}m {}s", uptime.as_secs() / 60, uptime.as_secs() % 60),
            Style::default().fg(Color::LightGreen),
        ),
    ]));
    lines.push(Line::from(""));

    // Raw snapshot, shown verbatim like the observed system's JSON panel.
    let raw = serde_json::to_string_pretty(snapshot)
        .unwrap_or_else(|_| "<unserializable snapshot>".to_string());
    for raw_line in raw.lines() {
        lines.push(Line::from(Span::styled(
            raw_line.to_string(),
            Style::default().fg(Color::Green),
        )));
    }

    let overview_block = Block::default()
        .title("PORTFOLIO OVERVIEW")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let overview = Paragraph::new(lines)
        .block(overview_block)
        .wrap(Wrap { trim: false });
    f.render_widget(overview, chunks[0]);

    state.chart.render(f, chunks[1]);
}
