//! Live config panel component
//!
//! Renders the bot's configuration verbatim as pretty-printed JSON

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_config_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = match state.config() {
        Some(config) => serde_json::to_string_pretty(config)
            .unwrap_or_else(|_| "<unserializable config>".to_string())
            .lines()
            .map(|line| Line::from(line.to_string()))
            .collect(),
        None => vec![Line::from("No config received.")],
    };

    let block = Block::default()
        .title("LIVE CONFIG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::LightCyan))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}
