//! Strategy selector component
//!
//! Local-only selection: the observed system never transmits the chosen mode
//! to the backend.

use super::super::state::{DashboardState, StrategyMode};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_strategy(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut mode_spans = Vec::new();
    for mode in StrategyMode::ALL {
        let style = if mode == state.strategy {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).bg(Color::Rgb(42, 42, 74))
        };
        mode_spans.push(Span::styled(format!(" {} ", mode), style));
        mode_spans.push(Span::raw("  "));
    }

    let lines = vec![
        Line::from(mode_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current Mode: ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.strategy.to_string(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Left/Right to switch mode",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("TRADING STRATEGY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
