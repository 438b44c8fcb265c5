//! Dashboard header component
//!
//! Renders the title and the bot status badges

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and the status badge row.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("NEUROMEMESURGE v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let badges = match state.portfolio() {
        Some(snapshot) => {
            let (activity_label, activity_color) = if snapshot.is_active() {
                ("ACTIVE", Color::Green)
            } else {
                ("IDLE", Color::Yellow)
            };
            Line::from(vec![
                Span::styled(
                    format!(" Status: {} ", snapshot.status_label()),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" Alpha: {} ", snapshot.alpha_label()),
                    Style::default().fg(Color::White).bg(Color::Magenta),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", activity_label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(activity_color)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Bot not running",
            Style::default().fg(Color::Red),
        )),
    };

    let badge_row = Paragraph::new(badges).alignment(Alignment::Center);
    f.render_widget(badge_row, header_chunks[1]);
}
