//! Sentiment scores component

use super::super::state::DashboardState;
use super::super::utils::sentiment_color;
use crate::models::SentimentVector;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_sentiment(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = state
        .sentiment
        .scores()
        .map(|(asset, score)| {
            let tone = SentimentVector::tone(score);
            Line::from(vec![
                Span::styled(format!("{:<10}", asset), Style::default().fg(Color::White)),
                Span::styled(
                    SentimentVector::label(score),
                    Style::default()
                        .fg(sentiment_color(tone))
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title("LIVE SENTIMENT SCORES")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
