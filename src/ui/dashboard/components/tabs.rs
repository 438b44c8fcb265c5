//! Dashboard tab bar component

use super::super::state::{DashboardState, Tab};

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

pub fn render_tabs(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let titles = Tab::ALL.map(|tab| tab.title());
    let tabs = Tabs::new(titles.to_vec())
        .select(state.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, area);
}
