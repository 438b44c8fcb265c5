//! Position value chart
//!
//! Owns the single chart instance bound to the dashboard's drawing area.
//! Lifecycle contract: at most one live instance per surface; the previous
//! instance is disposed before a replacement is built, and the instance is
//! disposed unconditionally on unmount.

use crate::models::{PortfolioSnapshot, TRACKED_ASSETS};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{BarChart, Block, BorderType, Borders, Padding, Paragraph};

/// Static valuation multipliers per tracked asset, not a live price feed.
const PRICE_MULTIPLIERS: [f64; 3] = [150.0, 0.15, 0.000011];

const BAR_COLORS: [Color; 3] = [Color::Cyan, Color::Magenta, Color::Green];

/// One chart bound to one snapshot. Rebuilt, never mutated.
#[derive(Debug)]
struct ChartInstance {
    source: PortfolioSnapshot,
    bars: [(&'static str, u64); 3],
}

impl ChartInstance {
    fn build(source: PortfolioSnapshot) -> Self {
        let mut bars = [("", 0u64); 3];
        for (i, (asset, multiplier)) in TRACKED_ASSETS.into_iter().zip(PRICE_MULTIPLIERS).enumerate()
        {
            let quantity = source.positions.get(asset).copied().unwrap_or(0.0);
            bars[i] = (asset, (quantity * multiplier).round() as u64);
        }
        Self { source, bars }
    }
}

/// Chart renderer with an explicit instance lifecycle.
#[derive(Debug, Default)]
pub struct PositionChart {
    instance: Option<ChartInstance>,
    created: u64,
    disposed: u64,
}

impl PositionChart {
    /// Rebinds the chart to a new snapshot. A no-op when the snapshot is
    /// unchanged; otherwise the previous instance is dropped before the
    /// replacement is built.
    pub fn sync(&mut self, snapshot: &PortfolioSnapshot) {
        if let Some(instance) = &self.instance {
            if instance.source == *snapshot {
                return;
            }
        }
        if self.instance.take().is_some() {
            self.disposed += 1;
        }
        self.instance = Some(ChartInstance::build(snapshot.clone()));
        self.created += 1;
    }

    /// Dispose the current instance, if any. Called on unmount.
    pub fn dispose(&mut self) {
        if self.instance.take().is_some() {
            self.disposed += 1;
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instances_created(&self) -> u64 {
        self.created
    }

    pub fn instances_disposed(&self) -> u64 {
        self.disposed
    }

    /// Bar values in `TRACKED_ASSETS` order, if a chart is mounted.
    pub fn bar_values(&self) -> Option<[u64; 3]> {
        self.instance
            .as_ref()
            .map(|instance| instance.bars.map(|(_, value)| value))
    }

    /// Draw the chart onto its surface.
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Position Value Chart")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .padding(Padding::uniform(1));

        match &self.instance {
            Some(instance) => {
                let chart = BarChart::default()
                    .block(block)
                    .data(instance.bars.as_slice())
                    .bar_width(9)
                    .bar_gap(2)
                    .bar_style(Style::default().fg(BAR_COLORS[0]))
                    .value_style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )
                    .label_style(Style::default().fg(Color::Gray));
                f.render_widget(chart, area);
            }
            None => {
                let placeholder = Paragraph::new("No position data yet")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                f.render_widget(placeholder, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(sol: f64) -> PortfolioSnapshot {
        PortfolioSnapshot {
            portfolio_value: Some(300.0),
            positions: [("SOLUSD".to_string(), sol)].into_iter().collect(),
            last_trade: None,
            status: None,
            alpha: None,
        }
    }

    #[test]
    fn bar_values_use_static_multipliers() {
        let mut chart = PositionChart::default();
        chart.sync(&snapshot(2.0));
        // 2 SOLUSD at the fixed 150 multiplier; untracked positions are zero.
        assert_eq!(chart.bar_values(), Some([300, 0, 0]));
    }

    #[test]
    fn missing_positions_render_zero_bars() {
        let mut chart = PositionChart::default();
        chart.sync(&PortfolioSnapshot::default());
        assert_eq!(chart.bar_values(), Some([0, 0, 0]));
    }

    #[test]
    fn snapshot_change_disposes_before_recreating() {
        let mut chart = PositionChart::default();
        chart.sync(&snapshot(2.0));
        assert_eq!(chart.instances_created(), 1);
        assert_eq!(chart.instances_disposed(), 0);

        chart.sync(&snapshot(3.0));
        assert_eq!(chart.instances_created(), 2);
        assert_eq!(chart.instances_disposed(), 1);
        assert!(chart.is_mounted());
    }

    #[test]
    fn identical_snapshot_keeps_the_instance() {
        let mut chart = PositionChart::default();
        chart.sync(&snapshot(2.0));
        chart.sync(&snapshot(2.0));
        assert_eq!(chart.instances_created(), 1);
        assert_eq!(chart.instances_disposed(), 0);
    }

    #[test]
    fn unmount_disposes_unconditionally() {
        let mut chart = PositionChart::default();
        chart.sync(&snapshot(2.0));
        chart.dispose();
        assert!(!chart.is_mounted());
        assert_eq!(chart.instances_disposed(), 1);

        // Disposing again is a no-op.
        chart.dispose();
        assert_eq!(chart.instances_disposed(), 1);
    }
}
