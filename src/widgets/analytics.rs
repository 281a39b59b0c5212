//! Analytics widget: weekly traffic chart for a configured tracking id.
//!
//! Requires the `trackingId` config key before it renders (enforced by the
//! host via the catalog). The chart itself is mock data.

use super::{Widget, WidgetContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Paragraph},
    Frame,
};

/// Mock visits per weekday.
const WEEKLY_DATA: &[(&str, u64)] = &[
    ("Mon", 60),
    ("Tue", 80),
    ("Wed", 45),
    ("Thu", 90),
    ("Fri", 75),
    ("Sat", 65),
    ("Sun", 85),
];

/// Widget charting weekly visits for one tracking id.
pub struct AnalyticsWidget;

impl AnalyticsWidget {
    /// Factory function for the widget registry.
    pub fn create() -> Box<dyn Widget> {
        Box::new(Self)
    }
}

fn average() -> u64 {
    let sum: u64 = WEEKLY_DATA.iter().map(|(_, v)| v).sum();
    sum / WEEKLY_DATA.len() as u64
}

fn peak() -> u64 {
    WEEKLY_DATA.iter().map(|(_, v)| *v).max().unwrap_or(0)
}

impl Widget for AnalyticsWidget {
    fn id(&self) -> &'static str {
        "analytics"
    }

    fn render(&self, frame: &mut Frame, area: Rect, context: &WidgetContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let tracking = context.value("trackingId").unwrap_or("?");
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Tracking: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                tracking.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Last 7 days", Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(header, chunks[0]);

        if chunks[1].height > 0 {
            let chart = BarChart::default()
                .data(WEEKLY_DATA)
                .bar_width(3)
                .bar_gap(1)
                .bar_style(Style::default().fg(Color::Cyan))
                .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
            frame.render_widget(chart, chunks[1]);
        }

        let summary = Paragraph::new(Line::from(vec![
            Span::styled("avg ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}", average())),
            Span::styled("  peak ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{}", peak())),
        ]));
        frame.render_widget(summary, chunks[2]);
    }
}
