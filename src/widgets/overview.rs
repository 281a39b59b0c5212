//! Dashboard overview widget: key performance stats at a glance.
//!
//! Four stat tiles (users, revenue, orders, growth) rendered side by side,
//! or stacked when the cell is too narrow. All figures are mock data.

use super::{Widget, WidgetContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One stat tile: icon, label, headline value, trend.
struct Stat {
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    trend: &'static str,
    trend_up: bool,
}

const STATS: &[Stat] = &[
    Stat {
        icon: "👥",
        label: "Total Users",
        value: "1,234",
        trend: "+5.2%",
        trend_up: true,
    },
    Stat {
        icon: "💰",
        label: "Revenue",
        value: "$45,678",
        trend: "+8.1%",
        trend_up: true,
    },
    Stat {
        icon: "🛒",
        label: "Orders",
        value: "567",
        trend: "-2.3%",
        trend_up: false,
    },
    Stat {
        icon: "📈",
        label: "Growth",
        value: "12.5%",
        trend: "+1.2%",
        trend_up: true,
    },
];

/// Widget showing headline metrics for the whole dashboard.
pub struct OverviewWidget;

impl OverviewWidget {
    /// Factory function for the widget registry.
    pub fn create() -> Box<dyn Widget> {
        Box::new(Self)
    }
}

impl Widget for OverviewWidget {
    fn id(&self) -> &'static str {
        "overview"
    }

    fn render(&self, frame: &mut Frame, area: Rect, _context: &WidgetContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                "Key performance metrics",
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("  "),
            Span::styled("● Live", Style::default().fg(Color::Green)),
        ]));
        frame.render_widget(header, chunks[0]);

        // Side-by-side tiles when there is room, stacked otherwise.
        let tiles: Vec<Rect> = if chunks[1].width >= 48 {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 4); 4])
                .split(chunks[1])
                .to_vec()
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1); 4])
                .split(chunks[1])
                .to_vec()
        };

        for (stat, tile) in STATS.iter().zip(tiles.iter()) {
            render_stat(frame, *tile, stat);
        }
    }
}

fn render_stat(frame: &mut Frame, area: Rect, stat: &Stat) {
    if area.height == 0 {
        return;
    }
    let trend_color = if stat.trend_up {
        Color::Green
    } else {
        Color::Red
    };
    let mut lines = vec![Line::from(vec![
        Span::raw(stat.icon),
        Span::raw(" "),
        Span::styled(stat.label, Style::default().fg(Color::DarkGray)),
    ])];
    if area.height >= 3 {
        lines.push(Line::from(Span::styled(
            stat.value,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            stat.trend,
            Style::default().fg(trend_color),
        )));
    } else {
        // One line per stat: label and value share the row.
        lines[0].spans.push(Span::raw(" "));
        lines[0].spans.push(Span::styled(
            stat.value,
            Style::default().add_modifier(Modifier::BOLD),
        ));
        lines[0].spans.push(Span::raw(" "));
        lines[0]
            .spans
            .push(Span::styled(stat.trend, Style::default().fg(trend_color)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::{find_row_with_text, render_panel_to_buffer};

    #[test]
    fn widget_id() {
        assert_eq!(OverviewWidget.id(), "overview");
    }

    #[test]
    fn renders_all_stat_labels_when_wide() {
        let buffer = render_panel_to_buffer(&OverviewWidget, &[], 80, 8);
        for label in ["Total Users", "Revenue", "Orders", "Growth"] {
            assert!(
                find_row_with_text(&buffer, label).is_some(),
                "missing stat label '{label}'"
            );
        }
    }

    #[test]
    fn renders_mock_values() {
        let buffer = render_panel_to_buffer(&OverviewWidget, &[], 80, 8);
        assert!(find_row_with_text(&buffer, "1,234").is_some());
        assert!(find_row_with_text(&buffer, "$45,678").is_some());
    }

    #[test]
    fn narrow_cell_stacks_stats() {
        let buffer = render_panel_to_buffer(&OverviewWidget, &[], 30, 8);
        let users_row = find_row_with_text(&buffer, "Total Users");
        let revenue_row = find_row_with_text(&buffer, "Revenue");
        assert!(users_row.is_some() && revenue_row.is_some());
        assert_ne!(users_row, revenue_row, "stacked stats occupy distinct rows");
    }

    #[test]
    fn zero_area_does_not_panic() {
        let _ = render_panel_to_buffer(&OverviewWidget, &[], 1, 1);
    }
}
