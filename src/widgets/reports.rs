//! Reports widget: generated report list for a configured data source.
//!
//! Requires the `dataSource` config key before it renders (enforced by the
//! host via the catalog). Rows are mock data; the "generated" column is
//! derived from the current date so the list always looks recent.

use super::{Widget, WidgetContext};
use chrono::{Duration, Local};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

/// One mock report row.
struct Report {
    name: &'static str,
    format: &'static str,
    size: &'static str,
    age_days: i64,
    ready: bool,
}

const REPORTS: &[Report] = &[
    Report {
        name: "Monthly Sales Report",
        format: "PDF",
        size: "2.4 MB",
        age_days: 2,
        ready: true,
    },
    Report {
        name: "User Activity Report",
        format: "Excel",
        size: "1.8 MB",
        age_days: 5,
        ready: true,
    },
    Report {
        name: "Financial Summary",
        format: "PDF",
        size: "3.1 MB",
        age_days: 9,
        ready: false,
    },
];

/// Widget listing generated reports from one data source.
pub struct ReportsWidget;

impl ReportsWidget {
    /// Factory function for the widget registry.
    pub fn create() -> Box<dyn Widget> {
        Box::new(Self)
    }
}

impl Widget for ReportsWidget {
    fn id(&self) -> &'static str {
        "reports"
    }

    fn render(&self, frame: &mut Frame, area: Rect, context: &WidgetContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let source = context.value("dataSource").unwrap_or("?");
        let header_area = Rect { height: 1, ..area };
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Source: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                source.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        frame.render_widget(header, header_area);

        if area.height <= 1 {
            return;
        }
        let table_area = Rect {
            y: area.y + 1,
            height: area.height - 1,
            ..area
        };

        let today = Local::now().date_naive();
        let rows: Vec<Row> = REPORTS
            .iter()
            .map(|r| {
                let generated = (today - Duration::days(r.age_days))
                    .format("%b %d")
                    .to_string();
                let status = if r.ready {
                    Cell::from(Span::styled("ready", Style::default().fg(Color::Green)))
                } else {
                    Cell::from(Span::styled(
                        "pending",
                        Style::default().fg(Color::Yellow),
                    ))
                };
                Row::new(vec![
                    Cell::from(r.name),
                    Cell::from(r.format),
                    Cell::from(r.size),
                    Cell::from(generated),
                    status,
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(6),
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec!["Name", "Format", "Size", "Date", "Status"])
                .style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(table, table_area);
    }
}
