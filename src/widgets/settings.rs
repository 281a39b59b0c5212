//! Settings widget: read-only view of the mock account preferences.

use super::{Widget, WidgetContext};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One mock settings row: label plus current value.
const SETTINGS: &[(&str, &str, bool)] = &[
    ("Email Notifications", "on", true),
    ("Dark Mode", "off", false),
    ("Auto Save", "on", true),
    ("Language", "en", true),
    ("Timezone", "UTC", true),
];

/// Widget summarizing the account settings.
pub struct SettingsWidget;

impl SettingsWidget {
    /// Factory function for the widget registry.
    pub fn create() -> Box<dyn Widget> {
        Box::new(Self)
    }
}

impl Widget for SettingsWidget {
    fn id(&self) -> &'static str {
        "settings"
    }

    fn render(&self, frame: &mut Frame, area: Rect, _context: &WidgetContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let lines: Vec<Line> = SETTINGS
            .iter()
            .map(|(label, value, enabled)| {
                let value_style = if *enabled {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(vec![
                    Span::styled(
                        format!("{label:<20}"),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(*value, value_style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}
