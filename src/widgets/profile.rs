//! User profile widget: contact card with mock account details.

use super::{Widget, WidgetContext};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const NAME: &str = "John Doe";
const ROLE: &str = "Senior Developer";
const COMPANY: &str = "Tech Corp";
const EMAIL: &str = "john.doe@example.com";
const PHONE: &str = "+1 (555) 123-4567";

/// Widget showing the signed-in user's profile card.
pub struct ProfileWidget;

impl ProfileWidget {
    /// Factory function for the widget registry.
    pub fn create() -> Box<dyn Widget> {
        Box::new(Self)
    }
}

impl Widget for ProfileWidget {
    fn id(&self) -> &'static str {
        "profile"
    }

    fn render(&self, frame: &mut Frame, area: Rect, _context: &WidgetContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let field = |label: &'static str, value: &'static str| {
            Line::from(vec![
                Span::styled(format!("{label:<9}"), Style::default().fg(Color::DarkGray)),
                Span::raw(value),
            ])
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(NAME, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(ROLE, Style::default().fg(Color::Cyan)),
            ]),
            Line::raw(""),
            field("Company", COMPANY),
            field("Email", EMAIL),
            field("Phone", PHONE),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}
