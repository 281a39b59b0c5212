//! Notifications widget: recent alerts with unread markers.

use super::{Widget, WidgetContext};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One mock notification entry.
struct Notification {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    age: &'static str,
    read: bool,
    important: bool,
}

const NOTIFICATIONS: &[Notification] = &[
    Notification {
        icon: "🔔",
        title: "New message received",
        description: "You have a new message from Sarah Johnson",
        age: "5m",
        read: false,
        important: true,
    },
    Notification {
        icon: "📊",
        title: "Report generated",
        description: "Your monthly analytics report is ready",
        age: "30m",
        read: false,
        important: false,
    },
    Notification {
        icon: "⚙️",
        title: "System maintenance",
        description: "Scheduled maintenance will occur tonight",
        age: "2h",
        read: true,
        important: true,
    },
    Notification {
        icon: "🔒",
        title: "Security alert",
        description: "New login detected from unknown device",
        age: "1d",
        read: true,
        important: true,
    },
];

/// Widget listing recent notifications, unread first in source order.
pub struct NotificationsWidget;

impl NotificationsWidget {
    /// Factory function for the widget registry.
    pub fn create() -> Box<dyn Widget> {
        Box::new(Self)
    }
}

impl Widget for NotificationsWidget {
    fn id(&self) -> &'static str {
        "notifications"
    }

    fn render(&self, frame: &mut Frame, area: Rect, _context: &WidgetContext) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let unread = NOTIFICATIONS.iter().filter(|n| !n.read).count();
        let mut lines = vec![Line::from(Span::styled(
            format!("{unread} unread"),
            Style::default().fg(Color::DarkGray),
        ))];

        for n in NOTIFICATIONS {
            let title_style = if n.read {
                Style::default().add_modifier(Modifier::DIM)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let mut spans = vec![
                Span::raw(if n.read { "  " } else { "● " }),
                Span::raw(n.icon),
                Span::raw(" "),
                Span::styled(n.title, title_style),
            ];
            if n.important {
                spans.push(Span::styled(" !", Style::default().fg(Color::Yellow)));
            }
            spans.push(Span::styled(
                format!("  {}", n.age),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::from(spans));
            // Description fits only in taller cells.
            if area.height as usize > 1 + NOTIFICATIONS.len() * 2 {
                lines.push(Line::from(Span::styled(
                    format!("    {}", n.description),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_utils::{find_row_with_text, render_panel_to_buffer};

    #[test]
    fn widget_id() {
        assert_eq!(NotificationsWidget.id(), "notifications");
    }

    #[test]
    fn renders_unread_count() {
        let buffer = render_panel_to_buffer(&NotificationsWidget, &[], 60, 12);
        assert!(find_row_with_text(&buffer, "2 unread").is_some());
    }

    #[test]
    fn renders_all_titles() {
        let buffer = render_panel_to_buffer(&NotificationsWidget, &[], 60, 12);
        for title in [
            "New message received",
            "Report generated",
            "System maintenance",
            "Security alert",
        ] {
            assert!(
                find_row_with_text(&buffer, title).is_some(),
                "missing notification '{title}'"
            );
        }
    }

    #[test]
    fn tall_cell_shows_descriptions() {
        let buffer = render_panel_to_buffer(&NotificationsWidget, &[], 60, 16);
        assert!(find_row_with_text(&buffer, "Sarah Johnson").is_some());
    }

    #[test]
    fn short_cell_hides_descriptions() {
        let buffer = render_panel_to_buffer(&NotificationsWidget, &[], 60, 6);
        assert!(find_row_with_text(&buffer, "Sarah Johnson").is_none());
    }
}
