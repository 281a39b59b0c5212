#![cfg(test)]
//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helper functions for creating test terminals, extracting
//! buffer content, rendering widgets and full dashboards to buffers, and
//! creating in-memory-backed test apps.

use crate::session::DashboardSession;
use crate::store::MemoryStore;
use crate::tui::app::App;
use crate::tui::ui::render_dashboard;
use crate::widgets::{Widget, WidgetContext};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::collections::BTreeMap;
use std::time::Duration;

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    for row in 0..area.height {
        if row_contains(buffer, row, text) {
            return Some(row);
        }
    }
    None
}

/// Renders a single panel widget into a buffer of the given size.
///
/// `config` is the widget's configuration entry as `(key, value)` pairs.
pub fn render_panel_to_buffer(
    widget: &dyn Widget,
    config: &[(&str, &str)],
    width: u16,
    height: u16,
) -> Buffer {
    let config: BTreeMap<String, String> = config
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            let area = frame.area();
            let context = WidgetContext::new(&config);
            widget.render(frame, area, &context);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

/// Creates an App over an in-memory session with the given initial selection.
pub fn make_app(selection: &[&str]) -> App {
    let initial: Vec<String> = selection.iter().map(|s| s.to_string()).collect();
    let session = DashboardSession::hydrate(Box::new(MemoryStore::new()), &initial);
    App::new(session, Duration::from_millis(250))
}

/// Renders the full dashboard to a buffer and returns it for inspection.
pub fn render_dashboard_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            render_dashboard(frame, app);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}
