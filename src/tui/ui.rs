//! Main rendering orchestration for the dashboard.
//!
//! Composes the header, sidebar (widget toggles + saved layouts), grid
//! canvas, and footer. The canvas is the widget host: for every selected
//! widget it renders the live widget, a configuration form, or an
//! unknown-widget placeholder, based on the catalog and the config state.

use crate::catalog::{self, CATALOG};
use crate::layout::{GridCell, GRID_COLUMNS};
use crate::tui::app::{App, ConfigForm, Focus, InputMode};
use crate::widgets::WidgetContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::BTreeMap;
use std::time::Instant;

/// Header text displayed at the top of the dashboard.
const HEADER_TEXT: &str = "Deckboard";

/// Version string shown in the header (right-aligned).
const VERSION_TEXT: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 32;

/// Terminal rows per vertical grid unit.
const ROWS_PER_GRID_UNIT: u16 = 2;

/// Renders the full dashboard: header, sidebar, grid canvas, footer.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(chunks[1]);

    render_sidebar(frame, body[0], app);
    render_canvas(frame, body[1], app);
    render_footer(frame, chunks[2], app);
}

/// Header with title (left) and version (right-aligned).
fn render_header(frame: &mut Frame, area: Rect) {
    let width = area.width as usize;
    let padding = width
        .saturating_sub(HEADER_TEXT.len())
        .saturating_sub(VERSION_TEXT.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(HEADER_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding)),
        Span::styled(VERSION_TEXT, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Sidebar: widget toggle list on top, saved layouts below.
fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CATALOG.len() as u16 + 2),
            Constraint::Min(4),
        ])
        .split(area);

    render_widget_toggles(frame, chunks[0], app);
    render_saved_layouts(frame, chunks[1], app);
}

/// Checkbox list of catalog widgets.
fn render_widget_toggles(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Widgets;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Panels")
        .border_style(section_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = CATALOG
        .iter()
        .enumerate()
        .map(|(idx, descriptor)| {
            let checked = app.session.prefs().is_selected(descriptor.id);
            let marker = if checked { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if checked {
                style = style.fg(Color::Cyan);
            }
            if focused && idx == app.widget_index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(
                format!("{marker} {} {}", descriptor.icon, descriptor.title),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Saved layout list plus the save-name input when naming.
fn render_saved_layouts(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Layouts;
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Layouts")
        .border_style(section_border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if let InputMode::SavingName { buffer } = &app.mode {
        lines.push(Line::from(vec![
            Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
            Span::raw(buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            "[s] Save current layout",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if app.session.snapshots().is_empty() {
        lines.push(Line::from(Span::styled(
            "No saved layouts.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    } else {
        for (idx, snapshot) in app.session.snapshots().iter().enumerate() {
            let mut style = Style::default();
            if focused && idx == app.layout_index {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(Span::styled(
                format!("{} ({} panels)", snapshot.name, snapshot.selection.len()),
                style,
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The grid canvas: one bordered cell per selected widget.
fn render_canvas(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.session.selection().is_empty() {
        render_empty_state(frame, area);
        return;
    }

    let empty_config = BTreeMap::new();
    let layout = app.session.layout().to_vec();
    for (idx, cell) in layout.iter().enumerate() {
        let rect = cell_rect(area, cell);
        if rect.width < 2 || rect.height < 2 {
            continue;
        }

        let descriptor = catalog::descriptor(&cell.id);
        let title = match descriptor {
            Some(d) => format!(" {} {} ", d.icon, d.title),
            None => " Component ".to_string(),
        };
        let cell_focused = app.focus == Focus::Grid && idx == app.grid_index;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if cell_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(rect);
        // Cells may overlap after manual moves; clear before drawing.
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);
        if inner.width == 0 || inner.height == 0 {
            continue;
        }

        let Some(descriptor) = descriptor else {
            render_unknown_widget(frame, inner, &cell.id);
            continue;
        };

        let editing_form = match &app.mode {
            InputMode::EditingConfig(form) if form.widget_id == cell.id => Some(form.clone()),
            _ => None,
        };

        if editing_form.is_none() && app.session.is_ready(&cell.id) {
            let config = app
                .session
                .prefs()
                .config_for(&cell.id)
                .unwrap_or(&empty_config);
            let context = WidgetContext::new(config).with_tick(app.tick_count);
            match app.registry.create(&cell.id) {
                Some(widget) => widget.render(frame, inner, &context),
                None => render_unknown_widget(frame, inner, &cell.id),
            }
        } else {
            render_config_form(frame, inner, app, descriptor.title, &cell.id, editing_form);
        }
    }
}

/// Placeholder for a selection entry with no catalog descriptor.
///
/// Terminal for that cell only; the rest of the dashboard renders normally.
fn render_unknown_widget(frame: &mut Frame, area: Rect, id: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Component not found",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("No widget registered for '{id}'"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Configuration-collection form for a widget that is not ready, or that
/// the user is actively editing.
///
/// When `form` is `Some`, keystrokes are being routed here and the active
/// field shows a cursor; otherwise the form is a seeded preview with a
/// hint for entering edit mode.
fn render_config_form(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    id: &str,
    form: Option<ConfigForm>,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("Configure {title}"),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "This panel needs some information to get started.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::raw(""),
    ];

    match form {
        Some(form) => {
            for (idx, field) in form.fields.iter().enumerate() {
                let active = idx == form.active;
                let label_style = if active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mut spans = vec![
                    Span::styled(format!("{}: ", field.label), label_style),
                    Span::raw(field.value.clone()),
                ];
                if active {
                    spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
                }
                lines.push(Line::from(spans));
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "[Enter] Save and render  [Esc] Cancel",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {
            // Seed the preview with whatever partial values exist.
            let existing = app.session.prefs().config_for(id);
            if let Some(descriptor) = catalog::descriptor(id) {
                for key in descriptor.required_config_keys {
                    let value = existing
                        .and_then(|values| values.get(*key))
                        .map(String::as_str)
                        .unwrap_or("");
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{}: ", crate::tui::app::format_label(key)),
                            Style::default().fg(Color::DarkGray),
                        ),
                        Span::raw(value.to_string()),
                    ]));
                }
            }
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                "[e] Configure",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Empty-dashboard message shown when nothing is selected.
fn render_empty_state(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "Your dashboard is empty",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Select panels from the sidebar to customize your dashboard.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "[Tab] to focus the sidebar, [Space] to add a panel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}

/// Footer: key hints for the current focus/mode, or the status message.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some((msg, expiry)) = &app.status_message {
        if Instant::now() < *expiry {
            Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            hint_line(app)
        }
    } else {
        hint_line(app)
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn hint_line(app: &App) -> Line<'static> {
    let hints = match &app.mode {
        InputMode::SavingName { .. } => "[Enter] Save  [Esc] Cancel",
        InputMode::EditingConfig(_) => "[Enter] Save  [Tab] Next field  [Esc] Cancel",
        InputMode::Normal => match app.focus {
            Focus::Widgets => "[j/k] Navigate  [Space] Toggle  [s] Save layout  [Tab] Focus  [q] Quit",
            Focus::Layouts => "[j/k] Navigate  [Enter] Apply  [d] Delete  [Tab] Focus  [q] Quit",
            Focus::Grid => {
                "[j/k] Cell  [arrows] Move  [H/J/K/L] Resize  [e] Configure  [Tab] Focus  [q] Quit"
            }
        },
    };
    Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
}

fn section_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Maps a grid cell to terminal coordinates inside `canvas`.
///
/// Horizontal placement scales proportionally onto the 12-unit canvas
/// (computing both edges independently avoids cumulative rounding drift);
/// vertical placement uses a fixed row height per grid unit, clipped to
/// the canvas bottom.
fn cell_rect(canvas: Rect, cell: &GridCell) -> Rect {
    let cols = u32::from(GRID_COLUMNS);
    let x_unit = u32::from(cell.x.min(GRID_COLUMNS));
    let x_end_unit = u32::from((cell.x + cell.w).min(GRID_COLUMNS));

    let x0 = canvas.x + (x_unit * u32::from(canvas.width) / cols) as u16;
    let x1 = canvas.x + (x_end_unit * u32::from(canvas.width) / cols) as u16;

    let y0 = canvas.y.saturating_add(cell.y.saturating_mul(ROWS_PER_GRID_UNIT));
    let bottom = canvas.y.saturating_add(canvas.height);
    if y0 >= bottom || x1 <= x0 {
        return Rect::default();
    }
    let height = (cell.h.saturating_mul(ROWS_PER_GRID_UNIT)).min(bottom - y0);

    Rect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height,
    }
}
