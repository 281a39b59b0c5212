//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.
//! Key handling mutates navigation state directly on the [`App`] and
//! returns an [`Action`] for anything that touches the dashboard session,
//! keeping session mutations in one place (`App::apply_action`).

use crate::catalog::CATALOG;
use crate::layout::GridCell;
use crate::tui::app::{App, ConfigForm, Focus, InputMode};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyModifiers,
};
use futures::StreamExt;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore mouse, focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
///
/// Every variant except `None`/`Quit` is a dashboard session mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Toggle the widget with the given id in or out of the selection.
    ToggleWidget(String),
    /// Save the live state as a snapshot with the given name.
    SaveSnapshot(String),
    /// Apply the snapshot with the given name.
    ApplySnapshot(String),
    /// Delete the snapshot with the given name.
    DeleteSnapshot(String),
    /// Replace the grid geometry (user moved or resized a cell).
    LayoutChanged(Vec<GridCell>),
    /// Store submitted configuration values for one widget.
    SubmitConfig {
        /// Widget being configured.
        id: String,
        /// Validated form values.
        values: BTreeMap<String, String>,
    },
}

/// Handles a key event by dispatching to the mode- and focus-specific handler.
///
/// Text-input modes (snapshot naming, config form) consume printable keys,
/// so only Ctrl-C quits unconditionally; `q` quits from normal mode.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Global: Ctrl-C always quits, even inside text input.
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return Action::Quit;
    }

    match app.mode.clone() {
        InputMode::SavingName { buffer } => handle_naming_key(app, key, buffer),
        InputMode::EditingConfig(form) => handle_form_key(app, key, form),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// Key handling for normal (non-text-input) mode.
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => return Action::Quit,
        KeyCode::Tab => {
            app.cycle_focus();
            return Action::None;
        }
        KeyCode::Char('s') => {
            app.mode = InputMode::SavingName {
                buffer: String::new(),
            };
            return Action::None;
        }
        KeyCode::Esc => {
            app.status_message = None;
            return Action::None;
        }
        _ => {}
    }

    match app.focus {
        Focus::Widgets => handle_widgets_key(app, key),
        Focus::Layouts => handle_layouts_key(app, key),
        Focus::Grid => handle_grid_key(app, key),
    }
}

/// Sidebar widget-toggle section.
fn handle_widgets_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if app.widget_index + 1 < CATALOG.len() {
                app.widget_index += 1;
            }
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.widget_index = app.widget_index.saturating_sub(1);
            Action::None
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            Action::ToggleWidget(CATALOG[app.widget_index].id.to_string())
        }
        _ => Action::None,
    }
}

/// Sidebar saved-layouts section.
fn handle_layouts_key(app: &mut App, key: KeyEvent) -> Action {
    let count = app.session.snapshots().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.layout_index + 1 < count {
                app.layout_index += 1;
            }
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.layout_index = app.layout_index.saturating_sub(1);
            Action::None
        }
        KeyCode::Enter | KeyCode::Char('a') => match app.selected_snapshot_name() {
            Some(name) => Action::ApplySnapshot(name),
            None => Action::None,
        },
        KeyCode::Char('d') | KeyCode::Delete => match app.selected_snapshot_name() {
            Some(name) => Action::DeleteSnapshot(name),
            None => Action::None,
        },
        _ => Action::None,
    }
}

/// Grid canvas: cell focus, move, resize, configure.
fn handle_grid_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') => {
            if !app.session.layout().is_empty()
                && app.grid_index + 1 < app.session.layout().len()
            {
                app.grid_index += 1;
            }
            Action::None
        }
        KeyCode::Char('k') => {
            app.grid_index = app.grid_index.saturating_sub(1);
            Action::None
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            let Some(id) = app.focused_cell_id().map(str::to_string) else {
                return Action::None;
            };
            match ConfigForm::seeded(&id, &app.session) {
                Some(form) if !form.fields.is_empty() => {
                    app.mode = InputMode::EditingConfig(form);
                }
                Some(_) => {
                    app.set_status(format!("'{id}' needs no configuration"));
                }
                None => {
                    app.set_status(format!("Unknown widget '{id}'"));
                }
            }
            Action::None
        }
        KeyCode::Left => move_focused_cell(app, -1, 0),
        KeyCode::Right => move_focused_cell(app, 1, 0),
        KeyCode::Up => move_focused_cell(app, 0, -1),
        KeyCode::Down => move_focused_cell(app, 0, 1),
        KeyCode::Char('H') => resize_focused_cell(app, -1, 0),
        KeyCode::Char('L') => resize_focused_cell(app, 1, 0),
        KeyCode::Char('K') => resize_focused_cell(app, 0, -1),
        KeyCode::Char('J') => resize_focused_cell(app, 0, 1),
        _ => Action::None,
    }
}

/// Snapshot-name input mode.
fn handle_naming_key(app: &mut App, key: KeyEvent, mut buffer: String) -> Action {
    match key.code {
        KeyCode::Esc => {
            app.mode = InputMode::Normal;
            Action::None
        }
        KeyCode::Enter => Action::SaveSnapshot(buffer),
        KeyCode::Backspace => {
            buffer.pop();
            app.mode = InputMode::SavingName { buffer };
            Action::None
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            app.mode = InputMode::SavingName { buffer };
            Action::None
        }
        _ => Action::None,
    }
}

/// Config-form input mode.
fn handle_form_key(app: &mut App, key: KeyEvent, mut form: ConfigForm) -> Action {
    match key.code {
        KeyCode::Esc => {
            // Cancel: exit editing without mutating any configuration.
            app.mode = InputMode::Normal;
            Action::None
        }
        KeyCode::Enter => {
            if form.is_complete() {
                Action::SubmitConfig {
                    id: form.widget_id.clone(),
                    values: form.values(),
                }
            } else {
                app.set_status("Please fill out all required fields.");
                Action::None
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            form.next_field();
            app.mode = InputMode::EditingConfig(form);
            Action::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.prev_field();
            app.mode = InputMode::EditingConfig(form);
            Action::None
        }
        KeyCode::Backspace => {
            form.pop_char();
            app.mode = InputMode::EditingConfig(form);
            Action::None
        }
        KeyCode::Char(c) => {
            form.push_char(c);
            app.mode = InputMode::EditingConfig(form);
            Action::None
        }
        _ => Action::None,
    }
}

/// Moves the focused cell by one grid unit, clamped to the canvas.
fn move_focused_cell(app: &App, dx: i32, dy: i32) -> Action {
    shift_focused_cell(app, dx, dy, false)
}

/// Resizes the focused cell by one grid unit, keeping it at least 1×1.
fn resize_focused_cell(app: &App, dw: i32, dh: i32) -> Action {
    shift_focused_cell(app, dw, dh, true)
}

fn shift_focused_cell(app: &App, dx: i32, dy: i32, resize: bool) -> Action {
    let layout = app.session.layout();
    let Some(cell) = layout.get(app.grid_index) else {
        return Action::None;
    };

    let mut next = cell.clone();
    if resize {
        let max_w = i32::from(crate::layout::GRID_COLUMNS.saturating_sub(cell.x));
        next.w = (i32::from(cell.w) + dx).clamp(1, max_w.max(1)) as u16;
        next.h = (i32::from(cell.h) + dy).max(1) as u16;
    } else {
        let max_x = i32::from(crate::layout::GRID_COLUMNS.saturating_sub(cell.w));
        next.x = (i32::from(cell.x) + dx).clamp(0, max_x) as u16;
        next.y = (i32::from(cell.y) + dy).max(0) as u16;
    }

    if next == *cell {
        return Action::None;
    }

    let mut new_layout = layout.to_vec();
    new_layout[app.grid_index] = next;
    Action::LayoutChanged(new_layout)
}
