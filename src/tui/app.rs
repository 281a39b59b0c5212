//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! The [`App`] owns the dashboard session plus the transient interaction
//! state: which pane has focus, which sidebar entry or grid cell is
//! selected, and any in-progress text input (snapshot name, config form).

use crate::catalog::{self, CATALOG};
use crate::session::DashboardSession;
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crate::widgets::WidgetRegistry;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::collections::BTreeMap;
use std::io::{self, stdout};
use std::time::{Duration, Instant};

/// How long transient status messages stay visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Sidebar widget-toggle list.
    Widgets,
    /// Sidebar saved-layouts list.
    Layouts,
    /// The grid canvas.
    Grid,
}

/// Modal input state. At most one text input is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Regular navigation.
    Normal,
    /// Collecting a name for "save current layout".
    SavingName {
        /// Name typed so far.
        buffer: String,
    },
    /// Collecting configuration values for one widget.
    EditingConfig(ConfigForm),
}

/// One field of a configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Config key as stored in the config map.
    pub key: String,
    /// Human-friendly label derived from the key.
    pub label: String,
    /// Current input value.
    pub value: String,
}

/// In-progress configuration form for a single widget.
///
/// There is at most one of these alive (held by [`InputMode`]), so only
/// one widget is editable at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigForm {
    /// Widget being configured.
    pub widget_id: String,
    /// Fields in the order the catalog declares them.
    pub fields: Vec<FormField>,
    /// Index of the field receiving keystrokes.
    pub active: usize,
}

impl ConfigForm {
    /// Builds a form for `id`, seeded with any partial existing values.
    ///
    /// Returns `None` when `id` is not in the catalog.
    pub fn seeded(id: &str, session: &DashboardSession) -> Option<Self> {
        let descriptor = catalog::descriptor(id)?;
        let existing = session.prefs().config_for(id);
        let fields = descriptor
            .required_config_keys
            .iter()
            .map(|key| FormField {
                key: key.to_string(),
                label: format_label(key),
                value: existing
                    .and_then(|values| values.get(*key))
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();
        Some(Self {
            widget_id: id.to_string(),
            fields,
            active: 0,
        })
    }

    /// Current values keyed by config key.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.key.clone(), f.value.trim().to_string()))
            .collect()
    }

    /// `true` when every field has a non-empty value.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| !f.value.trim().is_empty())
    }

    /// Moves input focus to the next field, wrapping.
    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + 1) % self.fields.len();
        }
    }

    /// Moves input focus to the previous field, wrapping.
    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.active = (self.active + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Appends a character to the active field.
    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.push(c);
        }
    }

    /// Removes the last character of the active field.
    pub fn pop_char(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.value.pop();
        }
    }
}

/// Formats a camelCase config key for display (`trackingId` → `Tracking Id`).
pub fn format_label(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}

/// Core application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Live dashboard state bound to its persistence store.
    pub session: DashboardSession,
    /// Pane with keyboard focus.
    pub focus: Focus,
    /// Selected row in the sidebar widget list.
    pub widget_index: usize,
    /// Selected row in the sidebar saved-layouts list.
    pub layout_index: usize,
    /// Focused cell, as an index into the layout order.
    pub grid_index: usize,
    /// Modal input state (normal, naming a snapshot, editing config).
    pub mode: InputMode,
    /// Temporary status message shown in the footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Count of ticks processed (drives decorative animation).
    pub tick_count: u64,
    /// Widget factories keyed by catalog id.
    pub registry: WidgetRegistry,
    tick_rate: Duration,
}

impl App {
    /// Creates a new App over a hydrated session.
    pub fn new(session: DashboardSession, tick_rate: Duration) -> Self {
        Self {
            should_quit: false,
            session,
            focus: Focus::Widgets,
            widget_index: 0,
            layout_index: 0,
            grid_index: 0,
            mode: InputMode::Normal,
            status_message: None,
            tick_count: 0,
            registry: WidgetRegistry::new(),
            tick_rate,
        }
    }

    /// Widget id of the focused grid cell, if the grid is non-empty.
    pub fn focused_cell_id(&self) -> Option<&str> {
        self.session
            .layout()
            .get(self.grid_index)
            .map(|cell| cell.id.as_str())
    }

    /// Name of the selected saved layout, if any exist.
    pub fn selected_snapshot_name(&self) -> Option<String> {
        self.session
            .snapshots()
            .iter()
            .nth(self.layout_index)
            .map(|s| s.name.clone())
    }

    /// Advances focus: widgets → layouts → grid → widgets.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Widgets => Focus::Layouts,
            Focus::Layouts => Focus::Grid,
            Focus::Grid => Focus::Widgets,
        };
    }

    /// Shows a transient footer message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_TTL));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Clamps selection indices after the underlying lists changed.
    fn clamp_indices(&mut self) {
        self.widget_index = self.widget_index.min(CATALOG.len().saturating_sub(1));
        self.layout_index = self
            .layout_index
            .min(self.session.snapshots().len().saturating_sub(1));
        self.grid_index = self
            .grid_index
            .min(self.session.layout().len().saturating_sub(1));
    }

    /// Applies a session-mutating action produced by key handling.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::ToggleWidget(id) => {
                let selected = self.session.toggle_widget(&id);
                if !selected {
                    // If the removed widget was mid-configuration, drop the form.
                    if let InputMode::EditingConfig(form) = &self.mode {
                        if form.widget_id == id {
                            self.mode = InputMode::Normal;
                        }
                    }
                }
                self.clamp_indices();
            }
            Action::SaveSnapshot(name) => match self.session.save_snapshot(&name) {
                Ok(()) => {
                    self.mode = InputMode::Normal;
                    self.set_status(format!("Saved layout '{}'", name.trim()));
                    self.clamp_indices();
                }
                // Rejected input: stay in naming mode so the user can fix it.
                Err(e) => self.set_status(e.to_string()),
            },
            Action::ApplySnapshot(name) => match self.session.apply_snapshot(&name) {
                Ok(()) => {
                    self.set_status(format!("Applied layout '{name}'"));
                    self.clamp_indices();
                }
                Err(e) => self.set_status(e.to_string()),
            },
            Action::DeleteSnapshot(name) => {
                self.session.delete_snapshot(&name);
                self.clamp_indices();
            }
            Action::LayoutChanged(layout) => self.session.apply_layout_change(layout),
            Action::SubmitConfig { id, values } => {
                self.session.set_widget_config(&id, values);
                self.mode = InputMode::Normal;
                let title = catalog::descriptor(&id).map_or(id.as_str(), |d| d.title);
                self.set_status(format!("{title} configured"));
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal =
            Terminal::new(backend).expect("failed to create ratatui terminal instance");
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();

        loop {
            terminal.draw(|frame| {
                render_dashboard(frame, self);
            })?;

            match event_handler.next(&mut reader).await? {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    self.apply_action(action);
                    if self.should_quit {
                        return Ok(());
                    }
                }
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                }
                Event::Resize(_, _) => {}
            }
        }
    }
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests;
