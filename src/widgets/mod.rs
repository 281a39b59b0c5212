//! Widget system for the deckboard dashboard.
//!
//! This module defines the `Widget` trait that all dashboard panels
//! implement, and the `WidgetRegistry` for creating them by id.
//!
//! # Architecture
//!
//! Widgets are self-contained display units rendered into a grid cell.
//! Each widget receives a [`WidgetContext`] carrying its user-supplied
//! configuration values and renders itself into the cell's inner area.
//! Widgets are stateless per render; all of their data is hardcoded mock
//! data, so rendering the same context twice draws the same content.
//!
//! The `WidgetRegistry` maps widget identifiers to factory functions. The
//! registry covers exactly the ids in [`crate::catalog::CATALOG`]; the
//! host renders a placeholder for anything else.

pub mod analytics;
pub mod notifications;
pub mod overview;
pub mod profile;
pub mod reports;
pub mod settings;

use ratatui::{layout::Rect, Frame};
use std::collections::{BTreeMap, HashMap};

/// Shared context handed to a widget at render time.
///
/// Carries the widget's own configuration entry (empty when the user has
/// supplied nothing) and the render tick for decorative animation.
pub struct WidgetContext<'a> {
    /// Configuration values for this widget (config key → value).
    pub config: &'a BTreeMap<String, String>,
    /// Monotonic render tick, for widgets that animate.
    pub tick: u64,
}

impl<'a> WidgetContext<'a> {
    /// Creates a context over the given configuration values.
    pub fn new(config: &'a BTreeMap<String, String>) -> Self {
        Self { config, tick: 0 }
    }

    /// Builder-style setter for the render tick.
    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    /// Looks up one configuration value.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

/// Trait for dashboard panel widgets.
///
/// Each widget renders mock content into the inner area of its grid cell.
/// The host owns the cell chrome (border, title, focus highlight); widgets
/// only draw their body.
pub trait Widget {
    /// Unique identifier for this widget type. Matches a catalog id.
    fn id(&self) -> &'static str;

    /// Render the widget body into `area`.
    fn render(&self, frame: &mut Frame, area: Rect, context: &WidgetContext);
}

/// Factory function type for creating widget instances.
pub type WidgetFactory = fn() -> Box<dyn Widget>;

/// Registry mapping widget identifiers to factory functions.
///
/// # Example
///
/// ```
/// use deckboard::widgets::WidgetRegistry;
///
/// let registry = WidgetRegistry::new();
/// assert!(registry.create("overview").is_some());
/// assert!(registry.create("nonexistent").is_none());
/// ```
pub struct WidgetRegistry {
    factories: HashMap<&'static str, WidgetFactory>,
}

impl WidgetRegistry {
    /// Creates a registry with all built-in widgets.
    pub fn new() -> Self {
        let mut reg = Self {
            factories: HashMap::new(),
        };
        reg.register("overview", overview::OverviewWidget::create);
        reg.register("analytics", analytics::AnalyticsWidget::create);
        reg.register("settings", settings::SettingsWidget::create);
        reg.register("profile", profile::ProfileWidget::create);
        reg.register("notifications", notifications::NotificationsWidget::create);
        reg.register("reports", reports::ReportsWidget::create);
        reg
    }

    /// Register a widget factory for the given identifier.
    ///
    /// Overwrites any existing factory for the same ID.
    pub fn register(&mut self, id: &'static str, factory: WidgetFactory) {
        self.factories.insert(id, factory);
    }

    /// Create a widget instance by identifier.
    ///
    /// Returns `None` if no factory is registered for the given ID.
    pub fn create(&self, id: &str) -> Option<Box<dyn Widget>> {
        self.factories.get(id).map(|f| f())
    }

    /// List all registered widget identifiers.
    ///
    /// The order is not guaranteed.
    pub fn available_ids(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
