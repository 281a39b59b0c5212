//! The dashboard session: live state and its persistence rules.
//!
//! A session owns the widget selection and configuration
//! ([`Preferences`]), the active grid layout, and the registry of named
//! snapshots, together with the store they persist to. Every user action
//! mutates in-memory state synchronously and then writes the affected
//! key(s); hydration reads all keys once at startup and falls back to
//! defaults for anything missing or corrupt.

pub mod prefs;

pub use prefs::{ConfigMap, Preferences};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::layout::snapshots::{SnapshotError, SnapshotRegistry};
use crate::layout::{apply_external_change, default_placement, reconcile, GridCell};
use crate::store::{DashStore, StoreError};

/// Persisted state keys. One JSON value per key.
pub mod keys {
    /// Ordered list of selected widget ids.
    pub const SELECTED_COMPONENTS: &str = "dashboard_selected_components";
    /// Vector of saved layout snapshots.
    pub const LAYOUTS_VECTOR: &str = "dashboard_layouts_vector";
    /// Grid geometry of the live layout.
    pub const ACTIVE_LAYOUT: &str = "active_layout";
    /// Per-widget configuration values.
    pub const COMPONENT_PROPS: &str = "dashboard_component_props";
}

/// Live dashboard state bound to a persistence store.
pub struct DashboardSession {
    prefs: Preferences,
    layout: Vec<GridCell>,
    snapshots: SnapshotRegistry,
    store: Box<dyn DashStore>,
}

impl DashboardSession {
    /// Hydrates a session from `store`.
    ///
    /// Missing keys use defaults: `initial_selection` for the selection
    /// (the out-of-the-box widget set), empty registry and config, and a
    /// freshly generated layout. A persisted layout, when present, is
    /// used — then reconciled against the selection so stale cells from a
    /// partial write cannot survive. A corrupt value under any key is
    /// logged and treated as missing; hydration itself never fails.
    pub fn hydrate(store: Box<dyn DashStore>, initial_selection: &[String]) -> Self {
        let selected: Vec<String> = load_key(store.as_ref(), keys::SELECTED_COMPONENTS)
            .unwrap_or_else(|| initial_selection.to_vec());
        let config: ConfigMap =
            load_key(store.as_ref(), keys::COMPONENT_PROPS).unwrap_or_default();
        let snapshots: SnapshotRegistry =
            load_key(store.as_ref(), keys::LAYOUTS_VECTOR).unwrap_or_default();
        let prefs = Preferences::new(selected, config);

        let layout = match load_key::<Vec<GridCell>>(store.as_ref(), keys::ACTIVE_LAYOUT) {
            Some(saved) => reconcile(&saved, prefs.selected()),
            None => default_placement(prefs.selected()),
        };

        Self {
            prefs,
            layout,
            snapshots,
            store,
        }
    }

    /// Selected widget ids in placement order.
    pub fn selection(&self) -> &[String] {
        self.prefs.selected()
    }

    /// The live grid layout.
    pub fn layout(&self) -> &[GridCell] {
        &self.layout
    }

    /// The saved snapshot registry.
    pub fn snapshots(&self) -> &SnapshotRegistry {
        &self.snapshots
    }

    /// Selection and configuration state.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    /// Toggles a widget in or out of the selection.
    ///
    /// The layout is reconciled in memory (removal keeps the surviving
    /// geometry untouched, addition appends a default-placed cell) but not
    /// persisted — the user may still want to arrange the new cell, and
    /// the next geometry change or restart reconciliation covers it.
    /// Returns `true` if the widget is selected afterwards.
    pub fn toggle_widget(&mut self, id: &str) -> bool {
        let now_selected = self.prefs.toggle(id);
        self.layout = reconcile(&self.layout, self.prefs.selected());
        self.persist(keys::SELECTED_COMPONENTS, &self.prefs.selected().to_vec());
        if !now_selected {
            // Deselection also dropped the widget's config; that removal
            // must not outlive the session.
            self.persist(keys::COMPONENT_PROPS, self.prefs.config());
        }
        now_selected
    }

    /// Replaces one widget's configuration and persists the config map.
    pub fn set_widget_config(
        &mut self,
        id: &str,
        values: std::collections::BTreeMap<String, String>,
    ) {
        self.prefs.set_config(id, values);
        self.persist(keys::COMPONENT_PROPS, self.prefs.config());
    }

    /// Accepts a geometry change from the rendering surface (move/resize).
    ///
    /// Structurally equal layouts are ignored, so an echo of the layout
    /// the engine just emitted neither rewrites storage nor loops back
    /// into the UI.
    pub fn apply_layout_change(&mut self, new_layout: Vec<GridCell>) {
        if apply_external_change(&mut self.layout, new_layout) {
            self.persist(keys::ACTIVE_LAYOUT, &self.layout);
        }
    }

    /// Saves the live state as a snapshot named `name`.
    pub fn save_snapshot(&mut self, name: &str) -> Result<(), SnapshotError> {
        self.snapshots.save(
            name,
            self.prefs.selected().to_vec(),
            self.layout.clone(),
            self.prefs.config().clone(),
        )?;
        self.persist(keys::LAYOUTS_VECTOR, &self.snapshots);
        Ok(())
    }

    /// Replaces the live selection, layout, and configuration with the
    /// snapshot named `name`. All three change together or not at all.
    pub fn apply_snapshot(&mut self, name: &str) -> Result<(), SnapshotError> {
        let snapshot = self.snapshots.get(name)?.clone();
        self.prefs.replace(snapshot.selection, snapshot.config);
        self.layout = snapshot.layout;
        self.persist(keys::SELECTED_COMPONENTS, &self.prefs.selected().to_vec());
        self.persist(keys::ACTIVE_LAYOUT, &self.layout);
        self.persist(keys::COMPONENT_PROPS, self.prefs.config());
        Ok(())
    }

    /// Deletes the snapshot named `name`. Missing names are a no-op.
    pub fn delete_snapshot(&mut self, name: &str) {
        self.snapshots.delete(name);
        self.persist(keys::LAYOUTS_VECTOR, &self.snapshots);
    }

    /// Returns `true` if the widget has all required configuration.
    pub fn is_ready(&self, id: &str) -> bool {
        self.prefs.is_ready(id)
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(source) => {
                tracing::warn!(
                    "{}",
                    StoreError::Encode {
                        key: key.to_string(),
                        source,
                    }
                );
                return;
            }
        };
        if let Err(e) = self.store.set(key, &encoded) {
            tracing::warn!("{e}");
        }
    }
}

/// Reads and decodes one persisted key, treating corrupt data as missing.
fn load_key<T: DeserializeOwned>(store: &dyn DashStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("{e}; falling back to defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(source) => {
            tracing::warn!(
                "{}; falling back to defaults",
                StoreError::Parse {
                    key: key.to_string(),
                    source,
                }
            );
            None
        }
    }
}
