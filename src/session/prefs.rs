//! Widget selection and per-widget configuration.
//!
//! The selection is an ordered, duplicate-free list of widget ids; its
//! insertion order drives default grid placement. The config map carries
//! the user-supplied parameters a widget needs before it can render.
//! After every operation the config map holds entries only for catalog
//! widgets, keyed only by their declared required keys, and a deselected
//! widget keeps no configuration.

use std::collections::BTreeMap;

use crate::catalog;

/// Per-widget configuration: widget id → (config key → value).
pub type ConfigMap = BTreeMap<String, BTreeMap<String, String>>;

/// The user's widget selection and configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    selected: Vec<String>,
    config: ConfigMap,
}

impl Preferences {
    /// Builds preferences from (possibly persisted) raw parts.
    ///
    /// Duplicate selection entries are dropped after their first
    /// occurrence, and the config map is sanitized against the catalog, so
    /// stale or hand-edited persisted data cannot violate the invariants.
    pub fn new(selected: Vec<String>, config: ConfigMap) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(selected.len());
        for id in selected {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        Self {
            selected: deduped,
            config: sanitize_config(config),
        }
    }

    /// Selected widget ids in insertion order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns `true` if `id` is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// The full config map.
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Configuration values for one widget, if any were supplied.
    pub fn config_for(&self, id: &str) -> Option<&BTreeMap<String, String>> {
        self.config.get(id)
    }

    /// Toggles `id` in the selection.
    ///
    /// Deselecting removes the id and clears its configuration; selecting
    /// appends it at the end. Ids missing from the catalog still toggle —
    /// the widget host surfaces the unknown-widget condition at render
    /// time. Returns `true` if the widget is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected.retain(|s| s != id);
            self.clear_config(id);
            false
        } else {
            self.selected.push(id.to_string());
            true
        }
    }

    /// Replaces the configuration entry for `id` wholesale.
    ///
    /// Keys outside the widget's declared `required_config_keys` are
    /// dropped, as is the whole entry when `id` is not in the catalog or
    /// nothing survives filtering.
    pub fn set_config(&mut self, id: &str, values: BTreeMap<String, String>) {
        let Some(descriptor) = catalog::descriptor(id) else {
            tracing::warn!("ignoring config for unknown widget '{id}'");
            return;
        };
        let filtered: BTreeMap<String, String> = values
            .into_iter()
            .filter(|(key, _)| descriptor.required_config_keys.contains(&key.as_str()))
            .collect();
        if filtered.is_empty() {
            self.config.remove(id);
        } else {
            self.config.insert(id.to_string(), filtered);
        }
    }

    /// Removes the configuration entry for `id` entirely.
    pub fn clear_config(&mut self, id: &str) {
        self.config.remove(id);
    }

    /// Replaces selection and configuration together (snapshot apply).
    pub fn replace(&mut self, selected: Vec<String>, config: ConfigMap) {
        *self = Self::new(selected, config);
    }

    /// Returns `true` if every required config key for `id` is present and
    /// non-empty. Unknown widgets are never ready.
    pub fn is_ready(&self, id: &str) -> bool {
        let Some(descriptor) = catalog::descriptor(id) else {
            return false;
        };
        descriptor.required_config_keys.iter().all(|key| {
            self.config
                .get(id)
                .and_then(|values| values.get(*key))
                .is_some_and(|value| !value.trim().is_empty())
        })
    }
}

/// Drops config entries for unknown widgets and keys a widget never asks
/// for. Applied to persisted and snapshot-restored config alike.
fn sanitize_config(config: ConfigMap) -> ConfigMap {
    config
        .into_iter()
        .filter_map(|(id, values)| {
            let descriptor = catalog::descriptor(&id)?;
            let filtered: BTreeMap<String, String> = values
                .into_iter()
                .filter(|(key, _)| descriptor.required_config_keys.contains(&key.as_str()))
                .collect();
            (!filtered.is_empty()).then_some((id, filtered))
        })
        .collect()
}
