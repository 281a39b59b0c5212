//! Named layout snapshots.
//!
//! A snapshot captures the whole dashboard arrangement — selected widgets,
//! grid geometry, and per-widget configuration — under a user-chosen name.
//! Applying one replaces the live state wholesale; there is no partial
//! application. The registry holds only what was explicitly saved and
//! never mutates in the background.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::grid::GridCell;
use crate::session::ConfigMap;

/// Errors from snapshot registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot name was empty or whitespace-only.
    #[error("layout name must not be empty")]
    EmptyName,

    /// No snapshot with the given name exists.
    #[error("no saved layout named '{0}'")]
    NotFound(String),
}

/// A named point-in-time bundle of selection, layout, and configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Unique name within the registry.
    pub name: String,
    /// Widget ids that were selected, in order.
    pub selection: Vec<String>,
    /// Grid geometry at save time.
    pub layout: Vec<GridCell>,
    /// Per-widget configuration at save time.
    pub config: ConfigMap,
}

/// Ordered collection of snapshots, unique by name.
///
/// Serialized as a bare array so the persisted value is the snapshot
/// vector itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotRegistry {
    snapshots: Vec<LayoutSnapshot>,
}

impl SnapshotRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a snapshot under `name`.
    ///
    /// The name is trimmed; an empty or whitespace-only name is rejected
    /// with [`SnapshotError::EmptyName`] before any mutation. Saving under
    /// an existing name overwrites that entry in place, keeping its
    /// position in the list.
    pub fn save(
        &mut self,
        name: &str,
        selection: Vec<String>,
        layout: Vec<GridCell>,
        config: ConfigMap,
    ) -> Result<(), SnapshotError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SnapshotError::EmptyName);
        }
        let snapshot = LayoutSnapshot {
            name: name.to_string(),
            selection,
            layout,
            config,
        };
        match self.snapshots.iter_mut().find(|s| s.name == name) {
            Some(existing) => *existing = snapshot,
            None => self.snapshots.push(snapshot),
        }
        Ok(())
    }

    /// Looks up the snapshot saved under `name`.
    ///
    /// The caller splices the returned bundle into live state; selection,
    /// layout, and config are replaced together or not at all.
    pub fn get(&self, name: &str) -> Result<&LayoutSnapshot, SnapshotError> {
        self.snapshots
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SnapshotError::NotFound(name.to_string()))
    }

    /// Deletes every snapshot named `name`.
    ///
    /// Deleting a name that does not exist is a no-op, not an error.
    pub fn delete(&mut self, name: &str) {
        self.snapshots.retain(|s| s.name != name);
    }

    /// Returns the snapshots in save order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutSnapshot> {
        self.snapshots.iter()
    }

    /// Returns the count of saved snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no snapshots are saved.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::default_placement;
    use std::collections::BTreeMap;

    fn sample_config() -> ConfigMap {
        let mut config = ConfigMap::new();
        config.insert(
            "analytics".to_string(),
            BTreeMap::from([("trackingId".to_string(), "UA-1".to_string())]),
        );
        config
    }

    #[test]
    fn save_and_get_roundtrip() {
        let mut registry = SnapshotRegistry::new();
        let selection = vec!["overview".to_string(), "analytics".to_string()];
        let layout = default_placement(&selection);
        registry
            .save("Weekly", selection.clone(), layout.clone(), sample_config())
            .expect("save should succeed");

        let snapshot = registry.get("Weekly").expect("snapshot exists");
        assert_eq!(snapshot.selection, selection);
        assert_eq!(snapshot.layout, layout);
        assert_eq!(snapshot.config, sample_config());
    }

    #[test]
    fn save_rejects_empty_name() {
        let mut registry = SnapshotRegistry::new();
        let err = registry
            .save("", vec![], vec![], ConfigMap::new())
            .expect_err("empty name should be rejected");
        assert_eq!(err, SnapshotError::EmptyName);
        assert!(registry.is_empty(), "rejected save must not mutate");
    }

    #[test]
    fn save_rejects_whitespace_name() {
        let mut registry = SnapshotRegistry::new();
        let err = registry
            .save("   \t", vec![], vec![], ConfigMap::new())
            .expect_err("whitespace name should be rejected");
        assert_eq!(err, SnapshotError::EmptyName);
    }

    #[test]
    fn save_trims_name() {
        let mut registry = SnapshotRegistry::new();
        registry
            .save("  Weekly  ", vec![], vec![], ConfigMap::new())
            .expect("save should succeed");
        assert!(registry.get("Weekly").is_ok());
    }

    #[test]
    fn save_duplicate_name_overwrites_in_place() {
        let mut registry = SnapshotRegistry::new();
        registry
            .save("L1", vec!["a".to_string()], vec![], ConfigMap::new())
            .expect("save failed");
        registry
            .save("L2", vec!["b".to_string()], vec![], ConfigMap::new())
            .expect("save failed");
        registry
            .save("L1", vec!["c".to_string()], vec![], ConfigMap::new())
            .expect("save failed");

        assert_eq!(registry.len(), 2, "overwrite must not grow the registry");
        let names: Vec<&str> = registry.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["L1", "L2"], "overwrite keeps position");
        assert_eq!(
            registry.get("L1").expect("L1 exists").selection,
            vec!["c".to_string()]
        );
    }

    #[test]
    fn get_missing_returns_not_found() {
        let registry = SnapshotRegistry::new();
        let err = registry.get("ghost").expect_err("should fail");
        assert_eq!(err, SnapshotError::NotFound("ghost".to_string()));
    }

    #[test]
    fn delete_removes_snapshot() {
        let mut registry = SnapshotRegistry::new();
        registry
            .save("L1", vec![], vec![], ConfigMap::new())
            .expect("save failed");
        registry.delete("L1");
        assert!(registry.is_empty());
    }

    #[test]
    fn delete_missing_is_idempotent() {
        let mut registry = SnapshotRegistry::new();
        registry
            .save("keep", vec![], vec![], ConfigMap::new())
            .expect("save failed");
        registry.delete("nonexistent");
        registry.delete("nonexistent");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_serializes_as_array() {
        let mut registry = SnapshotRegistry::new();
        registry
            .save("L1", vec!["a".to_string()], default_placement(&["a"]), ConfigMap::new())
            .expect("save failed");
        let json = serde_json::to_string(&registry).expect("serialize failed");
        assert!(json.starts_with('['), "registry should serialize as array: {json}");
        let parsed: SnapshotRegistry = serde_json::from_str(&json).expect("parse failed");
        assert_eq!(parsed, registry);
    }
}
