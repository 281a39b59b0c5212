//! Grid layout system for the dashboard.
//!
//! [`grid`] keeps the cell geometry consistent with the widget selection
//! and generates deterministic default placements. [`snapshots`] holds the
//! registry of named layout snapshots, each bundling a selection, a
//! layout, and per-widget configuration as one restorable unit.

pub mod grid;
pub mod snapshots;

pub use grid::{apply_external_change, default_placement, reconcile, GridCell, GRID_COLUMNS};
pub use snapshots::{LayoutSnapshot, SnapshotError, SnapshotRegistry};
