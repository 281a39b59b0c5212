//! Grid cell geometry and selection reconciliation.
//!
//! The dashboard canvas is 12 grid units wide. New widgets are placed in a
//! two-column stack: even indices on the left half, odd indices on the
//! right, each cell 6 units wide and 5 tall. Placement is a pure function
//! of position in the selection order, so the same selection always
//! produces the same default layout.

use serde::{Deserialize, Serialize};

/// Width of the dashboard canvas in grid units.
pub const GRID_COLUMNS: u16 = 12;

/// Default width of a newly placed cell.
const DEFAULT_CELL_W: u16 = 6;

/// Default height of a newly placed cell.
const DEFAULT_CELL_H: u16 = 5;

/// Position and size of one widget on the grid, in grid units.
///
/// The id is serialized as `i`, the wire format the original grid data
/// used, so persisted layouts stay compact and interoperable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Widget id occupying this cell. Unique within a layout.
    #[serde(rename = "i")]
    pub id: String,
    /// Left edge in grid units.
    pub x: u16,
    /// Top edge in grid units.
    pub y: u16,
    /// Width in grid units. Always > 0.
    pub w: u16,
    /// Height in grid units. Always > 0.
    pub h: u16,
}

impl GridCell {
    /// Creates a cell with explicit geometry.
    pub fn new(id: &str, x: u16, y: u16, w: u16, h: u16) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            w,
            h,
        }
    }

    /// Default geometry for the widget at `index` in the placement order.
    fn at_index(id: &str, index: usize) -> Self {
        Self {
            id: id.to_string(),
            x: (index as u16 % 2) * DEFAULT_CELL_W,
            y: (index as u16 / 2) * 4,
            w: DEFAULT_CELL_W,
            h: DEFAULT_CELL_H,
        }
    }
}

/// Generates the default two-column layout for `ids` in order.
///
/// Deterministic: the same input order always yields the same geometry.
pub fn default_placement<S: AsRef<str>>(ids: &[S]) -> Vec<GridCell> {
    ids.iter()
        .enumerate()
        .map(|(index, id)| GridCell::at_index(id.as_ref(), index))
        .collect()
}

/// Reconciles a layout with the current selection.
///
/// Cells for deselected widgets are dropped with the surviving geometry
/// untouched; each selected widget without a cell gets one appended at the
/// next default position (running layout length as the index). The result
/// covers the selection exactly, and reconciling twice with the same
/// selection is a no-op.
pub fn reconcile<S: AsRef<str>>(current: &[GridCell], selection: &[S]) -> Vec<GridCell> {
    let mut next: Vec<GridCell> = current
        .iter()
        .filter(|cell| selection.iter().any(|id| id.as_ref() == cell.id))
        .cloned()
        .collect();

    for id in selection {
        let id = id.as_ref();
        if !next.iter().any(|cell| cell.id == id) {
            next.push(GridCell::at_index(id, next.len()));
        }
    }

    next
}

/// Replaces `current` with `new_layout` if they differ structurally.
///
/// Compared by full equality, not reference, so echoes of the layout the
/// engine just emitted do not trigger a persistence write or feed back
/// into the rendering layer. Returns `true` when the layout was replaced.
pub fn apply_external_change(current: &mut Vec<GridCell>, new_layout: Vec<GridCell>) -> bool {
    if *current == new_layout {
        return false;
    }
    *current = new_layout;
    true
}
