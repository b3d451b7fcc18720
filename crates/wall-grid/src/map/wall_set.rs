//! The set of wall cells and the values it hands back on mutation.

#![warn(missing_docs)]

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use super::{GridGeometry, GridPoint};

/// What happened to a cell as the result of a wall mutation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallAction {
    /// The cell became a wall
    Filled,
    /// The cell stopped being a wall
    Cleared,
}

impl fmt::Display for WallAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallAction::Filled => write!(f, "filled"),
            WallAction::Cleared => write!(f, "cleared"),
        }
    }
}

/// A change to the wall set that the renderer has to reflect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallChange {
    /// Whether the cell was filled or cleared.
    pub action: WallAction,
    /// The affected cell, in bottom-origin coordinates.
    pub cell: GridPoint,
}

impl WallChange {
    /// Creates a new `WallChange`.
    #[must_use]
    pub const fn new(action: WallAction, cell: GridPoint) -> Self {
        Self { action, cell }
    }
}

/// Wall cells in canonical export order: bottom row first, then left to right.
///
/// Formats as a single line such as `[(3, 0), (1, 2), (5, 2)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallExport {
    cells: Vec<GridPoint>,
}

impl WallExport {
    /// The exported cells, in order.
    pub fn cells(&self) -> &[GridPoint] {
        &self.cells
    }

    /// Number of exported cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cells were exported.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consumes the export, returning the ordered cells.
    pub fn into_cells(self) -> Vec<GridPoint> {
        self.cells
    }
}

impl fmt::Display for WallExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

/// The set of wall cells on a square grid.
///
/// Only in-bounds cells are ever stored. Mutations that would not change
/// membership (out of bounds, already in the requested state) are ignored
/// and return `None`.
#[derive(Debug, Clone)]
pub struct WallGrid {
    /// Grid the walls live on
    geometry: GridGeometry,
    /// Wall cells in bottom-origin coordinates
    cells: HashSet<GridPoint>,
}

impl WallGrid {
    /// Creates an empty wall grid.
    pub fn new(geometry: GridGeometry) -> Self {
        WallGrid {
            geometry,
            cells: HashSet::new(),
        }
    }

    /// Gets the geometry the walls are stored against.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Returns true if the cell lies inside the grid.
    pub fn is_in_bounds(&self, p: GridPoint) -> bool {
        self.geometry.is_in_bounds(p)
    }

    /// Returns true if the cell is currently a wall.
    pub fn contains(&self, p: GridPoint) -> bool {
        self.cells.contains(&p)
    }

    /// Number of wall cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if there are no walls.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the wall cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &GridPoint> {
        self.cells.iter()
    }

    /// Marks a cell as a wall.
    ///
    /// # Arguments
    /// * `p` - Cell in grid frame
    ///
    /// # Returns
    /// * `Option<WallChange>` - `Filled` if the cell was added, `None` if it was
    ///   out of bounds or already a wall
    pub fn add_wall(&mut self, p: GridPoint) -> Option<WallChange> {
        if !self.is_in_bounds(p) {
            trace!(cell = %p, "Ignoring add outside the grid");
            return None;
        }
        if !self.cells.insert(p) {
            return None;
        }
        debug!(cell = %p, walls = self.cells.len(), "Wall added");
        Some(WallChange::new(WallAction::Filled, p))
    }

    /// Unmarks a wall cell.
    ///
    /// # Arguments
    /// * `p` - Cell in grid frame
    ///
    /// # Returns
    /// * `Option<WallChange>` - `Cleared` if the cell was removed, `None` if it was
    ///   out of bounds or not a wall
    pub fn remove_wall(&mut self, p: GridPoint) -> Option<WallChange> {
        if !self.is_in_bounds(p) {
            trace!(cell = %p, "Ignoring remove outside the grid");
            return None;
        }
        if !self.cells.remove(&p) {
            return None;
        }
        debug!(cell = %p, walls = self.cells.len(), "Wall removed");
        Some(WallChange::new(WallAction::Cleared, p))
    }

    /// Flips a cell between wall and free.
    ///
    /// Returns `None` only when the cell is out of bounds.
    pub fn toggle_wall(&mut self, p: GridPoint) -> Option<WallChange> {
        if self.contains(p) {
            self.remove_wall(p)
        } else {
            self.add_wall(p)
        }
    }

    /// Returns all wall cells sorted by row (bottom first), then column.
    pub fn export_sorted(&self) -> WallExport {
        let mut cells: Vec<GridPoint> = self.cells.iter().copied().collect();
        cells.sort_unstable_by_key(|p| (p.y, p.x));
        WallExport { cells }
    }
}

impl Default for WallGrid {
    fn default() -> Self {
        WallGrid::new(GridGeometry::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walls_of(grid: &WallGrid) -> Vec<GridPoint> {
        grid.export_sorted().into_cells()
    }

    #[test]
    fn test_add_and_remove() {
        let mut grid = WallGrid::default();
        let p = GridPoint::new(0, 29);

        assert_eq!(grid.add_wall(p), Some(WallChange::new(WallAction::Filled, p)));
        assert!(grid.contains(p));
        assert_eq!(grid.len(), 1);

        assert_eq!(grid.remove_wall(p), Some(WallChange::new(WallAction::Cleared, p)));
        assert!(!grid.contains(p));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut grid = WallGrid::default();
        let p = GridPoint::new(4, 4);
        assert!(grid.add_wall(p).is_some());
        let once = walls_of(&grid);
        assert_eq!(grid.add_wall(p), None);
        assert_eq!(walls_of(&grid), once);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut grid = WallGrid::default();
        let p = GridPoint::new(4, 4);
        grid.add_wall(p);
        grid.add_wall(GridPoint::new(5, 4));
        assert!(grid.remove_wall(p).is_some());
        let once = walls_of(&grid);
        assert_eq!(grid.remove_wall(p), None);
        assert_eq!(walls_of(&grid), once);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = WallGrid::default();
        assert_eq!(grid.add_wall(GridPoint::new(-1, 5)), None);
        assert_eq!(grid.add_wall(GridPoint::new(30, 5)), None);
        assert_eq!(grid.add_wall(GridPoint::new(5, 30)), None);
        assert_eq!(grid.remove_wall(GridPoint::new(5, -1)), None);
        assert_eq!(grid.toggle_wall(GridPoint::new(-1, -1)), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_bounds_invariant_under_mixed_sequence() {
        let mut grid = WallGrid::default();
        // Walk a diagonal band that spills over every edge of the 30x30 grid.
        for i in -5..40 {
            for j in -3..3 {
                grid.add_wall(GridPoint::new(i, i + j));
                grid.toggle_wall(GridPoint::new(i + j, 29 - i));
                if (i + j) % 3 == 0 {
                    grid.remove_wall(GridPoint::new(i, i + j));
                }
            }
        }
        assert!(!grid.is_empty());
        for p in grid.iter() {
            assert!((0..30).contains(&p.x) && (0..30).contains(&p.y), "{} escaped the grid", p);
        }
    }

    #[test]
    fn test_toggle() {
        let mut grid = WallGrid::default();
        let p = GridPoint::new(7, 3);
        assert_eq!(grid.toggle_wall(p), Some(WallChange::new(WallAction::Filled, p)));
        assert_eq!(grid.toggle_wall(p), Some(WallChange::new(WallAction::Cleared, p)));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_export_ordering() {
        let mut grid = WallGrid::default();
        grid.add_wall(GridPoint::new(5, 2));
        grid.add_wall(GridPoint::new(1, 2));
        grid.add_wall(GridPoint::new(3, 0));

        let export = grid.export_sorted();
        assert_eq!(
            export.cells(),
            &[GridPoint::new(3, 0), GridPoint::new(1, 2), GridPoint::new(5, 2)]
        );
        assert_eq!(export.to_string(), "[(3, 0), (1, 2), (5, 2)]");
        // Export is a pure read.
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_empty_export() {
        let grid = WallGrid::default();
        let export = grid.export_sorted();
        assert!(export.is_empty());
        assert_eq!(export.to_string(), "[]");
    }

    #[test]
    fn test_custom_geometry_bounds() {
        let mut grid = WallGrid::new(GridGeometry::new(5, 10).unwrap());
        assert!(grid.add_wall(GridPoint::new(4, 4)).is_some());
        assert_eq!(grid.add_wall(GridPoint::new(5, 0)), None);
        assert_eq!(grid.len(), 1);
    }
}
