//! Conversions between display pixels and bottom-origin grid cells.

#![warn(missing_docs)]

use crate::error::GridError;
use super::{DisplayPoint, DisplayRect, GridPoint};

/// Default size of one cell, in pixels.
pub const CELL_SIZE: i32 = 20;
/// Default number of cells along each side of the grid.
pub const GRID_SIZE: i32 = 30;

/// Geometry of a square grid drawn on a top-left-origin canvas.
///
/// Converts between display pixels and bottom-origin grid cells. The
/// canvas is `extent()` pixels on each side, with grid row `0` at the
/// bottom of the canvas.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    /// Number of cells along each side
    grid_size: i32,
    /// Pixel size of one cell
    cell_size: i32,
}

impl GridGeometry {
    /// Creates a new GridGeometry.
    ///
    /// # Arguments
    /// * `grid_size` - Number of cells along each side
    /// * `cell_size` - Pixel size of one cell
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The geometry or an error if the parameters are invalid
    pub fn new(grid_size: i32, cell_size: i32) -> Result<Self, GridError> {
        if grid_size <= 0 {
            return Err(GridError::InvalidDimensions("Grid size must be positive"));
        }
        if cell_size <= 0 {
            return Err(GridError::InvalidDimensions("Cell size must be positive"));
        }
        if grid_size.checked_mul(cell_size).is_none() {
            return Err(GridError::InvalidDimensions("Canvas extent too large, would cause overflow"));
        }

        Ok(GridGeometry { grid_size, cell_size })
    }

    /// Number of cells along each side.
    pub const fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Pixel size of one cell.
    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Canvas width and height in pixels (`grid_size * cell_size`).
    pub const fn extent(&self) -> i32 {
        self.grid_size * self.cell_size
    }

    /// The whole canvas as a display rectangle.
    pub const fn bounds(&self) -> DisplayRect {
        DisplayRect::new(0, 0, self.extent(), self.extent())
    }

    /// Returns true if the cell lies inside the grid.
    pub const fn is_in_bounds(&self, p: GridPoint) -> bool {
        0 <= p.x && p.x < self.grid_size && 0 <= p.y && p.y < self.grid_size
    }

    /// Converts a display pixel to the bottom-origin cell containing it.
    ///
    /// Uses floor division, so pixels left of or below the canvas map to
    /// negative cells and pixels right of or above it map past the last
    /// cell. Range checking is left to the caller.
    ///
    /// The row is computed from `extent - 1 - py`: pixel rows run from `0`
    /// to `extent - 1`, so this mirrors the pixel row itself rather than its
    /// lower edge, and every pixel of a cell's rectangle lands in that cell.
    ///
    /// # Arguments
    /// * `p` - Pixel in display frame
    ///
    /// # Returns
    /// * `GridPoint` - Cell in grid frame, possibly out of bounds
    pub const fn display_to_grid(&self, p: DisplayPoint) -> GridPoint {
        // Flipped in i64: `extent - 1 - py` leaves i32 for pixels far above the canvas.
        let flipped_y = self.extent() as i64 - 1 - p.y as i64;
        let gy = flipped_y.div_euclid(self.cell_size as i64);
        GridPoint::new(p.x.div_euclid(self.cell_size), saturate_to_i32(gy))
    }

    /// Converts a bottom-origin cell to its drawable rectangle on the canvas.
    ///
    /// # Arguments
    /// * `p` - Cell in grid frame
    ///
    /// # Returns
    /// * `DisplayRect` - Pixel bounds of the cell, each side `cell_size` long
    pub const fn grid_to_display_rect(&self, p: GridPoint) -> DisplayRect {
        let h = self.extent();
        let x0 = p.x * self.cell_size;
        DisplayRect::new(
            x0,
            h - (p.y + 1) * self.cell_size,
            x0 + self.cell_size,
            h - p.y * self.cell_size,
        )
    }
}

/// Clamps to the i32 range. Any clamped row is already outside the grid.
const fn saturate_to_i32(v: i64) -> i32 {
    if v > i32::MAX as i64 {
        i32::MAX
    } else if v < i32::MIN as i64 {
        i32::MIN
    } else {
        v as i32
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        GridGeometry {
            grid_size: GRID_SIZE,
            cell_size: CELL_SIZE,
        }
    }
}
