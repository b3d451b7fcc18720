//! Coordinate types shared by the grid and the display surface.

use core::fmt;

/// A cell in bottom-origin grid coordinates.
///
/// `(0, 0)` is the bottom-left cell and `y` grows upward. The components are
/// signed so that pointer positions outside the canvas still have a
/// representation; such cells are rejected when the wall set is mutated.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// The x-coordinate (column index) in the grid.
    pub x: i32,
    /// The y-coordinate (row index, counted from the bottom) in the grid.
    pub y: i32,
}

impl GridPoint {
    /// Creates a new `GridPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A pixel on the display surface (top-left origin, `y` grows downward).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayPoint {
    /// Pixel column.
    pub x: i32,
    /// Pixel row, counted from the top.
    pub y: i32,
}

impl DisplayPoint {
    /// Creates a new `DisplayPoint`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle `(x0, y0)`-`(x1, y1)` in display coordinates.
///
/// The rectangle is half-open: it covers pixels with `x0 <= x < x1` and
/// `y0 <= y < y1`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRect {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl DisplayRect {
    /// Creates a new `DisplayRect`.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width in pixels.
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    /// Height in pixels.
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Center pixel, rounded toward the top-left.
    pub const fn center(&self) -> DisplayPoint {
        DisplayPoint::new(self.x0 + self.width() / 2, self.y0 + self.height() / 2)
    }

    /// Returns true if the pixel lies inside the rectangle.
    pub const fn contains(&self, p: DisplayPoint) -> bool {
        self.x0 <= p.x && p.x < self.x1 && self.y0 <= p.y && p.y < self.y1
    }

    /// The four pixels at the inside corners of the rectangle.
    pub const fn corner_pixels(&self) -> [DisplayPoint; 4] {
        [
            DisplayPoint::new(self.x0, self.y0),
            DisplayPoint::new(self.x1 - 1, self.y0),
            DisplayPoint::new(self.x0, self.y1 - 1),
            DisplayPoint::new(self.x1 - 1, self.y1 - 1),
        ]
    }
}

impl fmt::Display for DisplayRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_point_display() {
        assert_eq!(GridPoint::new(3, 0).to_string(), "(3, 0)");
        assert_eq!(GridPoint::new(-1, 5).to_string(), "(-1, 5)");
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = DisplayRect::new(0, 0, 20, 20);
        assert!(rect.contains(DisplayPoint::new(0, 0)));
        assert!(rect.contains(DisplayPoint::new(19, 19)));
        assert!(!rect.contains(DisplayPoint::new(20, 10)));
        assert!(!rect.contains(DisplayPoint::new(10, 20)));
        assert!(!rect.contains(DisplayPoint::new(-1, 0)));
    }

    #[test]
    fn test_rect_center_and_corners() {
        let rect = DisplayRect::new(40, 560, 60, 580);
        assert_eq!(rect.width(), 20);
        assert_eq!(rect.height(), 20);
        assert_eq!(rect.center(), DisplayPoint::new(50, 570));
        for corner in rect.corner_pixels() {
            assert!(rect.contains(corner));
        }
    }
}
