//! Grid-related functionality for the wall editor.
//!
//! This module provides the coordinate types, the pixel <-> cell transform
//! and the wall set built on top of them.

pub mod point_types;
pub mod transform;
pub mod wall_set;

pub use point_types::{DisplayPoint, DisplayRect, GridPoint};
pub use transform::{CELL_SIZE, GRID_SIZE, GridGeometry};
pub use wall_set::{WallAction, WallChange, WallExport, WallGrid};
