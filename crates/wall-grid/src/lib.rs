#![warn(missing_docs)]
#![doc = "Headless core of the wall editor."]
#![doc = ""]
#![doc = "Cells are stored in bottom-origin grid coordinates (`(0, 0)` is the bottom-left cell,"]
#![doc = "y grows upward) while the display surface uses top-left-origin pixels. This crate"]
#![doc = "converts between the two, keeps the set of wall cells and turns pointer events into"]
#![doc = "wall edits plus the drawing calls needed to show them."]

pub mod controller;
pub mod error;
pub mod map;

pub use controller::{
    DrawingSurface, InteractionController, OutputSink, Paint, PointerButton, PointerEvent, PointerKind, WriteSink,
};
pub use error::GridError;
pub use map::{
    CELL_SIZE, DisplayPoint, DisplayRect, GRID_SIZE, GridGeometry, GridPoint, WallAction, WallChange, WallExport,
    WallGrid,
};
