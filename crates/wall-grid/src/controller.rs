//! Pointer-driven editing of a [`WallGrid`] and the collaborator traits it
//! renders and exports through.

#![warn(missing_docs)]

use std::io::Write;

use tracing::{info, trace};

use crate::map::{DisplayPoint, DisplayRect, GridGeometry, WallAction, WallChange, WallExport, WallGrid};

/// Logical colors the controller asks a surface to paint with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paint {
    /// Fill of a wall cell
    Wall,
    /// Fill of a free cell
    Background,
    /// Border drawn around a repainted cell
    CellOutline,
    /// The initial grid lines
    GridLine,
}

/// Something the controller can draw cells onto.
///
/// The controller never reads pixels back. Errors are handed back to the
/// caller of the controller untouched.
pub trait DrawingSurface {
    /// Error returned when a drawing call fails.
    type Error;

    /// Fill a rectangle with a solid paint.
    fn draw_filled_rect(&mut self, rect: DisplayRect, fill: Paint) -> Result<(), Self::Error>;

    /// Draw the outline of a rectangle.
    fn draw_outlined_rect(&mut self, rect: DisplayRect, outline: Paint) -> Result<(), Self::Error>;

    /// Draw horizontal and vertical lines every `spacing` pixels across `bounds`,
    /// including both outer edges.
    fn draw_grid_lines(&mut self, spacing: i32, bounds: DisplayRect) -> Result<(), Self::Error>;
}

/// Receives exported wall lists.
pub trait OutputSink {
    /// Error returned when the export cannot be written.
    type Error;

    /// Publish one export, in the order given.
    fn emit(&mut self, export: &WallExport) -> Result<(), Self::Error>;
}

/// An [`OutputSink`] printing exports as text to any writer.
///
/// Each export is a header line followed by the list line, e.g.
///
/// ```text
/// Exported wall cells (bottom-origin):
/// [(3, 0), (1, 2), (5, 2)]
/// ```
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Header printed before every export.
    pub const HEADER: &'static str = "Exported wall cells (bottom-origin):";

    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwraps the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriteSink<W> {
    type Error = std::io::Error;

    fn emit(&mut self, export: &WallExport) -> Result<(), Self::Error> {
        writeln!(self.writer, "{}", Self::HEADER)?;
        writeln!(self.writer, "{}", export)?;
        self.writer.flush()
    }
}

/// Whether a pointer event starts a gesture or continues one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerKind {
    /// The button went down at this position
    Press,
    /// The pointer moved while the button stayed down
    Drag,
}

/// Mouse button (or equivalent) associated with a pointer event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerButton {
    /// Draws walls
    Primary,
    /// Erases walls
    Secondary,
}

/// A discrete pointer event in display coordinates.
///
/// Drag events always carry the button being held.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    /// Press or drag.
    pub kind: PointerKind,
    /// Which button is involved.
    pub button: PointerButton,
    /// Pointer location on the display surface.
    pub position: DisplayPoint,
}

impl PointerEvent {
    /// Creates a new `PointerEvent`.
    #[must_use]
    pub const fn new(kind: PointerKind, button: PointerButton, position: DisplayPoint) -> Self {
        Self { kind, button, position }
    }

    /// A press of `button` at `(x, y)`.
    #[must_use]
    pub const fn press(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerKind::Press, button, DisplayPoint::new(x, y))
    }

    /// A drag with `button` held, now at `(x, y)`.
    #[must_use]
    pub const fn drag(button: PointerButton, x: i32, y: i32) -> Self {
        Self::new(PointerKind::Drag, button, DisplayPoint::new(x, y))
    }
}

/// Turns pointer events into wall edits and render calls.
///
/// Holds no state between events other than the wall grid itself. Presses
/// and drags behave the same; the button decides between drawing and
/// erasing.
#[derive(Debug, Clone)]
pub struct InteractionController {
    walls: WallGrid,
}

impl InteractionController {
    /// Creates a controller over an empty wall grid.
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            walls: WallGrid::new(geometry),
        }
    }

    /// The wall grid being edited.
    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    /// Geometry of the edited grid.
    pub fn geometry(&self) -> &GridGeometry {
        self.walls.geometry()
    }

    /// Draws the empty grid. Called once when the surface is set up.
    pub fn draw_grid<S: DrawingSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let geometry = self.geometry();
        surface.draw_grid_lines(geometry.cell_size(), geometry.bounds())
    }

    /// Applies one pointer event.
    ///
    /// # Returns
    /// * `Ok(Some(change))` - The wall set changed and the cell was repainted
    /// * `Ok(None)` - Nothing to do (outside the grid or already in that state)
    /// * `Err(e)` - The surface failed while repainting; the wall set keeps the change
    pub fn handle_pointer<S: DrawingSurface>(
        &mut self,
        event: PointerEvent,
        surface: &mut S,
    ) -> Result<Option<WallChange>, S::Error> {
        let cell = self.geometry().display_to_grid(event.position);
        trace!(?event, %cell, "Pointer event");

        let change = match event.button {
            PointerButton::Primary => self.walls.add_wall(cell),
            PointerButton::Secondary => self.walls.remove_wall(cell),
        };

        if let Some(change) = change {
            self.render_change(change, surface)?;
        }
        Ok(change)
    }

    /// Repaints the cell named by a change.
    pub fn render_change<S: DrawingSurface>(&self, change: WallChange, surface: &mut S) -> Result<(), S::Error> {
        let rect = self.geometry().grid_to_display_rect(change.cell);
        let fill = match change.action {
            WallAction::Filled => Paint::Wall,
            WallAction::Cleared => Paint::Background,
        };
        surface.draw_filled_rect(rect, fill)?;
        surface.draw_outlined_rect(rect, Paint::CellOutline)
    }

    /// Exports the walls, bottom row first, to `sink`.
    ///
    /// The same ordered list is returned to the caller.
    pub fn export<O: OutputSink>(&self, sink: &mut O) -> Result<WallExport, O::Error> {
        let export = self.walls.export_sorted();
        sink.emit(&export)?;
        info!(walls = export.len(), "Exported wall cells");
        Ok(export)
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(GridGeometry::default())
    }
}
