use macroquad::prelude::*;
use macroquad::ui::{root_ui, widgets};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::convert::Infallible;
use tracing::{error, info};
use wall_grid::{DisplayRect, DrawingSurface, GridGeometry, InteractionController, Paint, WriteSink};

use crate::config::EditorSettings;
use crate::input::{MouseSample, PointerTracker};

/// Height of the strip below the canvas that holds the Export button.
const BUTTON_STRIP_HEIGHT: i32 = 48;
const BUTTON_SIZE: Vec2 = Vec2::new(80.0, 28.0);
const OUTLINE_THICKNESS: f32 = 1.0;

// Function to configure the macroquad window
pub fn window_conf(settings: &EditorSettings, geometry: &GridGeometry) -> Conf {
    Conf {
        window_title: settings.window_title.clone(),
        window_width: geometry.extent(),
        window_height: geometry.extent() + BUTTON_STRIP_HEIGHT,
        high_dpi: false,
        window_resizable: false,
        ..Default::default()
    }
}

fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Wall => BLACK,
        Paint::Background => WHITE,
        Paint::CellOutline => GRAY,
        Paint::GridLine => BLACK,
    }
}

/// What has been painted onto one cell rectangle. Later calls replace earlier ones.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct CellLayers {
    fill: Option<Paint>,
    outline: Option<Paint>,
}

/// Retained drawing surface.
///
/// Macroquad redraws the whole frame every tick, so drawing calls from the
/// controller are recorded here and replayed by [`Canvas::present`]. Only
/// the most recent fill and outline per rectangle are kept, which gives the
/// same picture as painting them in order on a persistent canvas.
/// Cells are replayed in the order they were first painted.
#[derive(Debug, Default)]
pub struct Canvas {
    grid: Option<(i32, DisplayRect)>,
    cells: HashMap<DisplayRect, CellLayers>,
    /// First-paint order of the keys in `cells`
    order: Vec<DisplayRect>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn layers_mut(&mut self, rect: DisplayRect) -> &mut CellLayers {
        match self.cells.entry(rect) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                self.order.push(rect);
                entry.insert(CellLayers::default())
            }
        }
    }

    /// Recorded cells in replay order.
    fn recorded(&self) -> impl Iterator<Item = (&DisplayRect, &CellLayers)> {
        self.order.iter().filter_map(move |rect| self.cells.get_key_value(rect))
    }

    /// Replays the recorded drawing onto the current frame.
    pub fn present(&self) {
        if let Some((spacing, bounds)) = self.grid {
            let color = paint_color(Paint::GridLine);
            let mut offset = 0;
            while offset <= bounds.width().max(bounds.height()) {
                if offset <= bounds.height() {
                    let y = (bounds.y0 + offset) as f32;
                    draw_line(bounds.x0 as f32, y, bounds.x1 as f32, y, OUTLINE_THICKNESS, color);
                }
                if offset <= bounds.width() {
                    let x = (bounds.x0 + offset) as f32;
                    draw_line(x, bounds.y0 as f32, x, bounds.y1 as f32, OUTLINE_THICKNESS, color);
                }
                offset += spacing;
            }
        }

        for (rect, layers) in self.recorded() {
            let (x, y, w, h) = (rect.x0 as f32, rect.y0 as f32, rect.width() as f32, rect.height() as f32);
            if let Some(fill) = layers.fill {
                draw_rectangle(x, y, w, h, paint_color(fill));
            }
            if let Some(outline) = layers.outline {
                draw_rectangle_lines(x, y, w, h, OUTLINE_THICKNESS, paint_color(outline));
            }
        }
    }
}

impl DrawingSurface for Canvas {
    type Error = Infallible;

    fn draw_filled_rect(&mut self, rect: DisplayRect, fill: Paint) -> Result<(), Self::Error> {
        self.layers_mut(rect).fill = Some(fill);
        Ok(())
    }

    fn draw_outlined_rect(&mut self, rect: DisplayRect, outline: Paint) -> Result<(), Self::Error> {
        self.layers_mut(rect).outline = Some(outline);
        Ok(())
    }

    fn draw_grid_lines(&mut self, spacing: i32, bounds: DisplayRect) -> Result<(), Self::Error> {
        self.grid = Some((spacing.max(1), bounds));
        Ok(())
    }
}

/// Top-left corner of the Export button, centered in the strip below the canvas.
fn export_button_pos(geometry: &GridGeometry) -> Vec2 {
    vec2(
        (geometry.extent() as f32 - BUTTON_SIZE.x) / 2.0,
        geometry.extent() as f32 + (BUTTON_STRIP_HEIGHT as f32 - BUTTON_SIZE.y) / 2.0,
    )
}

/// Runs the editor until the window is closed.
pub async fn run_editor_loop(geometry: GridGeometry) -> anyhow::Result<()> {
    let mut controller = InteractionController::new(geometry);
    let mut canvas = Canvas::new();
    let mut tracker = PointerTracker::new();
    let mut sink = WriteSink::new(std::io::stdout());

    controller.draw_grid(&mut canvas)?;
    info!(
        grid_size = geometry.grid_size(),
        cell_size = geometry.cell_size(),
        "Editor loop starting. Left button draws walls, right button erases, Export or E prints them."
    );

    let button_pos = export_button_pos(&geometry);

    loop {
        for event in tracker.update(MouseSample::capture()) {
            controller.handle_pointer(event, &mut canvas)?;
        }

        clear_background(paint_color(Paint::Background));
        canvas.present();

        let export_clicked = widgets::Button::new("Export")
            .position(button_pos)
            .size(BUTTON_SIZE)
            .ui(&mut *root_ui());
        if export_clicked || is_key_pressed(KeyCode::E) {
            if let Err(e) = controller.export(&mut sink) {
                error!("Failed to write wall export: {}", e);
            }
        }

        next_frame().await
    }
}
