use std::convert::Infallible;

use wall_grid::{
    DisplayRect, DrawingSurface, GridPoint, InteractionController, Paint, PointerButton, PointerEvent, WriteSink,
};

/// Prints every drawing call instead of painting.
struct PrintSurface;

impl DrawingSurface for PrintSurface {
    type Error = Infallible;

    fn draw_filled_rect(&mut self, rect: DisplayRect, fill: Paint) -> Result<(), Self::Error> {
        println!("  fill    {} with {:?}", rect, fill);
        Ok(())
    }

    fn draw_outlined_rect(&mut self, rect: DisplayRect, outline: Paint) -> Result<(), Self::Error> {
        println!("  outline {} with {:?}", rect, outline);
        Ok(())
    }

    fn draw_grid_lines(&mut self, spacing: i32, bounds: DisplayRect) -> Result<(), Self::Error> {
        println!("  grid lines every {}px across {}", spacing, bounds);
        Ok(())
    }
}

fn main() {
    // Default 30x30 grid with 20px cells, drawn on a 600x600 canvas
    let mut controller = InteractionController::default();
    let mut surface = PrintSurface;

    println!("Setting up canvas:");
    let Ok(()) = controller.draw_grid(&mut surface);

    // Draw an L along the left and bottom edges, then erase its corner.
    let mut events = vec![PointerEvent::press(PointerButton::Primary, 10, 10)];
    for y in (30..600).step_by(20) {
        events.push(PointerEvent::drag(PointerButton::Primary, 10, y));
    }
    for x in (30..200).step_by(20) {
        events.push(PointerEvent::drag(PointerButton::Primary, x, 590));
    }
    events.push(PointerEvent::press(PointerButton::Secondary, 5, 595));
    // Dragging past the bottom of the canvas is ignored.
    events.push(PointerEvent::drag(PointerButton::Primary, 50, 640));

    for event in events {
        let Ok(change) = controller.handle_pointer(event, &mut surface);
        match change {
            Some(change) => println!("{:?} at {:?} -> {} {}", event.kind, event.position, change.action, change.cell),
            None => println!("{:?} at {:?} -> no change", event.kind, event.position),
        }
    }

    let corner = GridPoint::new(0, 0);
    println!("\nCorner {} is a wall: {}", corner, controller.walls().contains(corner));
    println!("Wall count: {}\n", controller.walls().len());

    let mut sink = WriteSink::new(std::io::stdout());
    if let Err(e) = controller.export(&mut sink) {
        eprintln!("Export failed: {}", e);
    }
}
