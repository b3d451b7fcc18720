use macroquad::prelude::*;
use wall_grid::{DisplayPoint, PointerButton, PointerEvent, PointerKind};

/// Mouse state read once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseSample {
    pub position: (f32, f32),
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub secondary_pressed: bool,
    pub secondary_down: bool,
}

impl MouseSample {
    /// Reads the current frame's mouse state from macroquad.
    pub fn capture() -> Self {
        MouseSample {
            position: mouse_position(),
            primary_pressed: is_mouse_button_pressed(MouseButton::Left),
            primary_down: is_mouse_button_down(MouseButton::Left),
            secondary_pressed: is_mouse_button_pressed(MouseButton::Right),
            secondary_down: is_mouse_button_down(MouseButton::Right),
        }
    }
}

/// Turns per-frame mouse samples into discrete press and drag events.
///
/// A button going down yields a press. A held button yields a drag only when
/// the cursor has moved to a different pixel since the previous frame.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_position: Option<DisplayPoint>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sample: MouseSample) -> Vec<PointerEvent> {
        // Floor so that fractional positions left of or above the canvas stay negative.
        let position = DisplayPoint::new(sample.position.0.floor() as i32, sample.position.1.floor() as i32);
        let moved = self.last_position != Some(position);
        self.last_position = Some(position);

        let buttons = [
            (PointerButton::Primary, sample.primary_pressed, sample.primary_down),
            (PointerButton::Secondary, sample.secondary_pressed, sample.secondary_down),
        ];

        buttons
            .into_iter()
            .filter_map(|(button, pressed, down)| {
                if pressed {
                    Some(PointerEvent::new(PointerKind::Press, button, position))
                } else if down && moved {
                    Some(PointerEvent::new(PointerKind::Drag, button, position))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32) -> MouseSample {
        MouseSample {
            position: (x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_mouse_emits_nothing() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.update(sample(10.0, 10.0)).is_empty());
        assert!(tracker.update(sample(50.0, 10.0)).is_empty());
    }

    #[test]
    fn test_press_then_drag() {
        let mut tracker = PointerTracker::new();
        let press = MouseSample {
            primary_pressed: true,
            primary_down: true,
            ..sample(10.4, 10.9)
        };
        assert_eq!(tracker.update(press), vec![PointerEvent::press(PointerButton::Primary, 10, 10)]);

        // Held without moving: no repeat.
        let held = MouseSample {
            primary_down: true,
            ..sample(10.7, 10.1)
        };
        assert!(tracker.update(held).is_empty());

        let moved = MouseSample {
            primary_down: true,
            ..sample(31.0, 12.0)
        };
        assert_eq!(tracker.update(moved), vec![PointerEvent::drag(PointerButton::Primary, 31, 12)]);
    }

    #[test]
    fn test_secondary_drag() {
        let mut tracker = PointerTracker::new();
        tracker.update(sample(0.0, 0.0));
        let moved = MouseSample {
            secondary_down: true,
            ..sample(100.0, 200.0)
        };
        assert_eq!(tracker.update(moved), vec![PointerEvent::drag(PointerButton::Secondary, 100, 200)]);
    }

    #[test]
    fn test_negative_positions_are_floored() {
        let mut tracker = PointerTracker::new();
        let press = MouseSample {
            primary_pressed: true,
            primary_down: true,
            ..sample(-0.5, 3.0)
        };
        assert_eq!(tracker.update(press), vec![PointerEvent::press(PointerButton::Primary, -1, 3)]);
    }
}
