use std::collections::HashSet;

use crate::math::prelude::Vector2;

/// How many pixels of a touchpad scroll make up one line of a wheel scroll.
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Converts a pixel-precise scroll delta into wheel lines.
#[inline]
pub fn pixels_to_lines(delta: (f32, f32)) -> (f32, f32) {
    (delta.0 / PIXELS_PER_LINE, delta.1 / PIXELS_PER_LINE)
}

/// Describes a button of a mouse controller.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

pub struct Mouse {
    downs: HashSet<MouseButton>,
    presses: HashSet<MouseButton>,
    releases: HashSet<MouseButton>,
    last_position: Vector2<f32>,
    position: Vector2<f32>,
    motion: Vector2<f32>,
    scroll: Vector2<f32>,
}

impl Default for Mouse {
    fn default() -> Self {
        Mouse::new()
    }
}

impl Mouse {
    pub fn new() -> Self {
        Mouse {
            downs: HashSet::new(),
            presses: HashSet::new(),
            releases: HashSet::new(),
            last_position: Vector2::new(0.0, 0.0),
            position: Vector2::new(0.0, 0.0),
            motion: Vector2::new(0.0, 0.0),
            scroll: Vector2::new(0.0, 0.0),
        }
    }

    /// Forgets buttons and per-frame deltas. The cursor position is kept, so the
    /// next move is measured from where the cursor was last seen.
    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
        self.last_position = self.position;
        self.motion = Vector2::new(0.0, 0.0);
        self.scroll = Vector2::new(0.0, 0.0);
    }

    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
        self.scroll = Vector2::new(0.0, 0.0);
        self.motion = Vector2::new(0.0, 0.0);
        self.last_position = self.position;
    }

    #[inline]
    pub fn on_move(&mut self, position: (f32, f32)) {
        self.position = position.into();
    }

    /// Relative device motion piles up until the end of the frame.
    #[inline]
    pub fn on_motion(&mut self, delta: (f32, f32)) {
        self.motion += Vector2::from(delta);
    }

    #[inline]
    pub fn on_button_pressed(&mut self, button: MouseButton) {
        if self.downs.insert(button) {
            self.presses.insert(button);
        }
    }

    #[inline]
    pub fn on_button_released(&mut self, button: MouseButton) {
        self.downs.remove(&button);
        self.releases.insert(button);
    }

    #[inline]
    pub fn on_wheel_scroll(&mut self, delta: (f32, f32)) {
        self.scroll += Vector2::from(delta);
    }

    #[inline]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.downs.contains(&button)
    }

    #[inline]
    pub fn is_button_press(&self, button: MouseButton) -> bool {
        self.presses.contains(&button)
    }

    #[inline]
    pub fn is_button_release(&self, button: MouseButton) -> bool {
        self.releases.contains(&button)
    }

    #[inline]
    pub fn position(&self) -> Vector2<f32> {
        self.position
    }

    #[inline]
    pub fn movement(&self) -> Vector2<f32> {
        self.position - self.last_position
    }

    #[inline]
    pub fn motion(&self) -> Vector2<f32> {
        self.motion
    }

    #[inline]
    pub fn scroll(&self) -> Vector2<f32> {
        self.scroll
    }
}
