//! Keyboard and mouse state accumulated from window events.
//!
//! The engine feeds every `InputEvent` of a frame into `Input` and calls `advance`
//! once the frame is over, so the per-frame queries below always describe the frame
//! being updated:
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! input.is_key_down(Key::W);
//!
//! // Checks if a key has been pressed down during the last frame.
//! input.is_key_press(Key::Space);
//!
//! // Gets the raw mouse motion accumulated since the last frame.
//! input.mouse_motion();
//! ```

pub mod events;
pub mod keyboard;
pub mod mouse;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::Key;
    pub use super::mouse::MouseButton;
    pub use super::Input;
}

use crate::math::prelude::Vector2;

use self::events::InputEvent;
use self::keyboard::{Key, Keyboard};
use self::mouse::{Mouse, MouseButton};

#[derive(Default)]
pub struct Input {
    keyboard: Keyboard,
    mouse: Mouse,
}

impl Input {
    pub fn new() -> Self {
        Input::default()
    }

    /// Applies one event to the device states.
    pub fn update_with(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMoved { position } => self.mouse.on_move(position),
            InputEvent::MouseMotion { delta } => self.mouse.on_motion(delta),
            InputEvent::MousePressed { button } => self.mouse.on_button_pressed(button),
            InputEvent::MouseReleased { button } => self.mouse.on_button_released(button),
            InputEvent::MouseWheel { delta } => self.mouse.on_wheel_scroll(delta),
            InputEvent::KeyboardPressed { key } => self.keyboard.on_key_pressed(key),
            InputEvent::KeyboardReleased { key } => self.keyboard.on_key_released(key),
        }
    }

    /// Drops the per-frame edges and motion, keeping what is still held down.
    pub fn advance(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
    }

    /// Forgets everything, e.g. after the window lost focus and release events may
    /// never arrive.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.mouse.reset();
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }

    #[inline]
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.mouse.is_button_down(button)
    }

    #[inline]
    pub fn is_mouse_press(&self, button: MouseButton) -> bool {
        self.mouse.is_button_press(button)
    }

    #[inline]
    pub fn is_mouse_release(&self, button: MouseButton) -> bool {
        self.mouse.is_button_release(button)
    }

    /// The cursor position in points relative to the top-left corner of the window.
    #[inline]
    pub fn mouse_position(&self) -> Vector2<f32> {
        self.mouse.position()
    }

    /// Cursor movement in points since last frame.
    #[inline]
    pub fn mouse_movement(&self) -> Vector2<f32> {
        self.mouse.movement()
    }

    /// Raw device motion accumulated since last frame.
    #[inline]
    pub fn mouse_motion(&self) -> Vector2<f32> {
        self.mouse.motion()
    }

    #[inline]
    pub fn mouse_scroll(&self) -> Vector2<f32> {
        self.mouse.scroll()
    }
}
