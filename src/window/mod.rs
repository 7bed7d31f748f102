//! Represents an OpenGL context and the window or environment around it.

pub mod events;

pub mod prelude {
    pub use super::events::{Event, WindowEvent};
    pub use super::{Window, WindowParams};
}

mod backends;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::math::prelude::Vector2;

use self::backends::Visitor;
use self::events::Event;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
    /// The (major, minor) version of the core-profile context to request.
    pub gl_version: (u8, u8),
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Window".to_owned(),
            size: Vector2::new(1024, 768),
            multisample: 0,
            vsync: true,
            gl_version: (3, 3),
        }
    }
}

pub struct Window {
    visitor: Box<dyn Visitor>,
    events: Vec<Event>,
    pending: Vec<Event>,
    cursor_grabbed: bool,
}

impl Window {
    /// Creates a new `Window` and makes its OpenGL context current in this thread.
    pub fn new(params: WindowParams) -> Result<Self> {
        Ok(Window {
            visitor: backends::new(params)?,
            events: Vec::new(),
            pending: Vec::new(),
            cursor_grabbed: false,
        })
    }

    /// Creates a new `Window` without any display or OpenGL context behind it.
    pub fn headless() -> Self {
        Window {
            visitor: backends::new_headless(),
            events: Vec::new(),
            pending: Vec::new(),
            cursor_grabbed: false,
        }
    }

    /// Polls the pending events of this frame. Events queued with `push_event` come
    /// first, in the order they were pushed.
    pub fn advance(&mut self) -> &[Event] {
        self.events.clear();
        self.events.append(&mut self.pending);
        self.visitor.poll_events(&mut self.events);
        &self.events
    }

    /// Queues a synthetic event, delivered by the next `advance`.
    #[inline]
    pub fn push_event(&mut self, event: Event) {
        self.pending.push(event);
    }

    /// Shows the window if it was hidden.
    #[inline]
    pub fn show(&self) {
        self.visitor.show();
    }

    /// Hides the window if it was visible.
    #[inline]
    pub fn hide(&self) {
        self.visitor.hide();
    }

    #[inline]
    pub fn set_title(&self, title: &str) {
        self.visitor.set_title(title);
    }

    /// Confines and hides the cursor, e.g. for mouse-look.
    pub fn set_cursor_grab(&mut self, grab: bool) -> Result<()> {
        if self.cursor_grabbed != grab {
            self.visitor.set_cursor_grab(grab)?;
            self.cursor_grabbed = grab;
        }

        Ok(())
    }

    #[inline]
    pub fn is_cursor_grabbed(&self) -> bool {
        self.cursor_grabbed
    }

    /// Set the context as the active context in this thread.
    #[inline]
    pub fn make_current(&self) -> Result<()> {
        self.visitor.make_current()
    }

    /// Returns true if this context is the current one in this thread.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.visitor.is_current()
    }

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until the next time the screen
    /// is refreshed. However drivers can choose to override your vsync settings, which means that
    /// you can't know in advance whether `swap_buffers` will block or not.
    #[inline]
    pub fn swap_buffers(&self) -> Result<()> {
        self.visitor.swap_buffers()
    }

    /// Returns the position of the top-left hand corner of the window relative to the
    /// top-left hand corner of the desktop.
    #[inline]
    pub fn position(&self) -> Vector2<i32> {
        self.visitor.position()
    }

    /// Returns the size in *points* of the client area of the window.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.dimensions()
    }

    /// Returns the size in *pixels* of the framebuffer behind the client area.
    #[inline]
    pub fn framebuffer_dimensions(&self) -> Vector2<u32> {
        let dpr = self.device_pixel_ratio();
        let size = self.dimensions();
        Vector2::new(
            (size.x as f32 * dpr).round() as u32,
            (size.y as f32 * dpr).round() as u32,
        )
    }

    /// Returns the ratio between the backing framebuffer resolution and the window size in
    /// screen pixels. This is typically one for a normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.device_pixel_ratio()
    }

    /// Resizes the GL context to `dimensions` pixels.
    #[inline]
    pub fn resize(&self, dimensions: Vector2<u32>) {
        self.visitor.resize(dimensions);
    }
}
