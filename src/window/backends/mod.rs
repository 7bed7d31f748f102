mod headless;

use crate::errors::*;
use crate::math::prelude::Vector2;

use super::events::Event;

pub trait Visitor {
    fn show(&self);
    fn hide(&self);
    fn set_title(&self, title: &str);
    fn position(&self) -> Vector2<i32>;
    fn dimensions(&self) -> Vector2<u32>;
    fn device_pixel_ratio(&self) -> f32;
    fn resize(&self, dimensions: Vector2<u32>);
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn set_cursor_grab(&self, grab: bool) -> Result<()>;
    fn is_current(&self) -> bool;
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
}

pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor {})
}

mod glutin;
pub use self::glutin::new;
