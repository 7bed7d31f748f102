use glutin::GlContext;

use crate::errors::*;
use crate::math::prelude::Vector2;
use crate::video;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    pub fn from(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ));

        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(
                glutin::Api::OpenGl,
                params.gl_version,
            ))
            .with_depth_buffer(24)
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)
            .map_err(video::Error::from)?;

        let visitor = GlutinVisitor {
            window,
            events_loop,
        };

        unsafe {
            visitor.window.make_current().map_err(video::Error::from)?;
            gl::load_with(|symbol| visitor.window.get_proc_address(symbol) as *const _);
        }

        info!(
            "Created window {:?} with {}x{} points (dpr {}).",
            params.title,
            params.size.x,
            params.size.y,
            visitor.device_pixel_ratio()
        );

        Ok(visitor)
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn show(&self) {
        self.window.show();
    }

    #[inline]
    fn hide(&self) {
        self.window.hide();
    }

    #[inline]
    fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    #[inline]
    fn position(&self) -> Vector2<i32> {
        match self.window.get_position() {
            Some(pos) => Vector2::new(pos.x as i32, pos.y as i32),
            None => Vector2::new(0, 0),
        }
    }

    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        match self.window.get_inner_size() {
            Some(size) => Vector2::new(size.width as u32, size.height as u32),
            None => Vector2::new(0, 0),
        }
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.window.get_hidpi_factor() as f32
    }

    #[inline]
    fn resize(&self, dimensions: Vector2<u32>) {
        let size = glutin::dpi::PhysicalSize::new(f64::from(dimensions.x), f64::from(dimensions.y));
        self.window.resize(size)
    }

    #[inline]
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v) {
                events.push(e);
            }
        });
    }

    fn set_cursor_grab(&self, grab: bool) -> Result<()> {
        self.window
            .grab_cursor(grab)
            .map_err(|err| err_format!("Failed to grab cursor: {}", err))?;
        self.window.hide_cursor(grab);
        Ok(())
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window.make_current().map_err(video::Error::from)?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers().map_err(video::Error::from)?;
        Ok(())
    }
}
