use crate::errors::*;
use crate::input::keyboard::Key;
use crate::input::Input;
use crate::video::{self, Capabilities};
use crate::window::events::{Event, WindowEvent};
use crate::window::Window;

use super::settings::Settings;
use super::time::TimeSystem;
use super::Application;

/// The systems an `Application` can reach during a frame.
pub struct Context {
    pub window: Window,
    pub input: Input,
    pub time: TimeSystem,
    capabilities: Option<Capabilities>,
    shutdown: bool,
}

impl Context {
    /// Shutdown the whole application at the end of this frame.
    #[inline]
    pub fn shutdown(&mut self) {
        self.shutdown = true;
    }

    /// Returns true if we are going to shutdown the application at the end of this frame.
    #[inline]
    pub fn is_shutdown(&self) -> bool {
        self.shutdown
    }

    /// Gets the information of the OpenGL implementation, `None` when running headless.
    #[inline]
    pub fn capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }

    /// Gets the information of the OpenGL implementation, failing when there is no
    /// context to draw with.
    pub fn require_capabilities(&self) -> Result<&Capabilities> {
        match self.capabilities {
            Some(ref capabilities) => Ok(capabilities),
            None => bail!("An OpenGL context is required, but the engine runs headless."),
        }
    }

    /// The aspect ratio of the framebuffer, falls back to 1 while it has no area.
    pub fn aspect(&self) -> f32 {
        let size = self.window.framebuffer_dimensions();
        if size.x == 0 || size.y == 0 {
            1.0
        } else {
            size.x as f32 / size.y as f32
        }
    }
}

/// `Engine` is the root object of a demo. It binds the window, input and time
/// systems in a central place and drives the main loop.
pub struct Engine {
    context: Context,
    headless: bool,
}

impl Engine {
    /// Setup engine with specified settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let (window, capabilities) = if settings.headless {
            (Window::headless(), None)
        } else {
            let window = Window::new(settings.window.clone())?;
            let capabilities = unsafe { Capabilities::parse()? };

            info!(
                "OpenGL {:?} by {} on {} (GLSL {}).",
                capabilities.version,
                capabilities.vendor,
                capabilities.renderer,
                capabilities.shading_language
            );

            capabilities.check(video::REQUIRED_VERSION)?;
            video::set_viewport(window.framebuffer_dimensions())?;
            (window, Some(capabilities))
        };

        let context = Context {
            window,
            input: Input::new(),
            time: TimeSystem::new(settings.engine),
            capabilities,
            shutdown: false,
        };

        Ok(Engine {
            context,
            headless: settings.headless,
        })
    }

    #[inline]
    pub fn context(&mut self) -> &mut Context {
        &mut self.context
    }

    /// Run the main loop of `Engine`, this will block the working thread until the
    /// window is closed, Escape is pressed or `Context::shutdown` is requested. A
    /// headless engine runs exactly one frame.
    pub fn run<T>(mut self, mut application: T) -> Result<()>
    where
        T: Application,
    {
        let mut alive = true;
        while alive {
            self.context.time.advance();

            // Poll any possible events first.
            let events = self.context.window.advance().to_vec();
            for v in events {
                match v {
                    Event::Window(WindowEvent::Closed) => alive = false,
                    Event::Window(WindowEvent::Resized(_, _)) => self.on_resized()?,
                    Event::Window(WindowEvent::LostFocus) => self.context.input.reset(),
                    Event::Window(_) => {}
                    Event::InputDevice(value) => self.context.input.update_with(value),
                }
            }

            if self.context.input.is_key_press(Key::Escape) {
                alive = false;
            }

            if alive {
                application.on_update(&mut self.context)?;
                application.on_render(&mut self.context)?;
                self.context.window.swap_buffers()?;
            }

            self.context.input.advance();
            alive = alive && !self.context.is_shutdown() && !self.headless;
        }

        info!(
            "Exiting after {} frames ({:.2}s).",
            self.context.time.frames(),
            self.context.time.elapsed_secs()
        );

        application.on_exit(&mut self.context)
    }

    fn on_resized(&mut self) -> Result<()> {
        let dimensions = self.context.window.framebuffer_dimensions();
        debug!("Framebuffer resized to {}x{}.", dimensions.x, dimensions.y);

        if !self.headless {
            self.context.window.resize(dimensions);
            video::set_viewport(dimensions)?;
        }

        Ok(())
    }
}
