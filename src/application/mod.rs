//! The application model shared by every demo.
//!
//! ## Application
//!
//! A demo implements the `Application` trait, which defines a simple per-frame
//! state model. Every method gets the `Context` holding the window, the input
//! state and the timing of the current frame.
//!
//! ## Engine
//!
//! `Engine` is where we actually run the main loop and fire the `Application`
//! instance:
//!
//! ```rust,ignore
//! let settings = Settings::from_args()?;
//! let mut engine = Engine::new(&settings)?;
//! let demo = Demo::new(engine.context(), &settings)?;
//! engine.run(demo)?;
//! ```

pub mod settings;
pub mod time;

mod engine;

pub mod prelude {
    pub use super::settings::{EngineParams, Settings};
    pub use super::time::TimeSystem;
    pub use super::{Application, Context, Engine};
}

pub use self::engine::{Context, Engine};
pub use self::settings::Settings;

use crate::errors::*;

/// `Application` is a user-friendly facade to building a demo, which defines a
/// number of event functions that get executed in a pre-determined order.
pub trait Application {
    /// `Application::on_update` is called every frame. Its the main workhorse
    /// function for frame updates.
    fn on_update(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    /// `Application::on_render` is called after `on_update`, right before the
    /// buffers are swapped.
    fn on_render(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }

    /// `Application::on_exit` is called once the main loop has stopped.
    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        Ok(())
    }
}
