//! # glsandbox
//!
//! A small harness for OpenGL experiments. It opens a window with a core-profile
//! context, compiles and links GLSL programs through a thin wrapper, uploads a few
//! fixed vertex buffers and drives a single-threaded render loop that reacts to
//! keyboard and mouse input.
//!
//! ```rust,ignore
//! use glsandbox::prelude::*;
//!
//! struct Demo {
//!     program: Program,
//! }
//!
//! impl Application for Demo {
//!     fn on_render(&mut self, ctx: &mut Context) -> Result<()> {
//!         self.program.bind();
//!         self.program.set_uniform("u_Time", ctx.time.elapsed_secs())?;
//!         Ok(())
//!     }
//! }
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub extern crate gl;
pub extern crate glutin;

#[macro_use]
pub mod errors;

pub mod application;
pub mod input;
pub mod math;
pub mod scene;
pub mod video;
pub mod window;

pub mod prelude;
