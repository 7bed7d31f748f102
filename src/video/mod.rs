//! Thin forwarding layer over the OpenGL API.
//!
//! Nothing here is a renderer: `Program` wraps shader compilation and linking,
//! `VertexBuffer` and `VertexArray` own GPU objects, and the remaining functions set
//! the handful of fixed-function states the demos need.

pub mod buffer;
pub mod capabilities;
pub mod errors;
pub mod program;
pub mod shader;
pub mod types;
pub mod uniforms;

pub use self::buffer::{Primitive, VertexArray, VertexBuffer};
pub use self::capabilities::{check, Capabilities, Version};
pub use self::errors::{Error, Result};
pub use self::program::{ActiveVariable, Program};
pub use self::shader::ShaderKind;
pub use self::uniforms::{UniformLocations, UniformVariable, UniformVariableType};

use gl;
use gl::types::*;

use crate::math::prelude::Vector2;

/// The OpenGL version every demo is written against.
pub const REQUIRED_VERSION: Version = Version::GL(3, 3);

/// Clears the color buffer, and the depth buffer when `depth` is set.
pub fn clear(color: [f32; 4], depth: Option<f32>) -> Result<()> {
    unsafe {
        let mut bits = gl::COLOR_BUFFER_BIT;
        gl::ClearColor(color[0], color[1], color[2], color[3]);

        if let Some(v) = depth {
            gl::DepthMask(gl::TRUE);
            gl::ClearDepth(f64::from(v));
            bits |= gl::DEPTH_BUFFER_BIT;
        }

        gl::Clear(bits);
        check()
    }
}

/// Sets the viewport to cover a framebuffer of `dimensions` pixels.
pub fn set_viewport(dimensions: Vector2<u32>) -> Result<()> {
    unsafe {
        gl::Viewport(0, 0, dimensions.x as GLsizei, dimensions.y as GLsizei);
        check()
    }
}

/// Toggles depth testing with the `LESS` comparison.
pub fn set_depth_test(enable: bool) -> Result<()> {
    unsafe {
        if enable {
            gl::Enable(gl::DEPTH_TEST);
            gl::DepthFunc(gl::LESS);
        } else {
            gl::Disable(gl::DEPTH_TEST);
        }

        check()
    }
}
