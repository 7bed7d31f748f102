use std::mem;
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;

use super::capabilities::check;
use super::errors::Result;

/// How a sequence of vertices is assembled into primitives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Primitive {
    Points,
    Lines,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl From<Primitive> for GLenum {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Points => gl::POINTS,
            Primitive::Lines => gl::LINES,
            Primitive::LineStrip => gl::LINE_STRIP,
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::TriangleStrip => gl::TRIANGLE_STRIP,
            Primitive::TriangleFan => gl::TRIANGLE_FAN,
        }
    }
}

/// An immutable `GL_ARRAY_BUFFER` filled with floats.
#[derive(Debug)]
pub struct VertexBuffer {
    id: GLuint,
    len: usize,
}

impl VertexBuffer {
    pub fn new(data: &[f32]) -> Result<Self> {
        unsafe {
            let mut id = 0;
            gl::GenBuffers(1, &mut id);
            assert!(id != 0);

            gl::BindBuffer(gl::ARRAY_BUFFER, id);

            let value = if data.is_empty() {
                ptr::null()
            } else {
                data.as_ptr() as *const c_void
            };

            gl::BufferData(
                gl::ARRAY_BUFFER,
                (data.len() * mem::size_of::<f32>()) as GLsizeiptr,
                value,
                gl::STATIC_DRAW,
            );

            check()?;
            Ok(VertexBuffer {
                id,
                len: data.len(),
            })
        }
    }

    #[inline]
    pub fn handle(&self) -> GLuint {
        self.id
    }

    /// Number of floats stored in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe { gl::DeleteBuffers(1, &self.id) };
    }
}

/// A vertex array object recording which buffers feed which attribute slots.
#[derive(Debug)]
pub struct VertexArray {
    id: GLuint,
}

impl VertexArray {
    pub fn new() -> Result<Self> {
        unsafe {
            let mut id = 0;
            gl::GenVertexArrays(1, &mut id);
            assert!(id != 0);
            check()?;
            Ok(VertexArray { id })
        }
    }

    #[inline]
    pub fn handle(&self) -> GLuint {
        self.id
    }

    /// Feeds attribute `location` from `buffer`, reading `components` tightly packed
    /// floats per vertex.
    pub fn attribute(&self, location: GLuint, buffer: &VertexBuffer, components: u8) -> Result<()> {
        assert!(components >= 1 && components <= 4);

        unsafe {
            gl::BindVertexArray(self.id);
            gl::BindBuffer(gl::ARRAY_BUFFER, buffer.id);
            gl::EnableVertexAttribArray(location);
            gl::VertexAttribPointer(
                location,
                GLint::from(components),
                gl::FLOAT,
                gl::FALSE,
                0,
                ptr::null(),
            );

            check()
        }
    }

    #[inline]
    pub fn bind(&self) {
        unsafe { gl::BindVertexArray(self.id) };
    }

    /// Draws `count` vertices starting at `first`.
    pub fn draw(&self, primitive: Primitive, first: usize, count: usize) -> Result<()> {
        unsafe {
            gl::BindVertexArray(self.id);
            gl::DrawArrays(primitive.into(), first as GLint, count as GLsizei);
            check()
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe { gl::DeleteVertexArrays(1, &self.id) };
    }
}
