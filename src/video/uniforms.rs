use std::collections::HashMap;

use gl;
use gl::types::*;

use crate::math::prelude::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// Uniform variable type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UniformVariableType {
    I32,
    F32,
    Vector2f,
    Vector3f,
    Vector4f,
    Matrix3f,
    Matrix4f,
}

/// A value that could be uploaded into a uniform slot of a linked program. Matrices are
/// stored column major, the layout `cgmath` uses, with an optional transpose.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum UniformVariable {
    I32(i32),
    F32(f32),
    Vector2f([f32; 2]),
    Vector3f([f32; 3]),
    Vector4f([f32; 4]),
    Matrix3f([[f32; 3]; 3], bool),
    Matrix4f([[f32; 4]; 4], bool),
}

impl UniformVariable {
    pub fn variable_type(&self) -> UniformVariableType {
        match *self {
            UniformVariable::I32(_) => UniformVariableType::I32,
            UniformVariable::F32(_) => UniformVariableType::F32,
            UniformVariable::Vector2f(_) => UniformVariableType::Vector2f,
            UniformVariable::Vector3f(_) => UniformVariableType::Vector3f,
            UniformVariable::Vector4f(_) => UniformVariableType::Vector4f,
            UniformVariable::Matrix3f(_, _) => UniformVariableType::Matrix3f,
            UniformVariable::Matrix4f(_, _) => UniformVariableType::Matrix4f,
        }
    }

    /// Uploads the value into `location` of the program currently in use. A location
    /// of `-1` is silently ignored by OpenGL.
    ///
    /// # Unsafe
    ///
    /// The OpenGL context must be current in this thread.
    pub unsafe fn upload(&self, location: GLint) {
        match *self {
            UniformVariable::I32(v) => gl::Uniform1i(location, v),
            UniformVariable::F32(v) => gl::Uniform1f(location, v),
            UniformVariable::Vector2f(v) => gl::Uniform2f(location, v[0], v[1]),
            UniformVariable::Vector3f(v) => gl::Uniform3f(location, v[0], v[1], v[2]),
            UniformVariable::Vector4f(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Matrix3f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix3fv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix4f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix4fv(location, 1, transpose, v[0].as_ptr())
            }
        }
    }
}

impl From<i32> for UniformVariable {
    fn from(v: i32) -> Self {
        UniformVariable::I32(v)
    }
}

impl From<bool> for UniformVariable {
    fn from(v: bool) -> Self {
        UniformVariable::I32(v as i32)
    }
}

impl From<f32> for UniformVariable {
    fn from(v: f32) -> Self {
        UniformVariable::F32(v)
    }
}

impl From<[f32; 2]> for UniformVariable {
    fn from(v: [f32; 2]) -> Self {
        UniformVariable::Vector2f(v)
    }
}

impl From<Vector2<f32>> for UniformVariable {
    fn from(v: Vector2<f32>) -> Self {
        UniformVariable::Vector2f(*v.as_ref())
    }
}

impl From<[f32; 3]> for UniformVariable {
    fn from(v: [f32; 3]) -> Self {
        UniformVariable::Vector3f(v)
    }
}

impl From<(f32, f32, f32)> for UniformVariable {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        UniformVariable::Vector3f([x, y, z])
    }
}

impl From<Vector3<f32>> for UniformVariable {
    fn from(v: Vector3<f32>) -> Self {
        UniformVariable::Vector3f(*v.as_ref())
    }
}

impl From<[f32; 4]> for UniformVariable {
    fn from(v: [f32; 4]) -> Self {
        UniformVariable::Vector4f(v)
    }
}

impl From<Vector4<f32>> for UniformVariable {
    fn from(v: Vector4<f32>) -> Self {
        UniformVariable::Vector4f(*v.as_ref())
    }
}

impl From<Matrix3<f32>> for UniformVariable {
    fn from(v: Matrix3<f32>) -> Self {
        UniformVariable::Matrix3f(*v.as_ref(), false)
    }
}

impl From<[[f32; 3]; 3]> for UniformVariable {
    fn from(v: [[f32; 3]; 3]) -> Self {
        UniformVariable::Matrix3f(v, false)
    }
}

impl From<Matrix4<f32>> for UniformVariable {
    fn from(v: Matrix4<f32>) -> Self {
        UniformVariable::Matrix4f(*v.as_ref(), false)
    }
}

impl From<[[f32; 4]; 4]> for UniformVariable {
    fn from(v: [[f32; 4]; 4]) -> Self {
        UniformVariable::Matrix4f(v, false)
    }
}

/// Caches uniform locations by name, so the driver is asked once per name.
///
/// Misses are cached too: an inactive or misspelled uniform resolves to `-1`, which
/// OpenGL ignores on upload.
#[derive(Debug, Default, Clone)]
pub struct UniformLocations {
    locations: HashMap<String, GLint>,
}

impl UniformLocations {
    pub fn new() -> Self {
        UniformLocations::default()
    }

    /// Returns the cached location of `name`, or resolves it with `query` and remembers
    /// the answer.
    pub fn get_or_query<F, E>(&mut self, name: &str, query: F) -> Result<GLint, E>
    where
        F: FnOnce(&str) -> Result<GLint, E>,
    {
        if let Some(location) = self.locations.get(name) {
            return Ok(*location);
        }

        let location = query(name)?;
        if location == -1 {
            debug!("Uniform {:?} is not active in program.", name);
        }

        self.locations.insert(name.to_owned(), location);
        Ok(location)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<GLint> {
        self.locations.get(name).cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.locations.clear();
    }
}
