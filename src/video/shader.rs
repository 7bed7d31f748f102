use std::fs;
use std::path::Path;

use gl;
use gl::types::*;

use super::errors::{Error, Result};

/// The programmable stages a shader object can be compiled for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
    Compute,
}

impl From<ShaderKind> for GLenum {
    fn from(kind: ShaderKind) -> Self {
        match kind {
            ShaderKind::Vertex => gl::VERTEX_SHADER,
            ShaderKind::Fragment => gl::FRAGMENT_SHADER,
            ShaderKind::Geometry => gl::GEOMETRY_SHADER,
            ShaderKind::TessControl => gl::TESS_CONTROL_SHADER,
            ShaderKind::TessEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderKind::Compute => gl::COMPUTE_SHADER,
        }
    }
}

impl ShaderKind {
    /// Infers the stage from the file extension of `path`.
    ///
    /// | extension | stage |
    /// |-----------|-------|
    /// | `.vert`   | vertex |
    /// | `.frag`   | fragment |
    /// | `.geom`   | geometry |
    /// | `.tesc`   | tessellation control |
    /// | `.tese`   | tessellation evaluation |
    /// | `.comp`   | compute |
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ShaderKind> {
        let ext = path
            .as_ref()
            .extension()
            .map(|v| format!(".{}", v.to_string_lossy()))
            .unwrap_or_default();

        match ext.as_str() {
            ".vert" => Ok(ShaderKind::Vertex),
            ".frag" => Ok(ShaderKind::Fragment),
            ".geom" => Ok(ShaderKind::Geometry),
            ".tesc" => Ok(ShaderKind::TessControl),
            ".tese" => Ok(ShaderKind::TessEvaluation),
            ".comp" => Ok(ShaderKind::Compute),
            _ => Err(Error::UnknownShaderExtension(ext)),
        }
    }
}

/// Makes sure `path` names an existing regular file.
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let metadata = fs::metadata(path).map_err(|_| Error::ShaderFileNotExists(display.clone()))?;
    if !metadata.is_file() {
        return Err(Error::ShaderFileNotRegular(display));
    }

    Ok(())
}

/// Reads the shader source at `path` after checking it is a regular file.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    check_file(path)?;

    fs::read_to_string(path)
        .map_err(|err| Error::ShaderFileUnreadable(path.display().to_string(), err.to_string()))
}
