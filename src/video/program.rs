//! A thin wrapper around an OpenGL program object.
//!
//! `Program` forwards shader compilation, linking and uniform updates straight to the
//! driver. The only state it keeps on the host side is whether the program has been
//! linked and a cache of uniform locations.
//!
//! ```rust,ignore
//! let mut program = Program::new()?;
//! program.compile_shader_file("shaders/basic.vert")?;
//! program.compile_shader_file("shaders/basic.frag")?;
//! program.link()?;
//!
//! program.bind();
//! program.set_uniform("u_Color", [1.0, 0.5, 0.31])?;
//! ```

use std::ffi::CString;
use std::fmt;
use std::path::Path;
use std::ptr;

use gl;
use gl::types::*;

use super::capabilities::{check, Capabilities};
use super::errors::{Error, Result};
use super::shader::{self, ShaderKind};
use super::types::glsl_type_name;
use super::uniforms::{UniformLocations, UniformVariable};

/// An active uniform or vertex attribute reported by the driver after linking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveVariable {
    pub location: GLint,
    pub name: String,
    pub kind: GLenum,
}

impl ActiveVariable {
    /// The GLSL spelling of the variable type, e.g. `mat4`.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        glsl_type_name(self.kind)
    }
}

impl fmt::Display for ActiveVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.location, self.name, self.type_name())
    }
}

pub struct Program {
    id: GLuint,
    linked: bool,
    uniforms: UniformLocations,
}

impl Program {
    /// Creates an empty program object.
    ///
    /// The OpenGL context must be current in this thread.
    pub fn new() -> Result<Self> {
        let id = unsafe { gl::CreateProgram() };
        if id == 0 {
            return Err(Error::ProgramCreationFailure);
        }

        Ok(Program {
            id,
            linked: false,
            uniforms: UniformLocations::new(),
        })
    }

    /// Compiles every file in `paths`, inferring the stages from their extensions, and
    /// links the result.
    pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut program = Program::new()?;
        for path in paths {
            program.compile_shader_file(path)?;
        }

        program.link()?;
        Ok(program)
    }

    /// Compiles the shader at `path` and attaches it to this program. The stage is
    /// inferred from the file extension.
    pub fn compile_shader_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        shader::check_file(path)?;
        let kind = ShaderKind::from_path(path)?;
        self.compile_shader_file_as(path, kind)
    }

    /// Compiles the shader at `path` as `kind` and attaches it to this program.
    pub fn compile_shader_file_as<P: AsRef<Path>>(&mut self, path: P, kind: ShaderKind) -> Result<()> {
        let path = path.as_ref();
        let source = shader::read_source(path)?;
        self.compile_shader_source(&source, kind, Some(&path.display().to_string()))
    }

    /// Compiles `source` as `kind` and attaches it to this program. `file` only shows up
    /// in the error message when the compilation fails.
    pub fn compile_shader_source(
        &mut self,
        source: &str,
        kind: ShaderKind,
        file: Option<&str>,
    ) -> Result<()> {
        unsafe {
            let shader = gl::CreateShader(kind.into());
            if shader == 0 {
                return Err(Error::ShaderCreationFailure);
            }

            let ptr = source.as_ptr() as *const GLchar;
            let len = source.len() as GLint;
            gl::ShaderSource(shader, 1, &ptr, &len);
            gl::CompileShader(shader);

            let mut status = GLint::from(gl::FALSE);
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);

            if status != GLint::from(gl::TRUE) {
                let mut len = 0;
                gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
                let log = read_info_log(len, |cap, written, buf| {
                    gl::GetShaderInfoLog(shader, cap, written, buf)
                });

                gl::DeleteShader(shader);
                return Err(Error::CompileFailure {
                    file: file.unwrap_or("<source>").to_owned(),
                    log,
                });
            }

            gl::AttachShader(self.id, shader);
            // Only flags the shader; it lives as long as the program it is attached to.
            gl::DeleteShader(shader);
            check()?;
        }

        debug!("Compiled {:?} shader {}.", kind, file.unwrap_or("<source>"));
        Ok(())
    }

    /// Links the attached shaders. Previously cached uniform locations are dropped
    /// since relinking may move them.
    pub fn link(&mut self) -> Result<()> {
        unsafe {
            gl::LinkProgram(self.id);

            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(self.id, gl::LINK_STATUS, &mut status);

            if status != GLint::from(gl::TRUE) {
                let id = self.id;
                let mut len = 0;
                gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
                let log = read_info_log(len, |cap, written, buf| {
                    gl::GetProgramInfoLog(id, cap, written, buf)
                });

                self.linked = false;
                return Err(Error::LinkFailure(log));
            }
        }

        self.linked = true;
        self.uniforms.clear();
        Ok(())
    }

    /// Checks whether the program can execute given the current OpenGL state.
    pub fn validate(&self) -> Result<()> {
        if !self.linked {
            return Err(Error::ProgramNotLinked("validation".into()));
        }

        unsafe {
            gl::ValidateProgram(self.id);

            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(self.id, gl::VALIDATE_STATUS, &mut status);

            if status != GLint::from(gl::TRUE) {
                let id = self.id;
                let mut len = 0;
                gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
                let log = read_info_log(len, |cap, written, buf| {
                    gl::GetProgramInfoLog(id, cap, written, buf)
                });

                return Err(Error::ValidateFailure(log));
            }
        }

        Ok(())
    }

    /// Installs the program as part of the current rendering state. Does nothing until
    /// the program has been linked successfully.
    #[inline]
    pub fn bind(&self) {
        if self.linked {
            unsafe { gl::UseProgram(self.id) };
        }
    }

    #[inline]
    pub fn handle(&self) -> GLuint {
        self.id
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    /// Associates a vertex attribute index with a named attribute variable. Takes effect
    /// at the next link.
    pub fn bind_attrib_location(&mut self, location: GLuint, name: &str) -> Result<()> {
        let c_name = c_string(name)?;
        unsafe {
            gl::BindAttribLocation(self.id, location, c_name.as_ptr());
            check()
        }
    }

    /// Binds a user-defined fragment output to a color number. Takes effect at the next
    /// link.
    pub fn bind_frag_data_location(&mut self, location: GLuint, name: &str) -> Result<()> {
        let c_name = c_string(name)?;
        unsafe {
            gl::BindFragDataLocation(self.id, location, c_name.as_ptr());
            check()
        }
    }

    /// Returns the location of uniform `name`, asking the driver only on the first call.
    pub fn uniform_location(&mut self, name: &str) -> Result<GLint> {
        if !self.linked {
            return Err(Error::ProgramNotLinked(format!("querying uniform {:?}", name)));
        }

        let id = self.id;
        self.uniforms.get_or_query(name, |name| {
            let c_name = c_string(name)?;
            Ok(unsafe { gl::GetUniformLocation(id, c_name.as_ptr()) })
        })
    }

    /// Sets uniform `name` of this program. The program must be the one in use, see
    /// [`Program::bind`].
    pub fn set_uniform<T>(&mut self, name: &str, value: T) -> Result<()>
    where
        T: Into<UniformVariable>,
    {
        if !self.linked {
            return Err(Error::ProgramNotLinked(format!("setting uniform {:?}", name)));
        }

        let location = self.uniform_location(name)?;
        let variable: UniformVariable = value.into();
        unsafe {
            variable.upload(location);
            check()
        }
    }

    /// Lists the active uniforms of the linked program. Uniforms that belong to a uniform
    /// block are skipped.
    ///
    /// Contexts older than GL 4.3 (or ES 3.1) go through `glGetActiveUniform`, since a
    /// loaded `glGetProgramInterfaceiv` pointer says nothing about driver support.
    pub fn active_uniforms(&self, capabilities: &Capabilities) -> Result<Vec<ActiveVariable>> {
        if !self.linked {
            return Err(Error::ProgramNotLinked("listing active uniforms".into()));
        }

        unsafe {
            let vars = if capabilities.has_program_interface_query() {
                self.interface_resources(gl::UNIFORM)
            } else {
                self.legacy_uniforms()
            };

            check()?;
            Ok(vars)
        }
    }

    /// Lists the active vertex attributes of the linked program, see `active_uniforms`.
    pub fn active_attributes(&self, capabilities: &Capabilities) -> Result<Vec<ActiveVariable>> {
        if !self.linked {
            return Err(Error::ProgramNotLinked("listing active attributes".into()));
        }

        unsafe {
            let vars = if capabilities.has_program_interface_query() {
                self.interface_resources(gl::PROGRAM_INPUT)
            } else {
                self.legacy_attributes()
            };

            check()?;
            Ok(vars)
        }
    }

    pub fn print_active_uniforms(&self, capabilities: &Capabilities) -> Result<()> {
        info!("Program uniforms:");
        for v in self.active_uniforms(capabilities)? {
            info!("  {}", v);
        }

        Ok(())
    }

    pub fn print_active_attributes(&self, capabilities: &Capabilities) -> Result<()> {
        info!("Program attributes:");
        for v in self.active_attributes(capabilities)? {
            info!("  {}", v);
        }

        Ok(())
    }
}

impl Program {
    unsafe fn interface_resources(&self, interface: GLenum) -> Vec<ActiveVariable> {
        let mut num = 0;
        gl::GetProgramInterfaceiv(self.id, interface, gl::ACTIVE_RESOURCES, &mut num);

        // BLOCK_INDEX is only a valid property of the uniform interface.
        let props = [gl::NAME_LENGTH, gl::TYPE, gl::LOCATION, gl::BLOCK_INDEX];
        let num_props: GLsizei = if interface == gl::UNIFORM { 4 } else { 3 };

        let mut vars = Vec::with_capacity(num.max(0) as usize);
        for i in 0..num.max(0) as GLuint {
            let mut results: [GLint; 4] = [0, 0, 0, -1];
            gl::GetProgramResourceiv(
                self.id,
                interface,
                i,
                num_props,
                props.as_ptr(),
                num_props,
                ptr::null_mut(),
                results.as_mut_ptr(),
            );

            if results[3] != -1 {
                debug!("Skips uniform #{} which lives in block {}.", i, results[3]);
                continue;
            }

            let id = self.id;
            let name = read_info_log(results[0] + 1, |cap, written, buf| {
                gl::GetProgramResourceName(id, interface, i, cap, written, buf)
            });

            vars.push(ActiveVariable {
                location: results[2],
                name,
                kind: results[1] as GLenum,
            });
        }

        vars
    }

    unsafe fn legacy_uniforms(&self) -> Vec<ActiveVariable> {
        let mut num = 0;
        gl::GetProgramiv(self.id, gl::ACTIVE_UNIFORMS, &mut num);
        let mut max_len = 0;
        gl::GetProgramiv(self.id, gl::ACTIVE_UNIFORM_MAX_LENGTH, &mut max_len);

        let mut vars = Vec::with_capacity(num.max(0) as usize);
        for i in 0..num.max(0) as GLuint {
            let mut block = -1;
            gl::GetActiveUniformsiv(self.id, 1, &i, gl::UNIFORM_BLOCK_INDEX, &mut block);
            if block != -1 {
                continue;
            }

            let id = self.id;
            let mut size = 0;
            let mut kind = 0;
            let name = read_info_log(max_len, |cap, written, buf| {
                gl::GetActiveUniform(id, i, cap, written, &mut size, &mut kind, buf)
            });

            let location = match CString::new(name.as_bytes()) {
                Ok(c_name) => gl::GetUniformLocation(id, c_name.as_ptr()),
                Err(_) => -1,
            };

            vars.push(ActiveVariable {
                location,
                name,
                kind,
            });
        }

        vars
    }

    unsafe fn legacy_attributes(&self) -> Vec<ActiveVariable> {
        let mut num = 0;
        gl::GetProgramiv(self.id, gl::ACTIVE_ATTRIBUTES, &mut num);
        let mut max_len = 0;
        gl::GetProgramiv(self.id, gl::ACTIVE_ATTRIBUTE_MAX_LENGTH, &mut max_len);

        let mut vars = Vec::with_capacity(num.max(0) as usize);
        for i in 0..num.max(0) as GLuint {
            let id = self.id;
            let mut size = 0;
            let mut kind = 0;
            let name = read_info_log(max_len, |cap, written, buf| {
                gl::GetActiveAttrib(id, i, cap, written, &mut size, &mut kind, buf)
            });

            let location = match CString::new(name.as_bytes()) {
                Ok(c_name) => gl::GetAttribLocation(id, c_name.as_ptr()),
                Err(_) => -1,
            };

            vars.push(ActiveVariable {
                location,
                name,
                kind,
            });
        }

        vars
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Program")
            .field("id", &self.id)
            .field("linked", &self.linked)
            .field("cached_uniforms", &self.uniforms.len())
            .finish()
    }
}

fn c_string(name: &str) -> Result<CString> {
    CString::new(name.as_bytes()).map_err(|_| Error::InvalidName(name.to_owned()))
}

/// Fetches a driver-owned, nul-terminated string of at most `len` bytes (terminator
/// included) through `fetch(capacity, written, buffer)`.
fn read_info_log<F>(len: GLint, fetch: F) -> String
where
    F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written: GLsizei = 0;
    fetch(len, &mut written, buf.as_mut_ptr() as *mut GLchar);

    buf.truncate(written.max(0).min(len) as usize);
    String::from_utf8_lossy(&buf).trim_end().to_owned()
}
