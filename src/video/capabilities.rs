use std::cmp;
use std::ffi;

use gl;
use gl::types::*;

use super::errors::{Error, Result};

/// Describes a version.
///
/// A version can only be compared to another version if they belong to the same API.
/// For example, both `Version::GL(3, 0) >= Version::ES(3, 0)` and `Version::ES(3, 0) >=
/// Version::GL(3, 0)` return `false`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Regular OpenGL.
    GL(u8, u8),
    /// OpenGL embedded system.
    ES(u8, u8),
}

impl PartialOrd for Version {
    #[inline]
    fn partial_cmp(&self, other: &Version) -> Option<cmp::Ordering> {
        let (es1, major1, minor1) = match *self {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        let (es2, major2, minor2) = match *other {
            Version::GL(major, minor) => (false, major, minor),
            Version::ES(major, minor) => (true, major, minor),
        };

        if es1 != es2 {
            None
        } else {
            match major1.cmp(&major2) {
                cmp::Ordering::Equal => Some(minor1.cmp(&minor2)),
                v => Some(v),
            }
        }
    }
}

impl Version {
    /// Parses the string returned by `glGetString(GL_VERSION)`, e.g. `"4.6.0 NVIDIA 535.54"`
    /// or `"OpenGL ES 3.2 Mesa 23.0"`.
    pub fn parse_str(desc: &str) -> Result<Version> {
        let malformed = || Error::Backend(format!("Version string {:?} is malformed.", desc));

        let (es, rest) = if desc.starts_with("OpenGL ES ") {
            (true, &desc[10..])
        } else if desc.starts_with("OpenGL ES-") {
            // "OpenGL ES-CM 1.1" and friends carry a profile tag before the number.
            let rest = desc[10..].splitn(2, ' ').nth(1).ok_or_else(malformed)?;
            (true, rest)
        } else {
            (false, desc)
        };

        let number = rest.split(' ').next().ok_or_else(malformed)?;
        let mut iter = number.split('.');

        let major = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        let minor = iter
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(malformed)?;

        if es {
            Ok(Version::ES(major, minor))
        } else {
            Ok(Version::GL(major, minor))
        }
    }

    /// Obtains the OpenGL version of the current context using the loaded functions.
    ///
    /// # Unsafe
    ///
    /// You must ensure that the functions belong to the current context, otherwise you will get
    /// an undefined behavior.
    pub unsafe fn parse() -> Result<Version> {
        Version::parse_str(&get_string(gl::VERSION)?)
    }
}

/// Information about the OpenGL implementation behind the current context.
#[derive(Debug, Clone)]
pub struct Capabilities {
    pub version: Version,
    pub vendor: String,
    pub renderer: String,
    pub shading_language: String,
}

impl Capabilities {
    /// # Unsafe
    ///
    /// The OpenGL context must be current in this thread and the functions loaded.
    pub unsafe fn parse() -> Result<Capabilities> {
        Ok(Capabilities {
            version: Version::parse()?,
            vendor: get_string(gl::VENDOR)?,
            renderer: get_string(gl::RENDERER)?,
            shading_language: get_string(gl::SHADING_LANGUAGE_VERSION)?,
        })
    }

    /// Program interface queries (`glGetProgramInterfaceiv` and friends) arrived with
    /// OpenGL 4.3.
    #[inline]
    pub fn has_program_interface_query(&self) -> bool {
        self.version >= Version::GL(4, 3) || self.version >= Version::ES(3, 1)
    }

    /// Fails if the implementation is older than the core profile the demos are
    /// written against.
    pub fn check(&self, required: Version) -> Result<()> {
        match self.version.partial_cmp(&required) {
            Some(cmp::Ordering::Less) | None => Err(Error::Requirement(format!(
                "{:?} (found {:?} on {})",
                required, self.version, self.renderer
            ))),
            _ => Ok(()),
        }
    }
}

unsafe fn get_string(name: GLenum) -> Result<String> {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return Err(Error::Backend(format!(
            "glGetString(0x{:X}) returned nothing.",
            name
        )));
    }

    let bytes = ffi::CStr::from_ptr(ptr as *const _).to_bytes();
    String::from_utf8(bytes.to_vec()).map_err(|_| Error::Backend("String is unformaled.".into()))
}

/// Drains `glGetError` and translates the first reported code.
pub unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => Err(Error::Backend(
            "An unacceptable value is specified for an enumerated argument.".into(),
        )),

        gl::INVALID_VALUE => Err(Error::Backend("A numeric argument is out of range.".into())),

        gl::INVALID_OPERATION => Err(Error::Backend(
            "The specified operation is not allowed in the current state.".into(),
        )),

        gl::INVALID_FRAMEBUFFER_OPERATION => Err(Error::Backend(
            "The command is trying to render to or read from the framebuffer while the \
             currently bound framebuffer is not framebuffer complete."
                .into(),
        )),

        gl::OUT_OF_MEMORY => Err(Error::Backend(
            "There is not enough memory left to execute the command.".into(),
        )),

        code => Err(Error::Backend(format!("Oops, Unknown OpenGL error 0x{:X}.", code))),
    }
}
