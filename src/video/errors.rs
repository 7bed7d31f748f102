use glutin;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Glutin: {}", _0)]
    Glutin(String),
    #[fail(display = "[GL] {}", _0)]
    Backend(String),
    #[fail(display = "OpenGL implementation doesn\'t support {}.", _0)]
    Requirement(String),
    #[fail(display = "Failed to create program")]
    ProgramCreationFailure,
    #[fail(display = "Failed to create shader")]
    ShaderCreationFailure,
    #[fail(display = "Shader file does not exist: {}", _0)]
    ShaderFileNotExists(String),
    #[fail(display = "Provided shader file is not a regular file: {}", _0)]
    ShaderFileNotRegular(String),
    #[fail(display = "Failed to read shader file {}: {}", _0, _1)]
    ShaderFileUnreadable(String, String),
    #[fail(display = "Unknown shader file extension: {}", _0)]
    UnknownShaderExtension(String),
    #[fail(display = "Shader ({}) compilation failed:\n{}", file, log)]
    CompileFailure { file: String, log: String },
    #[fail(display = "Program link failed:\n{}", _0)]
    LinkFailure(String),
    #[fail(display = "Program validation failed:\n{}", _0)]
    ValidateFailure(String),
    #[fail(display = "Program must be linked before {}.", _0)]
    ProgramNotLinked(String),
    #[fail(display = "Name {:?} contains an interior nul byte.", _0)]
    InvalidName(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}
