use glsandbox::video::shader::{check_file, read_source};
use glsandbox::video::{Error, ShaderKind};

#[test]
fn kind_from_extension() {
    assert_eq!(ShaderKind::from_path("basic.vert").unwrap(), ShaderKind::Vertex);
    assert_eq!(ShaderKind::from_path("shaders/basic.frag").unwrap(), ShaderKind::Fragment);
    assert_eq!(ShaderKind::from_path("a.geom").unwrap(), ShaderKind::Geometry);
    assert_eq!(ShaderKind::from_path("a.tesc").unwrap(), ShaderKind::TessControl);
    assert_eq!(ShaderKind::from_path("a.tese").unwrap(), ShaderKind::TessEvaluation);
    assert_eq!(ShaderKind::from_path("a.comp").unwrap(), ShaderKind::Compute);
}

#[test]
fn unknown_extension() {
    match ShaderKind::from_path("basic.glsl") {
        Err(Error::UnknownShaderExtension(ext)) => assert_eq!(ext, ".glsl"),
        other => panic!("unexpected {:?}", other),
    }

    match ShaderKind::from_path("basic") {
        Err(Error::UnknownShaderExtension(ext)) => assert_eq!(ext, ""),
        other => panic!("unexpected {:?}", other),
    }

    // Extensions are matched exactly.
    assert!(ShaderKind::from_path("basic.VERT").is_err());
}

#[test]
fn file_checks() {
    assert!(check_file("tests/resources/shaders/mock.vert").is_ok());

    match check_file("tests/resources/shaders/_invalid_.vert") {
        Err(Error::ShaderFileNotExists(path)) => assert!(path.ends_with("_invalid_.vert")),
        other => panic!("unexpected {:?}", other),
    }

    match check_file("tests/resources/shaders/directory.frag") {
        Err(Error::ShaderFileNotRegular(path)) => assert!(path.ends_with("directory.frag")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn read() {
    let source = read_source("tests/resources/shaders/mock.vert").unwrap();
    assert!(source.starts_with("#version 330 core"));
    assert!(source.contains("a_Position"));

    assert!(read_source("tests/resources/shaders/directory.frag").is_err());
}

#[test]
fn messages() {
    let err = Error::CompileFailure {
        file: "basic.vert".to_owned(),
        log: "0:1(1): error: syntax error".to_owned(),
    };

    assert_eq!(
        err.to_string(),
        "Shader (basic.vert) compilation failed:\n0:1(1): error: syntax error"
    );

    let err = Error::LinkFailure("error: unresolved symbol".to_owned());
    assert_eq!(err.to_string(), "Program link failed:\nerror: unresolved symbol");

    let err = Error::ShaderFileNotExists("missing.vert".to_owned());
    assert_eq!(err.to_string(), "Shader file does not exist: missing.vert");

    let err = Error::UnknownShaderExtension(".glsl".to_owned());
    assert_eq!(err.to_string(), "Unknown shader file extension: .glsl");

    assert_eq!(Error::ProgramCreationFailure.to_string(), "Failed to create program");
}

#[test]
fn into_crate_error() {
    fn load() -> glsandbox::errors::Result<ShaderKind> {
        Ok(ShaderKind::from_path("basic.txt")?)
    }

    let err = load().unwrap_err();
    match err.downcast_ref::<Error>() {
        Some(Error::UnknownShaderExtension(ext)) => assert_eq!(ext, ".txt"),
        other => panic!("unexpected {:?}", other),
    }
}
