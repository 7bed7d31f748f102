use glsandbox::video::{Capabilities, Error, Version, REQUIRED_VERSION};

fn capabilities(version: Version) -> Capabilities {
    Capabilities {
        version,
        vendor: "Mock".to_owned(),
        renderer: "Mock Renderer".to_owned(),
        shading_language: "3.30".to_owned(),
    }
}

#[test]
fn parse_version_strings() {
    assert_eq!(Version::parse_str("3.3.0 NVIDIA 390.77").unwrap(), Version::GL(3, 3));
    assert_eq!(
        Version::parse_str("4.6 (Core Profile) Mesa 23.0.4").unwrap(),
        Version::GL(4, 6)
    );
    assert_eq!(Version::parse_str("4.1").unwrap(), Version::GL(4, 1));
    assert_eq!(
        Version::parse_str("OpenGL ES 3.2 Mesa 23.0.4").unwrap(),
        Version::ES(3, 2)
    );
    assert_eq!(Version::parse_str("OpenGL ES-CM 1.1").unwrap(), Version::ES(1, 1));
}

#[test]
fn malformed_version_strings() {
    for desc in &["", "4", "four.one", "OpenGL ES-CM", "OpenGL ES x.y"] {
        match Version::parse_str(desc) {
            Err(Error::Backend(_)) => {}
            other => panic!("{:?} parsed into {:?}", desc, other),
        }
    }
}

#[test]
fn compare_versions() {
    assert!(Version::GL(4, 5) > Version::GL(3, 3));
    assert!(Version::GL(3, 3) >= Version::GL(3, 3));
    assert!(Version::GL(3, 2) < Version::GL(3, 3));
    assert!(Version::ES(3, 1) > Version::ES(3, 0));

    // Different APIs are not comparable.
    assert!(!(Version::GL(3, 0) >= Version::ES(3, 0)));
    assert!(!(Version::ES(3, 0) >= Version::GL(3, 0)));
    assert_eq!(Version::GL(3, 0).partial_cmp(&Version::ES(3, 0)), None);
}

#[test]
fn requirements() {
    assert!(capabilities(Version::GL(3, 3)).check(REQUIRED_VERSION).is_ok());
    assert!(capabilities(Version::GL(4, 6)).check(REQUIRED_VERSION).is_ok());

    match capabilities(Version::GL(2, 1)).check(REQUIRED_VERSION) {
        Err(Error::Requirement(what)) => assert!(what.contains("Mock Renderer")),
        other => panic!("unexpected {:?}", other),
    }

    assert!(capabilities(Version::ES(3, 2)).check(REQUIRED_VERSION).is_err());
}

#[test]
fn program_interface_query() {
    assert!(!capabilities(Version::GL(3, 3)).has_program_interface_query());
    assert!(!capabilities(Version::GL(4, 2)).has_program_interface_query());
    assert!(capabilities(Version::GL(4, 3)).has_program_interface_query());
    assert!(capabilities(Version::ES(3, 1)).has_program_interface_query());
    assert!(!capabilities(Version::ES(3, 0)).has_program_interface_query());
}
