use glsandbox::application::settings::{EngineParams, Settings};
use glsandbox::math::prelude::*;
use glsandbox::scene::camera::CameraParams;
use glsandbox::window::WindowParams;

#[test]
fn defaults() {
    let settings = Settings::default();
    assert_eq!(settings.window.title, "Window");
    assert_eq!(settings.window.size, Vector2::new(1024, 768));
    assert_eq!(settings.window.gl_version, (3, 3));
    assert!(!settings.headless);

    // Every field may be omitted.
    assert_eq!(Settings::from_json("{}").unwrap(), settings);
}

#[test]
fn load() {
    let settings = Settings::load("tests/resources/settings.json").unwrap();

    assert_eq!(
        settings.engine,
        EngineParams {
            max_fps: 30,
            time_smooth_step: 4,
            ..EngineParams::default()
        }
    );

    assert_eq!(
        settings.window,
        WindowParams {
            title: "Cube".to_owned(),
            size: Vector2::new(800, 600),
            vsync: false,
            ..WindowParams::default()
        }
    );

    assert_eq!(
        settings.camera,
        CameraParams {
            position: Vector3::new(0.0, 1.0, 5.0),
            fov: 60.0,
            speed: 4.0,
            ..CameraParams::default()
        }
    );

    assert!(settings.headless);
}

#[test]
fn errors() {
    assert!(Settings::load("tests/resources/_invalid_.json").is_err());
    assert!(Settings::from_json("{ \"window\": { \"size\": \"large\" } }").is_err());
    assert!(Settings::from_json("[").is_err());
}
