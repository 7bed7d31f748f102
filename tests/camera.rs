#[macro_use]
extern crate approx;

use glsandbox::input::prelude::*;
use glsandbox::math;
use glsandbox::math::prelude::*;
use glsandbox::scene::camera::{Camera, CameraParams, Movement, MAX_PITCH};

#[test]
fn default_looks_down_negative_z() {
    let camera = Camera::default();

    assert!(relative_eq!(camera.front(), Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5));
    assert!(relative_eq!(camera.right(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-5));
    assert!(relative_eq!(camera.up(), Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-5));
    assert_eq!(camera.position(), Vector3::new(0.0, 0.0, 3.0));
}

#[test]
fn view_matrix() {
    let camera = Camera::default();
    let view = camera.view_matrix();

    // The origin lies three units in front of the camera.
    let p = view.transform_point(Point3::new(0.0, 0.0, 0.0));
    assert!(relative_eq!(p, Point3::new(0.0, 0.0, -3.0), epsilon = 1e-5));

    let p = view.transform_point(Point3::new(1.0, 0.0, 3.0));
    assert!(relative_eq!(p, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-5));
}

#[test]
fn translate() {
    let mut camera = Camera::default();

    let forward = Movement {
        forward: 1.0,
        ..Movement::default()
    };

    camera.translate(forward, 1.0);
    assert!(relative_eq!(camera.position(), Vector3::new(0.0, 0.0, 0.5), epsilon = 1e-5));

    let up = Movement {
        up: -1.0,
        ..Movement::default()
    };

    camera.translate(up, 0.4);
    assert!(relative_eq!(camera.position(), Vector3::new(0.0, -1.0, 0.5), epsilon = 1e-5));

    // Diagonal movement is not faster than a single axis.
    let mut camera = Camera::default();
    let diagonal = Movement {
        forward: 1.0,
        right: 1.0,
        up: 0.0,
    };

    camera.translate(diagonal, 1.0);
    let distance = (camera.position() - Vector3::new(0.0, 0.0, 3.0)).magnitude();
    assert!(relative_eq!(distance, CameraParams::default().speed, epsilon = 1e-5));

    let before = camera.position();
    camera.translate(Movement::default(), 1.0);
    assert_eq!(camera.position(), before);
}

#[test]
fn rotate() {
    let mut camera = Camera::default();

    // Turning right by 90 degrees ends up looking down the positive x-axis.
    camera.rotate(900.0, 0.0);
    assert!(ulps_eq!(camera.yaw(), 0.0));
    assert!(relative_eq!(camera.front(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-5));

    // Moving the mouse up looks up.
    camera.rotate(0.0, -100.0);
    assert!(ulps_eq!(camera.pitch(), 10.0));
    assert!(camera.front().y > 0.0);

    camera.rotate(0.0, -10_000.0);
    assert_eq!(camera.pitch(), MAX_PITCH);

    camera.rotate(0.0, 100_000.0);
    assert_eq!(camera.pitch(), -MAX_PITCH);
}

#[test]
fn movement_from_keys() {
    let mut input = Input::new();
    assert!(Movement::from_input(&input).is_zero());

    input.update_with(InputEvent::KeyboardPressed { key: Key::W });
    input.update_with(InputEvent::KeyboardPressed { key: Key::A });
    input.update_with(InputEvent::KeyboardPressed { key: Key::Space });

    let movement = Movement::from_input(&input);
    assert_eq!(movement.forward, 1.0);
    assert_eq!(movement.right, -1.0);
    assert_eq!(movement.up, 1.0);

    // Opposite keys cancel out.
    input.update_with(InputEvent::KeyboardPressed { key: Key::S });
    assert_eq!(Movement::from_input(&input).forward, 0.0);
}

#[test]
fn projection() {
    let camera = Camera::default();
    let expected = math::perspective(Deg(45.0), 4.0 / 3.0, 0.1, 100.0);
    assert!(ulps_eq!(camera.projection_matrix(4.0 / 3.0), expected));

    // Degenerate aspect ratios fall back to a square viewport.
    let expected = math::perspective(Deg(45.0), 1.0, 0.1, 100.0);
    assert!(ulps_eq!(camera.projection_matrix(0.0), expected));
}

#[test]
fn zoom() {
    let mut camera = Camera::default();
    camera.zoom(5.0);
    assert_eq!(camera.fov(), 40.0);

    camera.zoom(100.0);
    assert_eq!(camera.fov(), 1.0);

    camera.zoom(-200.0);
    assert_eq!(camera.fov(), 90.0);
}

#[test]
fn invalid_params() {
    let mut params = CameraParams::default();
    params.near = 0.0;
    assert!(Camera::new(params).is_err());

    let mut params = CameraParams::default();
    params.far = 0.05;
    assert!(Camera::new(params).is_err());

    let mut params = CameraParams::default();
    params.fov = 180.0;
    assert!(Camera::new(params).is_err());

    let mut params = CameraParams::default();
    params.pitch = 120.0;
    assert_eq!(Camera::new(params).unwrap().pitch(), MAX_PITCH);
}
