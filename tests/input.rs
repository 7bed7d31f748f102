use glsandbox::input::mouse::{pixels_to_lines, PIXELS_PER_LINE};
use glsandbox::input::prelude::*;
use glsandbox::math::prelude::Vector2;

#[test]
fn keyboard() {
    let mut input = Input::new();
    assert!(!input.is_key_down(Key::W));

    input.update_with(InputEvent::KeyboardPressed { key: Key::W });
    assert!(input.is_key_down(Key::W));
    assert!(input.is_key_press(Key::W));
    assert!(!input.is_key_release(Key::W));

    input.advance();
    assert!(input.is_key_down(Key::W));
    assert!(!input.is_key_press(Key::W));

    // Auto-repeat while held.
    input.update_with(InputEvent::KeyboardPressed { key: Key::W });
    assert!(!input.is_key_press(Key::W));

    input.update_with(InputEvent::KeyboardReleased { key: Key::W });
    assert!(!input.is_key_down(Key::W));
    assert!(input.is_key_release(Key::W));

    input.advance();
    assert!(!input.is_key_release(Key::W));
}

#[test]
fn press_and_release_in_one_frame() {
    let mut input = Input::new();
    input.update_with(InputEvent::KeyboardPressed { key: Key::Escape });
    input.update_with(InputEvent::KeyboardReleased { key: Key::Escape });

    assert!(input.is_key_press(Key::Escape));
    assert!(input.is_key_release(Key::Escape));
    assert!(!input.is_key_down(Key::Escape));
}

#[test]
fn mouse_buttons() {
    let mut input = Input::new();
    input.update_with(InputEvent::MousePressed {
        button: MouseButton::Left,
    });

    assert!(input.is_mouse_down(MouseButton::Left));
    assert!(input.is_mouse_press(MouseButton::Left));
    assert!(!input.is_mouse_down(MouseButton::Right));

    input.advance();
    input.update_with(InputEvent::MouseReleased {
        button: MouseButton::Left,
    });

    assert!(!input.is_mouse_down(MouseButton::Left));
    assert!(!input.is_mouse_press(MouseButton::Left));
    assert!(input.is_mouse_release(MouseButton::Left));
}

#[test]
fn mouse_position_and_motion() {
    let mut input = Input::new();
    input.update_with(InputEvent::MouseMoved {
        position: (10.0, 20.0),
    });
    input.advance();

    input.update_with(InputEvent::MouseMoved {
        position: (15.0, 18.0),
    });
    assert_eq!(input.mouse_position(), Vector2::new(15.0, 18.0));
    assert_eq!(input.mouse_movement(), Vector2::new(5.0, -2.0));

    // Raw motion accumulates over the whole frame.
    input.update_with(InputEvent::MouseMotion { delta: (1.5, -1.0) });
    input.update_with(InputEvent::MouseMotion { delta: (2.5, 3.0) });
    assert_eq!(input.mouse_motion(), Vector2::new(4.0, 2.0));

    input.update_with(InputEvent::MouseWheel { delta: (0.0, 1.0) });
    input.update_with(InputEvent::MouseWheel { delta: (0.0, 2.0) });
    assert_eq!(input.mouse_scroll(), Vector2::new(0.0, 3.0));

    input.advance();
    assert_eq!(input.mouse_movement(), Vector2::new(0.0, 0.0));
    assert_eq!(input.mouse_motion(), Vector2::new(0.0, 0.0));
    assert_eq!(input.mouse_scroll(), Vector2::new(0.0, 0.0));
    assert_eq!(input.mouse_position(), Vector2::new(15.0, 18.0));
}

#[test]
fn reset() {
    let mut input = Input::new();
    input.update_with(InputEvent::KeyboardPressed { key: Key::LShift });
    input.update_with(InputEvent::MousePressed {
        button: MouseButton::Other(4),
    });

    input.reset();
    assert!(!input.is_key_down(Key::LShift));
    assert!(!input.is_mouse_down(MouseButton::Other(4)));
}

#[test]
fn reset_keeps_cursor_position() {
    let mut input = Input::new();
    input.update_with(InputEvent::MouseMoved {
        position: (300.0, 200.0),
    });
    input.advance();

    input.reset();
    assert_eq!(input.mouse_position(), Vector2::new(300.0, 200.0));
    assert_eq!(input.mouse_movement(), Vector2::new(0.0, 0.0));

    input.update_with(InputEvent::MouseMoved {
        position: (302.0, 199.0),
    });
    assert_eq!(input.mouse_movement(), Vector2::new(2.0, -1.0));
}

#[test]
fn pixel_scroll_in_lines() {
    assert_eq!(pixels_to_lines((0.0, PIXELS_PER_LINE * 3.0)), (0.0, 3.0));
    assert_eq!(pixels_to_lines((-PIXELS_PER_LINE, 0.0)), (-1.0, 0.0));
}
