use glsandbox::math::prelude::Vector2;
use glsandbox::window::events::{Event, WindowEvent};
use glsandbox::window::{Window, WindowParams};

#[test]
fn headless() {
    let mut window = Window::headless();
    assert!(window.advance().is_empty());
    assert_eq!(window.dimensions(), Vector2::new(0, 0));
    assert_eq!(window.framebuffer_dimensions(), Vector2::new(0, 0));
    assert!(window.swap_buffers().is_ok());

    assert!(!window.is_cursor_grabbed());
    window.set_cursor_grab(true).unwrap();
    assert!(window.is_cursor_grabbed());
    window.set_cursor_grab(false).unwrap();
    assert!(!window.is_cursor_grabbed());
}

#[test]
fn params() {
    let params: WindowParams = serde_json::from_str("{ \"title\": \"Triangle\" }").unwrap();
    assert_eq!(params.title, "Triangle");
    assert_eq!(params.size, Vector2::new(1024, 768));
    assert!(params.vsync);
    assert_eq!(params.multisample, 0);
}

#[test]
fn queued_events() {
    let mut window = Window::headless();
    window.push_event(Event::Window(WindowEvent::GainFocus));
    window.push_event(Event::Window(WindowEvent::Closed));

    assert_eq!(
        window.advance(),
        &[
            Event::Window(WindowEvent::GainFocus),
            Event::Window(WindowEvent::Closed)
        ][..]
    );

    // Delivered once.
    assert!(window.advance().is_empty());
}
