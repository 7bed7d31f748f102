//! Opens a 1024x768 window titled "Window" and polls its events until it is closed
//! or Escape is pressed.

use glsandbox::prelude::*;
use log::error;

fn run() -> Result<()> {
    let settings = Settings::from_args()?;
    let mut window = Window::new(settings.window)?;

    loop {
        let closed = window.advance().iter().any(|v| match *v {
            Event::Window(WindowEvent::Closed) => true,
            Event::InputDevice(InputEvent::KeyboardPressed { key: Key::Escape }) => true,
            _ => false,
        });

        if closed {
            return Ok(());
        }

        window.swap_buffers()?;
    }
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        for cause in err.iter_chain() {
            error!("{}", cause);
        }

        std::process::exit(1);
    }
}
