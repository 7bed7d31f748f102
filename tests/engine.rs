use glsandbox::prelude::*;

#[derive(Default)]
struct Recorder {
    updates: usize,
    renders: usize,
    exits: usize,
    held: Vec<Key>,
}

impl Application for Recorder {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        self.updates += 1;
        for &key in &[Key::W, Key::A, Key::S, Key::D] {
            if ctx.input.is_key_down(key) {
                self.held.push(key);
            }
        }

        Ok(())
    }

    fn on_render(&mut self, _: &mut Context) -> Result<()> {
        self.renders += 1;
        Ok(())
    }

    fn on_exit(&mut self, _: &mut Context) -> Result<()> {
        self.exits += 1;
        Ok(())
    }
}

impl<'a> Application for &'a mut Recorder {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).on_update(ctx)
    }

    fn on_render(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).on_render(ctx)
    }

    fn on_exit(&mut self, ctx: &mut Context) -> Result<()> {
        (**self).on_exit(ctx)
    }
}

fn headless() -> Settings {
    let mut settings = Settings::default();
    settings.headless = true;
    settings.engine.max_fps = 0;
    settings
}

#[test]
fn headless_runs_one_frame() {
    let engine = Engine::new(&headless()).unwrap();

    let mut recorder = Recorder::default();
    engine.run(&mut recorder).unwrap();

    assert_eq!(recorder.updates, 1);
    assert_eq!(recorder.renders, 1);
    assert_eq!(recorder.exits, 1);
}

fn run_with(events: &[Event]) -> Recorder {
    let mut engine = Engine::new(&headless()).unwrap();
    for &v in events {
        engine.context().window.push_event(v);
    }

    let mut recorder = Recorder::default();
    engine.run(&mut recorder).unwrap();
    recorder
}

#[test]
fn closed_window_stops_before_update() {
    let recorder = run_with(&[Event::Window(WindowEvent::Closed)]);

    assert_eq!(recorder.updates, 0);
    assert_eq!(recorder.renders, 0);
    assert_eq!(recorder.exits, 1);
}

#[test]
fn escape_stops_before_update() {
    let recorder = run_with(&[Event::InputDevice(InputEvent::KeyboardPressed {
        key: Key::Escape,
    })]);

    assert_eq!(recorder.updates, 0);
    assert_eq!(recorder.exits, 1);
}

#[test]
fn input_reaches_update() {
    let recorder = run_with(&[
        Event::InputDevice(InputEvent::KeyboardPressed { key: Key::W }),
        Event::InputDevice(InputEvent::KeyboardPressed { key: Key::D }),
    ]);

    assert_eq!(recorder.updates, 1);
    assert_eq!(recorder.held, vec![Key::W, Key::D]);
}

#[test]
fn lost_focus_releases_keys() {
    let recorder = run_with(&[
        Event::InputDevice(InputEvent::KeyboardPressed { key: Key::W }),
        Event::Window(WindowEvent::LostFocus),
        Event::InputDevice(InputEvent::KeyboardPressed { key: Key::A }),
    ]);

    assert_eq!(recorder.updates, 1);
    assert_eq!(recorder.held, vec![Key::A]);
}

#[test]
fn resize_keeps_running() {
    let recorder = run_with(&[
        Event::Window(WindowEvent::Resized(640, 480)),
        Event::Window(WindowEvent::GainFocus),
    ]);

    assert_eq!(recorder.updates, 1);
    assert_eq!(recorder.renders, 1);
}

#[test]
fn headless_has_no_capabilities() {
    let mut engine = Engine::new(&headless()).unwrap();
    let err = engine.context().require_capabilities().unwrap_err();
    assert!(err.to_string().contains("headless"));
}

#[test]
fn context() {
    let mut engine = Engine::new(&headless()).unwrap();
    let ctx = engine.context();

    assert!(ctx.capabilities().is_none());
    assert!(!ctx.is_shutdown());
    assert_eq!(ctx.aspect(), 1.0);

    ctx.shutdown();
    assert!(ctx.is_shutdown());
}

#[test]
fn errors_propagate() {
    struct Failing;

    impl Application for Failing {
        fn on_update(&mut self, _: &mut Context) -> Result<()> {
            Err(failure::err_msg("update failed"))
        }
    }

    let engine = Engine::new(&headless()).unwrap();
    let err = engine.run(Failing).unwrap_err();
    assert_eq!(err.to_string(), "update failed");
}
