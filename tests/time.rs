use std::time::Duration;

use glsandbox::application::settings::EngineParams;
use glsandbox::application::time::TimeSystem;

fn params(min_fps: u32, time_smooth_step: u32) -> EngineParams {
    EngineParams {
        min_fps,
        max_fps: 0,
        time_smooth_step,
    }
}

#[test]
fn timestep() {
    let mut time = TimeSystem::new(params(0, 0));
    assert_eq!(time.fps(), 0);

    time.step(Duration::from_millis(20));
    assert_eq!(time.frame_duration(), Duration::from_millis(20));
    assert_eq!(time.fps(), 50);
    assert!((time.frame_secs() - 0.02).abs() < 1e-6);
}

#[test]
fn min_fps_clamps_long_frames() {
    let mut time = TimeSystem::new(params(10, 0));

    time.step(Duration::from_secs(2));
    assert_eq!(time.frame_duration(), Duration::from_millis(100));

    time.step(Duration::from_millis(16));
    assert_eq!(time.frame_duration(), Duration::from_millis(16));
}

#[test]
fn smoothing() {
    let mut time = TimeSystem::new(params(0, 2));

    time.step(Duration::from_millis(10));
    assert_eq!(time.frame_duration(), Duration::from_millis(10));

    time.step(Duration::from_millis(30));
    assert_eq!(time.frame_duration(), Duration::from_millis(20));

    // Only the latest two frames count.
    time.step(Duration::from_millis(50));
    assert_eq!(time.frame_duration(), Duration::from_millis(40));

    time.set_time_smoothing_step(0);
    time.step(Duration::from_millis(5));
    assert_eq!(time.frame_duration(), Duration::from_millis(5));
}

#[test]
fn advance_counts_frames() {
    let mut time = TimeSystem::new(EngineParams {
        min_fps: 0,
        max_fps: 200,
        time_smooth_step: 0,
    });

    time.advance();
    time.advance();

    assert_eq!(time.frames(), 2);
    // Capped at 200 fps, so every frame takes at least 5ms.
    assert!(time.frame_duration() >= Duration::from_millis(5));
    assert!(time.elapsed_secs() >= 0.01);
}
