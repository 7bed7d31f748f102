//! Timing and stepping system.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use super::settings::EngineParams;

pub struct TimeSystem {
    min_fps: u32,
    max_fps: u32,
    smoothing_step: usize,
    timestep: Duration,
    previous_timesteps: VecDeque<Duration>,
    last_frame_timepoint: Instant,
    launch_timepoint: Instant,
    frames: u64,
}

impl TimeSystem {
    pub fn new(setup: EngineParams) -> Self {
        let now = Instant::now();

        TimeSystem {
            min_fps: setup.min_fps,
            max_fps: setup.max_fps,
            smoothing_step: setup.time_smooth_step as usize,
            timestep: Duration::new(0, 0),
            previous_timesteps: VecDeque::new(),
            last_frame_timepoint: now,
            launch_timepoint: now,
            frames: 0,
        }
    }

    /// Starts a new frame. Sleeps first if a maximum fps is set and the last frame
    /// finished early.
    pub fn advance(&mut self) {
        // Cooperatively gives up a timeslice to the OS scheduler while waiting.
        if self.max_fps > 0 {
            let td = Duration::from_millis(u64::from(1000 / self.max_fps));
            while self.last_frame_timepoint.elapsed() <= td {
                if (self.last_frame_timepoint.elapsed() + Duration::from_millis(2)) < td {
                    thread::sleep(Duration::from_millis(1));
                } else {
                    thread::yield_now();
                }
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_timepoint);
        self.last_frame_timepoint = now;
        self.frames += 1;
        self.step(elapsed);
    }

    /// Feeds the duration of one frame into the timestep computation.
    pub fn step(&mut self, mut elapsed: Duration) {
        // If fps lower than minimum, simply clamp it.
        if self.min_fps > 0 {
            elapsed = std::cmp::min(
                elapsed,
                Duration::from_millis(u64::from(1000 / self.min_fps)),
            );
        }

        if self.smoothing_step > 0 {
            self.previous_timesteps.push_front(elapsed);
            self.previous_timesteps.truncate(self.smoothing_step);

            let sum = self
                .previous_timesteps
                .iter()
                .fold(Duration::new(0, 0), |acc, v| acc + *v);
            self.timestep = sum / self.previous_timesteps.len() as u32;
        } else {
            self.timestep = elapsed;
        }
    }

    /// Set minimum frames per second. If fps goes lower than this, time will
    /// appear to slow.
    #[inline]
    pub fn set_min_fps(&mut self, fps: u32) {
        self.min_fps = fps;
    }

    /// Set maximum frames per second. The loop will sleep if fps is higher
    /// than this for less resource(e.g. power) consumptions.
    #[inline]
    pub fn set_max_fps(&mut self, fps: u32) {
        self.max_fps = fps;
    }

    /// Set how many frames to average for timestep smoothing.
    #[inline]
    pub fn set_time_smoothing_step(&mut self, step: u32) {
        self.smoothing_step = step as usize;
        self.previous_timesteps.truncate(self.smoothing_step);
    }

    /// Gets current fps.
    pub fn fps(&self) -> u32 {
        let nanos = duration_to_nanos(self.timestep);
        if nanos == 0 {
            0
        } else {
            (1_000_000_000.0 / nanos as f64).round() as u32
        }
    }

    /// Gets the duration during last frame.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.timestep
    }

    /// Gets the duration during last frame in seconds.
    #[inline]
    pub fn frame_secs(&self) -> f32 {
        duration_to_nanos(self.timestep) as f32 / 1_000_000_000.0
    }

    /// Gets the seconds since this system was created.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        let elapsed = self.launch_timepoint.elapsed();
        elapsed.as_secs() as f32 + elapsed.subsec_nanos() as f32 / 1_000_000_000.0
    }

    /// Gets the number of frames started so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[inline]
fn duration_to_nanos(d: Duration) -> u64 {
    d.as_secs() * 1_000_000_000 + u64::from(d.subsec_nanos())
}
