//! Functions for loading demo settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::scene::camera::CameraParams;
use crate::window::WindowParams;

/// A structure containing configuration data for the harness, which are used to
/// specify hardware setup stuff to create the window and the initial state of the
/// scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub engine: EngineParams,
    pub window: WindowParams,
    pub camera: CameraParams,
    /// Runs a single frame without creating any window or OpenGL context.
    pub headless: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// If the frame rate drops below this, the timestep is clamped. 0 disables it.
    pub min_fps: u32,
    /// The loop sleeps to stay under this frame rate. 0 disables it.
    pub max_fps: u32,
    /// How many frames are averaged for timestep smoothing. 0 disables it.
    pub time_smooth_step: u32,
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            min_fps: 0,
            max_fps: 60,
            time_smooth_step: 0,
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. Missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|_| format!("Failed to read settings from {}", path.display()))?;

        Settings::from_json(&content)
            .with_context(|_| format!("Malformed settings in {}", path.display()))
            .map_err(From::from)
    }

    /// Parses settings from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Loads settings from the path given as the first command-line argument, or
    /// returns the defaults when there is none.
    pub fn from_args() -> Result<Self> {
        match std::env::args().nth(1) {
            Some(path) => {
                info!("Loading settings from {}.", path);
                Settings::load(path)
            }
            None => Ok(Settings::default()),
        }
    }
}
