//! A fly-through camera driven by WASD movement and mouse-look.

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::input::keyboard::Key;
use crate::input::Input;
use crate::math;
use crate::math::prelude::*;

/// The pitch is kept strictly inside this range (in degrees) so the front vector
/// never lines up with the world up axis.
pub const MAX_PITCH: f32 = 89.0;

/// Configurations of the initial camera state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub position: Vector3<f32>,
    /// Rotation around the world up axis, in degrees. `-90` looks down the negative z-axis.
    pub yaw: f32,
    /// Rotation around the camera right axis, in degrees.
    pub pitch: f32,
    /// Vertical field of view, in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Degrees of rotation per unit of mouse motion.
    pub sensitivity: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        CameraParams {
            position: Vector3::new(0.0, 0.0, 3.0),
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            speed: 2.5,
            sensitivity: 0.1,
        }
    }
}

/// The movement requested during one frame, each axis in `[-1, 1]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Movement {
    pub forward: f32,
    pub right: f32,
    pub up: f32,
}

impl Movement {
    /// Reads W/S, D/A and Space/LShift from the keyboard state.
    pub fn from_input(input: &Input) -> Self {
        let axis = |positive: Key, negative: Key| -> f32 {
            let mut v = 0.0;
            if input.is_key_down(positive) {
                v += 1.0;
            }

            if input.is_key_down(negative) {
                v -= 1.0;
            }

            v
        };

        Movement {
            forward: axis(Key::W, Key::S),
            right: axis(Key::D, Key::A),
            up: axis(Key::Space, Key::LShift),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.forward == 0.0 && self.right == 0.0 && self.up == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    params: CameraParams,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            params: CameraParams::default(),
        }
    }
}

impl Camera {
    /// Creates a camera from `params`, rejecting degenerate projections.
    pub fn new(mut params: CameraParams) -> Result<Self> {
        Camera::validate(&params)?;
        params.pitch = params.pitch.max(-MAX_PITCH).min(MAX_PITCH);
        Ok(Camera { params })
    }

    #[inline]
    pub fn position(&self) -> Vector3<f32> {
        self.params.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.params.position = position;
    }

    /// Gets the yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.params.yaw
    }

    /// Gets the pitch in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.params.pitch
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.params.fov
    }

    #[inline]
    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    /// The unit vector the camera looks along.
    pub fn front(&self) -> Vector3<f32> {
        let (ys, yc) = Rad::from(Deg(self.params.yaw)).sin_cos();
        let (ps, pc) = Rad::from(Deg(self.params.pitch)).sin_cos();
        Vector3::new(yc * pc, ps, ys * pc).normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(Vector3::unit_y()).normalize()
    }

    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(self.front()).normalize()
    }

    /// Moves the camera along its own front, right and the world up axis. Diagonal
    /// movement is normalized so it is never faster than a single axis.
    pub fn translate(&mut self, movement: Movement, dt: f32) {
        if movement.is_zero() {
            return;
        }

        let direction = self.front() * movement.forward
            + self.right() * movement.right
            + Vector3::unit_y() * movement.up;

        if direction.magnitude2() <= std::f32::EPSILON {
            return;
        }

        self.params.position += direction.normalize() * (self.params.speed * dt);
    }

    /// Applies mouse-look. `dx` turns right, `dy` (screen down) turns down.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.params.yaw += dx * self.params.sensitivity;
        self.params.pitch -= dy * self.params.sensitivity;
        self.params.pitch = self.params.pitch.max(-MAX_PITCH).min(MAX_PITCH);
    }

    /// Narrows or widens the field of view, e.g. with the mouse wheel.
    pub fn zoom(&mut self, delta: f32) {
        self.params.fov = (self.params.fov - delta).max(1.0).min(90.0);
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        let eye = Point3::from_vec(self.params.position);
        Matrix4::look_at(eye, eye + self.front(), self.up())
    }

    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        let aspect = if aspect > 0.0 { aspect } else { 1.0 };
        math::perspective(
            Deg(self.params.fov),
            aspect,
            self.params.near,
            self.params.far,
        )
    }

    fn validate(params: &CameraParams) -> Result<()> {
        if !(params.fov > 0.0 && params.fov < 180.0) {
            bail!(
                "The vertical field of view must be inside (0, 180), found: {:?}",
                params.fov
            );
        }

        if !(params.near > 0.0) {
            bail!(
                "The near plane distance must be above zero, found: {:?}",
                params.near
            );
        }

        if !(params.far > params.near) {
            bail!(
                "The far plane cannot be closer than the near plane, found: far: {:?}, near: {:?}",
                params.far,
                params.near
            );
        }

        Ok(())
    }
}
