//! The fixed scene content shared by the demos: a fly-through camera and a
//! couple of hard-coded meshes.

pub mod camera;
pub mod geometry;

pub mod prelude {
    pub use super::camera::{Camera, CameraParams, Movement};
    pub use super::geometry;
}
