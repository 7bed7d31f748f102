//! Math utilities re-exported from `cgmath`.

pub use cgmath::*;

pub mod prelude {
    pub use cgmath::prelude::*;
    pub use cgmath::{Deg, Matrix3, Matrix4, Point3, Rad, Vector2, Vector3, Vector4};
}
