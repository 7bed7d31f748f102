pub use crate::application::prelude::*;
pub use crate::errors::{Error, Result, ResultExt};
pub use crate::input::prelude::*;
pub use crate::math;
pub use crate::math::prelude::*;
pub use crate::scene::prelude::*;
pub use crate::video;
pub use crate::video::{Primitive, Program, ShaderKind, VertexArray, VertexBuffer};
pub use crate::window::prelude::*;
