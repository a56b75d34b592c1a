//! Vector types module.
//!
//! This module provides the vector types for kornia-glmath, generic over the
//! element kind:
//! - Vec2: 2D vector
//! - Vec3: 3D vector
//! - Vec4: 4D vector (homogeneous coordinates)
//!
//! plus one alias per element kind, e.g. `Vec3F32`, `Vec4U8`, `Vec2F16`.

#[macro_use]
mod vec;

mod vec2;
mod vec3;
mod vec4;

pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
