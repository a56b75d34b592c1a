#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `kornia-glmath` provides the small fixed-size vectors and matrices used to
//! describe 3D transforms: model, view and projection matrices, points and
//! directions, and the plain-old-data layout needed to upload them to a GPU.
//!
//! # Architecture
//!
//! - **Scalar**: closed trait over the element kinds `i8`, `u8`, `i16`, `u16`,
//!   `i32`, `u32`, `f16`, `f32` and `f64`
//! - **Vec2 / Vec3 / Vec4**: `#[repr(C)]` vectors generic over the element kind
//! - **Mat**: const-generic `R x C` matrix of `f32` or `f64`, stored by columns
//! - **MatrixView**: dimension-erased read-only view over a matrix
//!
//! # Quick Start
//!
//! ```rust
//! use kornia_glmath::{Mat4F32, Vec3F32};
//!
//! let mut model = Mat4F32::from_translation(Vec3F32::new(0.0, 0.0, -5.0));
//! model.rotate_y(90.0);
//!
//! let eye = Vec3F32::new(0.0, 2.0, 5.0);
//! let view = Mat4F32::look_at(eye, Vec3F32::ZERO, Vec3F32::UNIT_Y).unwrap();
//! let projection = Mat4F32::perspective(60.0, 16.0 / 9.0, 0.1, 100.0).unwrap();
//!
//! let mvp = projection * view * model;
//! let bytes: &[u8] = mvp.as_bytes();
//! assert_eq!(bytes.len(), 64);
//! ```
//!
//! # Feature flags
//!
//! - `glam` (default): `From` conversions to and from the `glam` vector and matrix types
//! - `serde`: `Serialize` and `Deserialize` for every vector and matrix

mod error;
mod interop;
mod matrix;
mod scalar;
mod vector;

pub use crate::error::AlgebraError;
pub use crate::matrix::*;
pub use crate::scalar::{deg_to_rad, rad_to_deg, FloatScalar, Real, Scalar, SignedScalar};
pub use crate::vector::*;
