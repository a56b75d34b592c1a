//! Matrix types module.
//!
//! This module provides the matrix types for kornia-glmath:
//! - Mat: const-generic `R x C` matrix stored by columns
//! - Mat2, Mat3, Mat4 specializations: determinant, inverse, rotations
//! - Mat4 transforms: translation, scaling, projections and camera helpers
//! - MatrixView: dimension-erased read-only view
//!
//! Aliases are named after the shape in rows by columns, e.g. `Mat2x3F32` has 2
//! rows and 3 columns.

#[macro_use]
mod mat;

mod mat2;
mod mat3;
mod mat4;
mod projection;
mod view;

pub use mat::Mat;
pub use view::MatrixView;

use crate::AlgebraError;

/// Log a rejected input at debug level and hand the error back to the caller.
pub(crate) fn rejected(err: AlgebraError) -> AlgebraError {
    log::debug!("kornia-glmath: {err}");
    err
}

macro_rules! define_matrix_aliases {
    ($($alias:ident: $scalar:ty, $r:literal, $c:literal);+ $(;)?) => {
        $(
            #[doc = concat!("`", stringify!($r), "x", stringify!($c), "` matrix of `", stringify!($scalar), "`.")]
            pub type $alias = Mat<$scalar, $r, $c>;
        )+
    };
}

define_matrix_aliases!(
    Mat2F32: f32, 2, 2;
    Mat2x3F32: f32, 2, 3;
    Mat2x4F32: f32, 2, 4;
    Mat3x2F32: f32, 3, 2;
    Mat3F32: f32, 3, 3;
    Mat3x4F32: f32, 3, 4;
    Mat4x2F32: f32, 4, 2;
    Mat4x3F32: f32, 4, 3;
    Mat4F32: f32, 4, 4;
    Mat2F64: f64, 2, 2;
    Mat2x3F64: f64, 2, 3;
    Mat2x4F64: f64, 2, 4;
    Mat3x2F64: f64, 3, 2;
    Mat3F64: f64, 3, 3;
    Mat3x4F64: f64, 3, 4;
    Mat4x2F64: f64, 4, 2;
    Mat4x3F64: f64, 4, 3;
    Mat4F64: f64, 4, 4;
);
