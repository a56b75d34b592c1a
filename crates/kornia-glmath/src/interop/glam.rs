//! Conversions to and from `glam` types.
//!
//! Both crates store matrices by columns, so the conversions are plain copies.

use crate::{Mat, Vec2, Vec3, Vec4};

macro_rules! impl_glam_vector {
    ($($name:ident<$scalar:ty> <=> $glam_type:ty),+ $(,)?) => {
        $(
            impl From<$glam_type> for $name<$scalar> {
                #[inline]
                fn from(v: $glam_type) -> Self {
                    Self::from_array(v.to_array())
                }
            }

            impl From<$name<$scalar>> for $glam_type {
                #[inline]
                fn from(v: $name<$scalar>) -> Self {
                    <$glam_type>::from_array(v.to_array())
                }
            }
        )+
    };
}

impl_glam_vector!(
    Vec2<f32> <=> glam::Vec2,
    Vec3<f32> <=> glam::Vec3,
    Vec4<f32> <=> glam::Vec4,
    Vec2<f64> <=> glam::DVec2,
    Vec3<f64> <=> glam::DVec3,
    Vec4<f64> <=> glam::DVec4,
    Vec2<i32> <=> glam::IVec2,
    Vec3<i32> <=> glam::IVec3,
    Vec4<i32> <=> glam::IVec4,
    Vec2<u32> <=> glam::UVec2,
    Vec3<u32> <=> glam::UVec3,
    Vec4<u32> <=> glam::UVec4,
);

macro_rules! impl_glam_matrix {
    ($($scalar:ty, $n:literal <=> $glam_type:ty),+ $(,)?) => {
        $(
            impl From<$glam_type> for Mat<$scalar, $n, $n> {
                #[inline]
                fn from(m: $glam_type) -> Self {
                    Self::from_cols_array_2d(m.to_cols_array_2d())
                }
            }

            impl From<Mat<$scalar, $n, $n>> for $glam_type {
                #[inline]
                fn from(m: Mat<$scalar, $n, $n>) -> Self {
                    <$glam_type>::from_cols_array_2d(&m.to_cols_array_2d())
                }
            }
        )+
    };
}

impl_glam_matrix!(
    f32, 2 <=> glam::Mat2,
    f32, 3 <=> glam::Mat3,
    f32, 4 <=> glam::Mat4,
    f64, 2 <=> glam::DMat2,
    f64, 3 <=> glam::DMat3,
    f64, 4 <=> glam::DMat4,
);
