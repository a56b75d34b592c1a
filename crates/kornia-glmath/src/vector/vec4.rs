//! 4D vector types.

use crate::{Scalar, Vec2, Vec3};
use half::f16;

define_vector_type!(
    /// 4D vector, usually a point or direction in homogeneous coordinates.
    Vec4,
    4,
    [x, y, z, w]
);

define_vector_aliases!(
    Vec4,
    [
        Vec4I8: i8,
        Vec4U8: u8,
        Vec4I16: i16,
        Vec4U16: u16,
        Vec4I32: i32,
        Vec4U32: u32,
        Vec4F16: f16,
        Vec4F32: f32,
        Vec4F64: f64,
    ]
);

impl<T: Scalar> Vec4<T> {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// Unit vector along the z axis.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// Unit vector along the w axis.
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Drop the w component.
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T: Scalar> From<Vec4<T>> for Vec3<T> {
    #[inline]
    fn from(v: Vec4<T>) -> Self {
        v.truncate()
    }
}

impl<T: Scalar> From<Vec4<T>> for Vec2<T> {
    #[inline]
    fn from(v: Vec4<T>) -> Self {
        Vec2::new(v.x, v.y)
    }
}
