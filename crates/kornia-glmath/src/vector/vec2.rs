//! 2D vector types.

use crate::{Scalar, Vec3, Vec4};
use half::f16;

define_vector_type!(
    /// 2D vector.
    Vec2,
    2,
    [x, y]
);

define_vector_aliases!(
    Vec2,
    [
        Vec2I8: i8,
        Vec2U8: u8,
        Vec2I16: i16,
        Vec2U16: u16,
        Vec2I32: i32,
        Vec2U32: u32,
        Vec2F16: f16,
        Vec2F32: f32,
        Vec2F64: f64,
    ]
);

impl<T: Scalar> Vec2<T> {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);

    /// Append a z component.
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

// Widening appends the homogeneous coordinate.
impl<T: Scalar> From<Vec2<T>> for Vec3<T> {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        v.extend(T::ONE)
    }
}

impl<T: Scalar> From<Vec2<T>> for Vec4<T> {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        Vec4::new(v.x, v.y, T::ZERO, T::ONE)
    }
}
