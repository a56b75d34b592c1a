//! 3D vector types.

use crate::{Scalar, Vec2, Vec4};
use half::f16;

define_vector_type!(
    /// 3D vector.
    Vec3,
    3,
    [x, y, z]
);

define_vector_aliases!(
    Vec3,
    [
        Vec3I8: i8,
        Vec3U8: u8,
        Vec3I16: i16,
        Vec3U16: u16,
        Vec3I32: i32,
        Vec3U32: u32,
        Vec3F16: f16,
        Vec3F32: f32,
        Vec3F64: f64,
    ]
);

impl<T: Scalar> Vec3<T> {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit vector along the z axis.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Cross product.
    ///
    /// The components are promoted to the accumulation type first, so the result
    /// does not overflow nor truncate for integer kinds. The result is `f32` for
    /// every kind except `f64`, which stays in double precision.
    #[inline]
    pub fn cross(self, rhs: Self) -> Vec3<T::Accum> {
        let (ax, ay, az) = (self.x.as_accum(), self.y.as_accum(), self.z.as_accum());
        let (bx, by, bz) = (rhs.x.as_accum(), rhs.y.as_accum(), rhs.z.as_accum());
        Vec3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Drop the z component.
    #[inline]
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Append a w component.
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

// `a ^ b` is the cross product.
impl<T: Scalar> std::ops::BitXor for Vec3<T> {
    type Output = Vec3<T::Accum>;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross(rhs)
    }
}

// Widening to homogeneous coordinates appends `w = 1`.
impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        v.extend(T::ONE)
    }
}

impl<T: Scalar> From<Vec3<T>> for Vec2<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        v.truncate()
    }
}
