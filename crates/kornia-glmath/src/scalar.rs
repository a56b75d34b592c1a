//! Scalar element kinds backing the vector and matrix types.
//!
//! Every element kind implements the closed [`Scalar`] trait exactly once, so the
//! vector and matrix code is written a single time and monomorphized per kind:
//!
//! | kind   | `Accum` | signed | float |
//! |--------|---------|--------|-------|
//! | `i8`   | `f32`   | yes    | no    |
//! | `u8`   | `f32`   | no     | no    |
//! | `i16`  | `f32`   | yes    | no    |
//! | `u16`  | `f32`   | no     | no    |
//! | `i32`  | `f32`   | yes    | no    |
//! | `u32`  | `f32`   | no     | no    |
//! | `f16`  | `f32`   | yes    | yes   |
//! | `f32`  | `f32`   | yes    | yes   |
//! | `f64`  | `f64`   | yes    | yes   |

use half::f16;
use std::fmt::Debug;

/// An element kind of vectors and matrices.
///
/// Arithmetic follows the native semantics of the kind: integer kinds wrap on
/// overflow exactly like the fixed-width type, floating kinds follow IEEE 754.
pub trait Scalar:
    Copy + Debug + Default + PartialEq + PartialOrd + bytemuck::Pod + Send + Sync + 'static
{
    /// The natural floating type used to accumulate products of this kind.
    type Accum: Real;

    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Whether the kind is an integer kind.
    const IS_INTEGER: bool;

    /// Addition with the native overflow semantics of the kind.
    fn scalar_add(self, rhs: Self) -> Self;

    /// Subtraction with the native overflow semantics of the kind.
    fn scalar_sub(self, rhs: Self) -> Self;

    /// Multiplication with the native overflow semantics of the kind.
    fn scalar_mul(self, rhs: Self) -> Self;

    /// Division with the native semantics of the kind.
    ///
    /// Integer division by zero panics, as it does for the primitive.
    fn scalar_div(self, rhs: Self) -> Self;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;

    /// Convert from `f64` using the `as` conversion of the kind.
    fn from_f64_cast(value: f64) -> Self;

    /// Convert to `i64`, truncating floating values toward zero.
    fn as_i64(self) -> i64;

    /// Convert from `i64` using the `as` conversion of the kind.
    fn from_i64_cast(value: i64) -> Self;

    /// Convert to the accumulation type.
    fn as_accum(self) -> Self::Accum;

    /// Convert from the accumulation type using the `as` conversion of the kind.
    fn from_accum(value: Self::Accum) -> Self;

    /// Convert to another kind with that kind's native `as` conversion.
    ///
    /// Integer to integer conversions wrap, floating to integer conversions
    /// truncate toward zero.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        if Self::IS_INTEGER {
            U::from_i64_cast(self.as_i64())
        } else {
            U::from_f64_cast(self.as_f64())
        }
    }
}

/// An element kind with unary negation.
pub trait SignedScalar: Scalar {
    /// Negation; integer kinds wrap (`-i8::MIN == i8::MIN`).
    fn scalar_neg(self) -> Self;
}

/// A floating element kind, which supports comparison within a tolerance.
pub trait FloatScalar: SignedScalar {
    /// Whether `self` and `other` differ by at most `epsilon`.
    #[inline]
    fn within(self, other: Self, epsilon: Self) -> bool {
        (self.as_f64() - other.as_f64()).abs() <= epsilon.as_f64()
    }
}

/// The matrix element kinds: `f32` and `f64`.
pub trait Real:
    FloatScalar
    + Scalar<Accum = Self>
    + num_traits::Float
    + approx::RelativeEq<Epsilon = Self>
    + std::fmt::Display
{
}

macro_rules! impl_integer_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                type Accum = f32;

                const ZERO: Self = 0;
                const ONE: Self = 1;
                const IS_INTEGER: bool = true;

                #[inline]
                fn scalar_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn scalar_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }

                #[inline]
                fn scalar_mul(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline]
                fn scalar_div(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64_cast(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn as_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_i64_cast(value: i64) -> Self {
                    value as $t
                }

                #[inline]
                fn as_accum(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn from_accum(value: f32) -> Self {
                    value as $t
                }
            }
        )+
    };
}

impl_integer_scalar!(i8, u8, i16, u16, i32, u32);

macro_rules! impl_signed_integer {
    ($($t:ty),+) => {
        $(
            impl SignedScalar for $t {
                #[inline]
                fn scalar_neg(self) -> Self {
                    self.wrapping_neg()
                }
            }
        )+
    };
}

impl_signed_integer!(i8, i16, i32);

macro_rules! impl_real_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                type Accum = $t;

                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const IS_INTEGER: bool = false;

                #[inline]
                fn scalar_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn scalar_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn scalar_mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn scalar_div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn as_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64_cast(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn as_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_i64_cast(value: i64) -> Self {
                    value as $t
                }

                #[inline]
                fn as_accum(self) -> Self {
                    self
                }

                #[inline]
                fn from_accum(value: Self) -> Self {
                    value
                }
            }

            impl SignedScalar for $t {
                #[inline]
                fn scalar_neg(self) -> Self {
                    -self
                }
            }

            impl FloatScalar for $t {}

            impl Real for $t {}
        )+
    };
}

impl_real_scalar!(f32, f64);

impl Scalar for f16 {
    type Accum = f32;

    const ZERO: Self = f16::ZERO;
    const ONE: Self = f16::ONE;
    const IS_INTEGER: bool = false;

    #[inline]
    fn scalar_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn scalar_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn scalar_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn scalar_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64()
    }

    #[inline]
    fn from_f64_cast(value: f64) -> Self {
        f16::from_f64(value)
    }

    #[inline]
    fn as_i64(self) -> i64 {
        self.to_f64() as i64
    }

    #[inline]
    fn from_i64_cast(value: i64) -> Self {
        f16::from_f64(value as f64)
    }

    #[inline]
    fn as_accum(self) -> f32 {
        self.to_f32()
    }

    #[inline]
    fn from_accum(value: f32) -> Self {
        f16::from_f32(value)
    }
}

impl SignedScalar for f16 {
    #[inline]
    fn scalar_neg(self) -> Self {
        -self
    }
}

impl FloatScalar for f16 {}

/// Convert an angle in degrees to radians.
#[inline]
pub fn deg_to_rad<T: Real>(degrees: T) -> T {
    degrees.to_radians()
}

/// Convert an angle in radians to degrees.
#[inline]
pub fn rad_to_deg<T: Real>(radians: T) -> T {
    radians.to_degrees()
}

// min/max for the batch reductions; `PartialOrd` is all the kinds share.
#[inline]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
