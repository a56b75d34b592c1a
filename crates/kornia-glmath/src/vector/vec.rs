//! Macro to define a vector type.
//!
//! The generated types are `#[repr(C)]` structs generic over the [`Scalar`](crate::Scalar)
//! element kind, with one public field per component and no padding, so they can
//! be handed to a graphics API as plain old data.
//!
//! # Arguments
//!
//! * `name`   - The name of the vector type.
//! * `n`      - The number of components.
//! * `fields` - The component fields (e.g. `[x, y, z]`).
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $n:literal, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(C)]
        pub struct $name<T> {
            $(
                #[doc = concat!("The `", stringify!($field), "` component.")]
                pub $field: T
            ),+
        }

        // SAFETY: every field has the same `Pod` type and the struct is `repr(C)`,
        // so there is no padding and any bit pattern is valid.
        unsafe impl<T: $crate::Scalar> bytemuck::Zeroable for $name<T> {}
        unsafe impl<T: $crate::Scalar> bytemuck::Pod for $name<T> {}

        impl<T: $crate::Scalar> $name<T> {
            /// Number of components.
            pub const LEN: usize = $n;

            /// All components set to zero.
            pub const ZERO: Self = Self { $($field: T::ZERO),+ };

            /// All components set to one.
            pub const ONE: Self = Self { $($field: T::ONE),+ };

            /// Create a new vector from its components.
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector with all components set to `value`.
            #[inline]
            pub const fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: [T; $n]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Create a vector from the elements of `arr` starting at `offset`.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::ArrayTooShort`](crate::AlgebraError::ArrayTooShort) if
            /// fewer than the number of components remain after `offset`.
            pub fn from_slice(arr: &[T], offset: usize) -> Result<Self, $crate::AlgebraError> {
                let tail = arr.get(offset..).unwrap_or(&[]);
                if tail.len() < $n {
                    return Err($crate::AlgebraError::ArrayTooShort {
                        required: $n,
                        offset,
                        len: arr.len(),
                    });
                }
                let mut components = [T::ZERO; $n];
                components.copy_from_slice(&tail[..$n]);
                Ok(Self::from_array(components))
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> [T; $n] {
                [$(self.$field),+]
            }

            /// View the components as a slice.
            #[inline]
            pub fn as_slice(&self) -> &[T] {
                bytemuck::cast_slice(std::slice::from_ref(self))
            }

            /// View the components as a mutable slice.
            #[inline]
            pub fn as_mut_slice(&mut self) -> &mut [T] {
                bytemuck::cast_slice_mut(std::slice::from_mut(self))
            }

            /// The packed bytes of the vector.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            /// Apply `f` to every component.
            #[inline]
            pub fn map<U: $crate::Scalar>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }

            /// Convert every component to another element kind with its native `as` conversion.
            #[inline]
            pub fn cast<U: $crate::Scalar>(self) -> $name<U> {
                self.map(|c| c.cast::<U>())
            }

            /// Multiply by a scalar of any kind, truncating the product back to `T`.
            ///
            /// Two integer kinds multiply in `i64` and wrap, anything involving a
            /// floating kind multiplies in `f64`.
            #[inline]
            pub fn scale_by<S: $crate::Scalar>(self, s: S) -> Self {
                self.map(|c| {
                    if T::IS_INTEGER && S::IS_INTEGER {
                        T::from_i64_cast(c.as_i64().wrapping_mul(s.as_i64()))
                    } else {
                        T::from_f64_cast(c.as_f64() * s.as_f64())
                    }
                })
            }

            /// Divide by a scalar of any kind, truncating the quotient back to `T`.
            ///
            /// # Panics
            ///
            /// On integer division by zero, like the primitive.
            #[inline]
            pub fn div_by<S: $crate::Scalar>(self, s: S) -> Self {
                self.map(|c| {
                    if T::IS_INTEGER && S::IS_INTEGER {
                        T::from_i64_cast(c.as_i64().wrapping_div(s.as_i64()))
                    } else {
                        T::from_f64_cast(c.as_f64() / s.as_f64())
                    }
                })
            }

            /// Dot product, accumulated in the natural floating type of the kind.
            #[inline]
            pub fn dot(self, rhs: Self) -> T::Accum {
                let mut acc = <T::Accum as $crate::Scalar>::ZERO;
                $(acc = acc + self.$field.as_accum() * rhs.$field.as_accum();)+
                acc
            }

            /// Squared Euclidean length, in the accumulation type.
            ///
            /// That is `f32` for every kind except `f64`, which stays in double precision.
            #[inline]
            pub fn module_squared(self) -> T::Accum {
                self.dot(self)
            }

            /// Euclidean length, in the accumulation type.
            ///
            /// That is `f32` for every kind except `f64`, which stays in double precision.
            #[inline]
            pub fn module(self) -> T::Accum {
                num_traits::Float::sqrt(self.module_squared())
            }

            /// Scale the vector to unit length.
            ///
            /// A zero vector is left unchanged. Integer kinds truncate each
            /// normalized component toward zero.
            pub fn normalize(&mut self) {
                let zero = <T::Accum as $crate::Scalar>::ZERO;
                let mut scale = <T::Accum as $crate::Scalar>::ONE;
                let mut module = self.module();
                if num_traits::Float::is_infinite(module) {
                    // the squares overflow, divide by the largest magnitude first
                    scale = zero;
                    $(scale = $crate::scalar::partial_max(
                        scale,
                        num_traits::Float::abs(self.$field.as_accum()),
                    );)+
                    let mut sum = zero;
                    $(
                        let c = self.$field.as_accum() / scale;
                        sum = sum + c * c;
                    )+
                    module = num_traits::Float::sqrt(sum);
                }
                if module == zero {
                    return;
                }
                $(self.$field = T::from_accum(self.$field.as_accum() / scale / module);)+
            }

            /// A unit length copy of the vector, or the vector itself if it is zero.
            #[inline]
            pub fn normalized(self) -> Self {
                let mut v = self;
                v.normalize();
                v
            }

            /// Componentwise minimum of a sequence of vectors.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::EmptySequence`](crate::AlgebraError::EmptySequence) if `values` is empty.
            pub fn min(values: &[Self]) -> Result<Self, $crate::AlgebraError> {
                let (first, rest) = values
                    .split_first()
                    .ok_or($crate::AlgebraError::EmptySequence)?;
                Ok(rest.iter().fold(*first, |acc, v| Self {
                    $($field: $crate::scalar::partial_min(acc.$field, v.$field)),+
                }))
            }

            /// Componentwise maximum of a sequence of vectors.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::EmptySequence`](crate::AlgebraError::EmptySequence) if `values` is empty.
            pub fn max(values: &[Self]) -> Result<Self, $crate::AlgebraError> {
                let (first, rest) = values
                    .split_first()
                    .ok_or($crate::AlgebraError::EmptySequence)?;
                Ok(rest.iter().fold(*first, |acc, v| Self {
                    $($field: $crate::scalar::partial_max(acc.$field, v.$field)),+
                }))
            }

            /// Componentwise minimum and maximum of a sequence of vectors, in one pass.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::EmptySequence`](crate::AlgebraError::EmptySequence) if `values` is empty.
            pub fn min_max(values: &[Self]) -> Result<(Self, Self), $crate::AlgebraError> {
                let (first, rest) = values
                    .split_first()
                    .ok_or($crate::AlgebraError::EmptySequence)?;
                Ok(rest.iter().fold((*first, *first), |(lo, hi), v| {
                    (
                        Self { $($field: $crate::scalar::partial_min(lo.$field, v.$field)),+ },
                        Self { $($field: $crate::scalar::partial_max(hi.$field, v.$field)),+ },
                    )
                }))
            }
        }

        impl<T: $crate::FloatScalar> $name<T> {
            /// Whether every component differs from `other` by at most `epsilon`.
            #[inline]
            pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$field.within(other.$field, epsilon))+
            }
        }

        impl<T: $crate::Real> approx::AbsDiffEq for $name<T> {
            type Epsilon = T;

            #[inline]
            fn default_epsilon() -> T {
                <T as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& <T as approx::AbsDiffEq>::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }

        impl<T: $crate::Real> approx::RelativeEq for $name<T> {
            #[inline]
            fn default_max_relative() -> T {
                <T as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& <T as approx::RelativeEq>::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))+
            }
        }

        // Conversions to and from arrays.
        impl<T: $crate::Scalar> From<[T; $n]> for $name<T> {
            #[inline]
            fn from(arr: [T; $n]) -> Self {
                Self::from_array(arr)
            }
        }

        impl<T: $crate::Scalar> From<$name<T>> for [T; $n] {
            #[inline]
            fn from(v: $name<T>) -> Self {
                v.to_array()
            }
        }

        impl<T: $crate::Scalar> std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                &self.as_slice()[index]
            }
        }

        impl<T: $crate::Scalar> std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.as_mut_slice()[index]
            }
        }

        // Componentwise arithmetic with the native overflow semantics of the kind.
        impl<T: $crate::Scalar> std::ops::Add for $name<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field.scalar_add(rhs.$field)),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::Sub for $name<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field.scalar_sub(rhs.$field)),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: $crate::Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: $crate::Scalar> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field.scalar_mul(rhs)),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::Scalar> std::ops::Div<T> for $name<T> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field.scalar_div(rhs)),+ }
            }
        }

        impl<T: $crate::Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        // `a * b` is the dot product.
        impl<T: $crate::Scalar> std::ops::Mul for $name<T> {
            type Output = T::Accum;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                self.dot(rhs)
            }
        }

        impl<T: $crate::SignedScalar> std::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: self.$field.scalar_neg()),+ }
            }
        }

        // Scalar multiplication (reverse)
        impl std::ops::Mul<$name<f32>> for f32 {
            type Output = $name<f32>;

            #[inline]
            fn mul(self, rhs: $name<f32>) -> Self::Output {
                rhs * self
            }
        }

        impl std::ops::Mul<$name<f64>> for f64 {
            type Output = $name<f64>;

            #[inline]
            fn mul(self, rhs: $name<f64>) -> Self::Output {
                rhs * self
            }
        }
    };
}

/// Define the per element kind aliases of a vector type.
macro_rules! define_vector_aliases {
    ($name:ident, [$($alias:ident: $scalar:ty),+ $(,)?]) => {
        $(
            #[doc = concat!("`", stringify!($name), "` of `", stringify!($scalar), "` components.")]
            pub type $alias = $name<$scalar>;
        )+
    };
}
