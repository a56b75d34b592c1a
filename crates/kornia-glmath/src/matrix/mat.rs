//! Const-generic matrix type.
//!
//! A matrix is stored as `C` columns of `R` rows, so element `[col, row]` lives at
//! flat index `col * R + row`. That order is the one used by every flat
//! constructor and accessor, and it is the layout OpenGL style APIs expect for
//! uniform uploads.

use crate::{AlgebraError, MatrixView, Real, Scalar};

/// A matrix with `R` rows and `C` columns of element kind `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat<T, const R: usize, const C: usize> {
    pub(crate) cols: [[T; R]; C],
}

// SAFETY: `repr(C)` over a nested array of a `Pod` kind has no padding and any bit
// pattern is valid.
unsafe impl<T: Scalar, const R: usize, const C: usize> bytemuck::Zeroable for Mat<T, R, C> {}
unsafe impl<T: Scalar, const R: usize, const C: usize> bytemuck::Pod for Mat<T, R, C> {}

impl<T: Real, const R: usize, const C: usize> Mat<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;

    /// Number of columns.
    pub const COLS: usize = C;

    /// Number of elements.
    pub const LEN: usize = R * C;

    /// All elements set to zero.
    pub const ZERO: Self = Self {
        cols: [[T::ZERO; R]; C],
    };

    /// Create a matrix from an array of columns.
    #[inline]
    pub const fn from_cols_array_2d(cols: [[T; R]; C]) -> Self {
        Self { cols }
    }

    /// The columns of the matrix.
    #[inline]
    pub fn to_cols_array_2d(&self) -> [[T; R]; C] {
        self.cols
    }

    /// Create a matrix by evaluating `f(col, row)` for every element.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            cols: std::array::from_fn(|c| std::array::from_fn(|r| f(c, r))),
        }
    }

    /// Create a matrix from the elements of `arr` starting at `offset`.
    ///
    /// The n-th element goes to column `n / R`, row `n % R`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ArrayTooShort`] if fewer than `R * C` elements remain after
    /// `offset`.
    pub fn from_slice(arr: &[T], offset: usize) -> Result<Self, AlgebraError> {
        let tail = arr.get(offset..).unwrap_or(&[]);
        if tail.len() < R * C {
            return Err(AlgebraError::ArrayTooShort {
                required: R * C,
                offset,
                len: arr.len(),
            });
        }
        Ok(Self::from_fn(|c, r| tail[c * R + r]))
    }

    /// The elements in column order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    /// The elements in column order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(std::slice::from_mut(self))
    }

    /// The packed bytes of the matrix, in column order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    fn check_index(col: usize, row: usize) -> Result<(), AlgebraError> {
        if col >= C || row >= R {
            return Err(AlgebraError::IndexOutOfRange {
                col,
                row,
                cols: C,
                rows: R,
            });
        }
        Ok(())
    }

    /// The element at `[col, row]`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::IndexOutOfRange`] if `col >= C` or `row >= R`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> Result<T, AlgebraError> {
        Self::check_index(col, row)?;
        Ok(self.cols[col][row])
    }

    /// Overwrite the element at `[col, row]`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::IndexOutOfRange`] if `col >= C` or `row >= R`; the matrix is
    /// left untouched.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: T) -> Result<(), AlgebraError> {
        Self::check_index(col, row)?;
        self.cols[col][row] = value;
        Ok(())
    }

    /// The column at index `col`.
    ///
    /// # Panics
    ///
    /// If `col >= C`.
    #[inline]
    pub fn column(&self, col: usize) -> [T; R] {
        self.cols[col]
    }

    /// The row at index `row`.
    ///
    /// # Panics
    ///
    /// If `row >= R`.
    #[inline]
    pub fn row(&self, row: usize) -> [T; C] {
        std::array::from_fn(|c| self.cols[c][row])
    }

    /// The transpose, a `C x R` matrix.
    #[inline]
    pub fn transposed(&self) -> Mat<T, C, R> {
        Mat::from_fn(|c, r| self.cols[r][c])
    }

    /// A dimension-erased read-only view over the elements.
    #[inline]
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::from(self)
    }

    /// Apply `f` to every element.
    #[inline]
    pub fn map(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::from_fn(|c, r| f(self.cols[c][r]))
    }

    /// Whether every element differs from `other` by at most `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.within(*b, epsilon))
    }
}

impl<T: Real, const N: usize> Mat<T, N, N> {
    /// A square matrix with `diagonal` on the main diagonal and zero elsewhere.
    pub fn from_diagonal(diagonal: [T; N]) -> Self {
        Self::from_fn(|c, r| if c == r { diagonal[c] } else { T::ZERO })
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> [T; N] {
        std::array::from_fn(|i| self.cols[i][i])
    }

    /// Sum of the main diagonal.
    pub fn trace(&self) -> T {
        self.diagonal().iter().fold(T::ZERO, |acc, &d| acc + d)
    }

    /// Transpose in place.
    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }
}

impl<T: Real, const R: usize, const C: usize> Default for Mat<T, R, C> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Real, const R: usize, const C: usize> From<[[T; R]; C]> for Mat<T, R, C> {
    #[inline]
    fn from(cols: [[T; R]; C]) -> Self {
        Self::from_cols_array_2d(cols)
    }
}

impl<T: Real, const R: usize, const C: usize> From<Mat<T, R, C>> for [[T; R]; C] {
    #[inline]
    fn from(m: Mat<T, R, C>) -> Self {
        m.cols
    }
}

// `m[(col, row)]`, panicking outside the shape.
impl<T: Real, const R: usize, const C: usize> std::ops::Index<(usize, usize)> for Mat<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &T {
        &self.cols[col][row]
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::IndexMut<(usize, usize)>
    for Mat<T, R, C>
{
    #[inline]
    fn index_mut(&mut self, (col, row): (usize, usize)) -> &mut T {
        &mut self.cols[col][row]
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::Add for Mat<T, R, C> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_fn(|c, r| self.cols[c][r] + rhs.cols[c][r])
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::Sub for Mat<T, R, C> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_fn(|c, r| self.cols[c][r] - rhs.cols[c][r])
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::AddAssign for Mat<T, R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::SubAssign for Mat<T, R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::Neg for Mat<T, R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::Mul<T> for Mat<T, R, C> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|v| v * rhs)
    }
}

impl<T: Real, const R: usize, const C: usize> std::ops::MulAssign<T> for Mat<T, R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

// Scalar multiplication (reverse)
impl<const R: usize, const C: usize> std::ops::Mul<Mat<f32, R, C>> for f32 {
    type Output = Mat<f32, R, C>;

    #[inline]
    fn mul(self, rhs: Mat<f32, R, C>) -> Self::Output {
        rhs * self
    }
}

impl<const R: usize, const C: usize> std::ops::Mul<Mat<f64, R, C>> for f64 {
    type Output = Mat<f64, R, C>;

    #[inline]
    fn mul(self, rhs: Mat<f64, R, C>) -> Self::Output {
        rhs * self
    }
}

// Matrix-matrix multiplication; the inner dimensions must agree at compile time.
impl<T: Real, const R: usize, const K: usize, const C: usize> std::ops::Mul<Mat<T, K, C>>
    for Mat<T, R, K>
{
    type Output = Mat<T, R, C>;

    #[inline]
    fn mul(self, rhs: Mat<T, K, C>) -> Self::Output {
        Mat::from_fn(|c, r| {
            (0..K).fold(T::ZERO, |acc, k| acc + self.cols[k][r] * rhs.cols[c][k])
        })
    }
}

impl<T: Real, const N: usize> std::ops::MulAssign for Mat<T, N, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real, const R: usize, const C: usize> approx::AbsDiffEq for Mat<T, R, C> {
    type Epsilon = T;

    #[inline]
    fn default_epsilon() -> T {
        <T as approx::AbsDiffEq>::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Real, const R: usize, const C: usize> approx::RelativeEq for Mat<T, R, C> {
    #[inline]
    fn default_max_relative() -> T {
        <T as approx::RelativeEq>::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// Implement the flat array conversions of each shape.
///
/// `[T; R * C]` cannot be spelled with generic const parameters on stable, so the
/// element count is given per shape.
macro_rules! impl_flat_array {
    ($(($r:literal, $c:literal, $n:literal)),+ $(,)?) => {
        $(
            impl<T: Real> Mat<T, $r, $c> {
                /// Create a matrix from a flat array in column order.
                #[inline]
                pub fn from_flat_array(arr: [T; $n]) -> Self {
                    Self::from_fn(|c, r| arr[c * $r + r])
                }

                /// The elements as a flat array in column order.
                #[inline]
                pub fn to_flat_array(&self) -> [T; $n] {
                    let mut arr = [T::ZERO; $n];
                    arr.copy_from_slice(self.as_slice());
                    arr
                }
            }

            impl<T: Real> From<[T; $n]> for Mat<T, $r, $c> {
                #[inline]
                fn from(arr: [T; $n]) -> Self {
                    Self::from_flat_array(arr)
                }
            }

            impl<T: Real> From<Mat<T, $r, $c>> for [T; $n] {
                #[inline]
                fn from(m: Mat<T, $r, $c>) -> Self {
                    m.to_flat_array()
                }
            }
        )+
    };
}

impl_flat_array!(
    (2, 2, 4),
    (2, 3, 6),
    (2, 4, 8),
    (3, 2, 6),
    (3, 3, 9),
    (3, 4, 12),
    (4, 2, 8),
    (4, 3, 12),
    (4, 4, 16),
);

/// Implement `inverse`/`invert` for a square size with `determinant` and `adjugate`.
macro_rules! impl_square_inverse {
    ($n:literal) => {
        impl<T: $crate::Real> $crate::Mat<T, $n, $n> {
            /// The inverse matrix, computed from the adjugate.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::SingularMatrix`](crate::AlgebraError::SingularMatrix) if the
            /// determinant is not finite or negligible next to the product of the column
            /// lengths (its upper bound), the all-zero matrix included.
            pub fn inverse(&self) -> Result<Self, $crate::AlgebraError> {
                let det = self.determinant();
                let bound = self.cols.iter().fold(T::ONE, |acc, col| {
                    acc * col.iter().fold(T::ZERO, |sum, &v| sum + v * v).sqrt()
                });
                if !det.is_finite() || det.abs() <= T::epsilon() * bound {
                    return Err($crate::matrix::rejected($crate::AlgebraError::SingularMatrix));
                }
                let inv = self.adjugate() * (T::ONE / det);
                if !inv.as_slice().iter().all(|v| v.is_finite()) {
                    return Err($crate::matrix::rejected($crate::AlgebraError::SingularMatrix));
                }
                Ok(inv)
            }

            /// Invert in place.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::SingularMatrix`](crate::AlgebraError::SingularMatrix) as in
            /// [`inverse`](Self::inverse); the matrix is left untouched.
            #[inline]
            pub fn invert(&mut self) -> Result<(), $crate::AlgebraError> {
                *self = self.inverse()?;
                Ok(())
            }
        }
    };
}

/// Implement the pure and mutating rotation helpers of a square size from its
/// `from_rotation_*` constructors.
macro_rules! impl_rotations {
    ($n:literal, [$(($from:ident, $rotated:ident, $rotate:ident)),+ $(,)?]) => {
        impl<T: $crate::Real> $crate::Mat<T, $n, $n> {
            $(
                #[doc = concat!("A copy rotated with [`", stringify!($from), "`](Self::", stringify!($from), "), `self * R`.")]
                #[inline]
                pub fn $rotated(&self, degrees: T) -> Self {
                    *self * Self::$from(degrees)
                }

                #[doc = concat!("Rotate in place with [`", stringify!($from), "`](Self::", stringify!($from), "), `self = self * R`.")]
                #[inline]
                pub fn $rotate(&mut self, degrees: T) {
                    *self = self.$rotated(degrees);
                }
            )+
        }
    };
}
