use crate::{AlgebraError, Mat, Real};

/// A non-owning, dimension-erased view into the elements of a matrix.
///
/// The view borrows the matrix for its lifetime `'a`, so it can hand any `R x C`
/// matrix to code that only needs to read elements by `[col, row]` without being
/// generic over the shape.
///
/// # Examples
///
/// ```rust
/// use kornia_glmath::Mat2x3F32;
///
/// let m = Mat2x3F32::from_flat_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let view = m.view();
/// assert_eq!(view.width(), 3);
/// assert_eq!(view.height(), 2);
/// assert_eq!(view.get(2, 1), Ok(6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
}

impl<'a, T: Real> MatrixView<'a, T> {
    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The element at `[col, row]`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::IndexOutOfRange`] if `col >= width()` or `row >= height()`.
    pub fn get(&self, col: usize, row: usize) -> Result<T, AlgebraError> {
        if col >= self.width || row >= self.height {
            return Err(AlgebraError::IndexOutOfRange {
                col,
                row,
                cols: self.width,
                rows: self.height,
            });
        }
        Ok(self.data[col * self.height + row])
    }

    /// The column at index `col`, or `None` past the last column.
    #[inline]
    pub fn column(&self, col: usize) -> Option<&'a [T]> {
        if col >= self.width {
            return None;
        }
        let start = col * self.height;
        self.data.get(start..start + self.height)
    }

    /// The elements in column order.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Real> std::ops::Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (col, row): (usize, usize)) -> &T {
        assert!(
            col < self.width && row < self.height,
            "index [{col}, {row}] out of range for a {}x{} matrix view",
            self.height,
            self.width
        );
        &self.data[col * self.height + row]
    }
}

impl<'a, T: Real, const R: usize, const C: usize> From<&'a Mat<T, R, C>> for MatrixView<'a, T> {
    #[inline]
    fn from(m: &'a Mat<T, R, C>) -> Self {
        Self {
            data: m.as_slice(),
            width: C,
            height: R,
        }
    }
}
