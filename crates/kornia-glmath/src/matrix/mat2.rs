use crate::{deg_to_rad, Mat, Real, Vec2};

impl<T: Real> Mat<T, 2, 2> {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols_array_2d([[T::ONE, T::ZERO], [T::ZERO, T::ONE]]);

    /// Create a matrix from its column vectors.
    #[inline]
    pub fn from_cols(x_axis: Vec2<T>, y_axis: Vec2<T>) -> Self {
        Self::from_cols_array_2d([x_axis.to_array(), y_axis.to_array()])
    }

    /// The determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.cols;
        a * d - c * b
    }

    /// The adjugate, the transpose of the cofactor matrix.
    #[inline]
    pub fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.cols;
        Self::from_cols_array_2d([[d, -b], [-c, a]])
    }

    /// Counter-clockwise rotation in the plane by `degrees`.
    pub fn from_rotation_z(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::from_cols_array_2d([[c, s], [-s, c]])
    }
}

impl_square_inverse!(2);
impl_rotations!(2, [(from_rotation_z, rotated_z, rotate_z)]);

impl<T: Real> std::ops::Mul<Vec2<T>> for Mat<T, 2, 2> {
    type Output = Vec2<T>;

    #[inline]
    fn mul(self, rhs: Vec2<T>) -> Self::Output {
        let [x, y] = self.cols;
        Vec2::new(x[0] * rhs.x + y[0] * rhs.y, x[1] * rhs.x + y[1] * rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AlgebraError, Mat2F32, Mat2F64, Vec2F32};
    use approx::assert_relative_eq;

    #[test]
    fn test_mat2_identity() {
        assert_eq!(Mat2F32::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2F32::IDENTITY.to_flat_array(), [1.0, 0.0, 0.0, 1.0]);
        let v = Vec2F32::new(3.0, -4.0);
        assert_eq!(Mat2F32::IDENTITY * v, v);
    }

    #[test]
    fn test_mat2_determinant() {
        // rows [1 3] [2 4]
        let m = Mat2F64::from_flat_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.determinant(), -2.0);
    }

    #[test]
    fn test_mat2_inverse() -> Result<(), AlgebraError> {
        let m = Mat2F64::from_flat_array([4.0, 2.0, 7.0, 6.0]);
        let inv = m.inverse()?;
        assert_relative_eq!(m * inv, Mat2F64::IDENTITY, epsilon = 1e-12);
        assert_relative_eq!(
            inv,
            Mat2F64::from_flat_array([0.6, -0.2, -0.7, 0.4]),
            epsilon = 1e-12
        );

        let mut n = m;
        n.invert()?;
        assert_eq!(n, inv);
        Ok(())
    }

    #[test]
    fn test_mat2_singular() {
        let mut m = Mat2F32::from_flat_array([1.0, 2.0, 2.0, 4.0]);
        assert_eq!(m.inverse(), Err(AlgebraError::SingularMatrix));
        assert_eq!(m.invert(), Err(AlgebraError::SingularMatrix));
        assert_eq!(m.to_flat_array(), [1.0, 2.0, 2.0, 4.0]);
        assert!(Mat2F32::default()
            .inverse()
            .is_err_and(|e| e.is_invalid_operation()));
    }

    #[test]
    fn test_mat2_rotation() {
        let r = Mat2F32::from_rotation_z(90.0);
        assert_relative_eq!(r * Vec2F32::UNIT_X, Vec2F32::UNIT_Y, epsilon = 1e-6);

        let mut m = Mat2F32::IDENTITY;
        m.rotate_z(45.0);
        m.rotate_z(45.0);
        assert_relative_eq!(m, r, epsilon = 1e-6);
        assert_relative_eq!(
            Mat2F32::IDENTITY.rotated_z(90.0) * Mat2F32::IDENTITY.rotated_z(-90.0),
            Mat2F32::IDENTITY,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_mat2_from_cols() {
        let m = Mat2F32::from_cols(Vec2F32::new(1.0, 2.0), Vec2F32::new(3.0, 4.0));
        assert_eq!(m.to_flat_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(0), [1.0, 3.0]);
    }
}
