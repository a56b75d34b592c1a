use crate::{deg_to_rad, Mat, Real, Vec3};

impl<T: Real> Mat<T, 3, 3> {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols_array_2d([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);

    /// Create a matrix from its column vectors.
    #[inline]
    pub fn from_cols(x_axis: Vec3<T>, y_axis: Vec3<T>, z_axis: Vec3<T>) -> Self {
        Self::from_cols_array_2d([x_axis.to_array(), y_axis.to_array(), z_axis.to_array()])
    }

    /// The determinant, in closed form.
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.cols;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// The 2x2 matrix left after removing column `col` and row `row`.
    pub fn minor(&self, col: usize, row: usize) -> Mat<T, 2, 2> {
        Mat::from_fn(|c, r| {
            let c = if c < col { c } else { c + 1 };
            let r = if r < row { r } else { r + 1 };
            self.cols[c][r]
        })
    }

    /// The adjugate, the transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        Self::from_fn(|c, r| {
            let cofactor = self.minor(r, c).determinant();
            if (r + c) % 2 == 0 {
                cofactor
            } else {
                -cofactor
            }
        })
    }

    /// Right-handed rotation around the x axis by `degrees`.
    pub fn from_rotation_x(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::from_cols_array_2d([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, c, s],
            [T::ZERO, -s, c],
        ])
    }

    /// Right-handed rotation around the y axis by `degrees`.
    pub fn from_rotation_y(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::from_cols_array_2d([
            [c, T::ZERO, -s],
            [T::ZERO, T::ONE, T::ZERO],
            [s, T::ZERO, c],
        ])
    }

    /// Right-handed rotation around the z axis by `degrees`.
    pub fn from_rotation_z(degrees: T) -> Self {
        let (s, c) = deg_to_rad(degrees).sin_cos();
        Self::from_cols_array_2d([
            [c, s, T::ZERO],
            [-s, c, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Non-uniform scaling along the axes.
    #[inline]
    pub fn from_scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale.to_array())
    }

    /// A copy scaled along the axes, `self * S`.
    #[inline]
    pub fn scaled(&self, scale: Vec3<T>) -> Self {
        *self * Self::from_scale(scale)
    }

    /// Scale along the axes in place.
    #[inline]
    pub fn scale(&mut self, scale: Vec3<T>) {
        *self = self.scaled(scale);
    }
}

impl_square_inverse!(3);
impl_rotations!(
    3,
    [
        (from_rotation_x, rotated_x, rotate_x),
        (from_rotation_y, rotated_y, rotate_y),
        (from_rotation_z, rotated_z, rotate_z),
    ]
);

impl<T: Real> std::ops::Mul<Vec3<T>> for Mat<T, 3, 3> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        let [x, y, z] = self.cols;
        Vec3::new(
            x[0] * rhs.x + y[0] * rhs.y + z[0] * rhs.z,
            x[1] * rhs.x + y[1] * rhs.y + z[1] * rhs.z,
            x[2] * rhs.x + y[2] * rhs.y + z[2] * rhs.z,
        )
    }
}
