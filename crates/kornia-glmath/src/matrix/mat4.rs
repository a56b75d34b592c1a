use crate::{AlgebraError, Mat, Real, Vec3, Vec4};

impl<T: Real> Mat<T, 4, 4> {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_cols_array_2d([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);

    /// Create a matrix from its column vectors.
    #[inline]
    pub fn from_cols(x_axis: Vec4<T>, y_axis: Vec4<T>, z_axis: Vec4<T>, w_axis: Vec4<T>) -> Self {
        Self::from_cols_array_2d([
            x_axis.to_array(),
            y_axis.to_array(),
            z_axis.to_array(),
            w_axis.to_array(),
        ])
    }

    /// Embed a 3x3 linear part into an affine transform with no translation.
    pub fn from_mat3(m: Mat<T, 3, 3>) -> Self {
        Self::from_fn(|c, r| match (c, r) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => m.cols[c][r],
        })
    }

    /// The upper-left 3x3 linear part.
    pub fn to_mat3(&self) -> Mat<T, 3, 3> {
        Mat::from_fn(|c, r| self.cols[c][r])
    }

    /// The 3x3 matrix left after removing column `col` and row `row`.
    pub fn minor(&self, col: usize, row: usize) -> Mat<T, 3, 3> {
        Mat::from_fn(|c, r| {
            let c = if c < col { c } else { c + 1 };
            let r = if r < row { r } else { r + 1 };
            self.cols[c][r]
        })
    }

    /// The determinant, expanded along the first column.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, r| {
            let term = self.cols[0][r] * self.minor(0, r).determinant();
            if r % 2 == 0 {
                acc + term
            } else {
                acc - term
            }
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
    #[inline]
    pub fn from_rotation_x(degrees: T) -> Self {
        Self::from_mat3(Mat::<T, 3, 3>::from_rotation_x(degrees))
    }

    /// Right-handed rotation around the y axis by `degrees`.
    #[inline]
    pub fn from_rotation_y(degrees: T) -> Self {
        Self::from_mat3(Mat::<T, 3, 3>::from_rotation_y(degrees))
    }

    /// Right-handed rotation around the z axis by `degrees`.
    #[inline]
    pub fn from_rotation_z(degrees: T) -> Self {
        Self::from_mat3(Mat::<T, 3, 3>::from_rotation_z(degrees))
    }

    /// Translation by `translation`.
    pub fn from_translation(translation: Vec3<T>) -> Self {
        let mut m = Self::IDENTITY;
        m.cols[3] = translation.extend(T::ONE).to_array();
        m
    }

    /// A copy translated by `(x, y, z)` in its local frame, `self * T`.
    #[inline]
    pub fn translated(&self, x: T, y: T, z: T) -> Self {
        *self * Self::from_translation(Vec3::new(x, y, z))
    }

    /// Translate in place by `(x, y, z)` in the local frame.
    #[inline]
    pub fn translate(&mut self, x: T, y: T, z: T) {
        *self = self.translated(x, y, z);
    }

    /// Non-uniform scaling along the axes.
    #[inline]
    pub fn from_scale(scale: Vec3<T>) -> Self {
        Self::from_diagonal([scale.x, scale.y, scale.z, T::ONE])
    }

    /// A copy scaled along the local axes, `self * S`.
    #[inline]
    pub fn scaled(&self, scale: Vec3<T>) -> Self {
        *self * Self::from_scale(scale)
    }

    /// Scale along the local axes in place.
    #[inline]
    pub fn scale(&mut self, scale: Vec3<T>) {
        *self = self.scaled(scale);
    }

    /// Transform a point, with an implied `w = 1`.
    #[inline]
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        (*self * point.extend(T::ONE)).truncate()
    }

    /// Transform a direction, with an implied `w = 0`.
    #[inline]
    pub fn transform_vector(&self, vector: Vec3<T>) -> Vec3<T> {
        (*self * vector.extend(T::ZERO)).truncate()
    }

    /// The translation column.
    #[inline]
    pub fn position(&self) -> Vec3<T> {
        let [x, y, z, _] = self.cols[3];
        Vec3::new(x, y, z)
    }

    /// Local `-Z` mapped by the linear part; the viewing direction of a camera transform.
    #[inline]
    pub fn forward_vector(&self) -> Vec3<T> {
        -self.transform_vector(Vec3::UNIT_Z)
    }

    /// Local `+X` mapped by the linear part.
    #[inline]
    pub fn right_vector(&self) -> Vec3<T> {
        self.transform_vector(Vec3::UNIT_X)
    }

    /// Local `+Y` mapped by the linear part.
    #[inline]
    pub fn up_vector(&self) -> Vec3<T> {
        self.transform_vector(Vec3::UNIT_Y)
    }

    /// Right-handed view matrix of a camera at `eye` looking at `target`.
    ///
    /// Follows the `gluLookAt` convention: the camera looks down its local `-Z`
    /// with `up` projected onto its local `+Y`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `target == eye` or the viewing direction
    /// is parallel to `up`.
    pub fn look_at(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Result<Self, AlgebraError> {
        Self::look_at_direction(eye, target - eye, up)
    }

    /// Right-handed view matrix of a camera at `eye` looking along `direction`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `direction` is zero or parallel to `up`.
    pub fn look_at_direction(
        eye: Vec3<T>,
        direction: Vec3<T>,
        up: Vec3<T>,
    ) -> Result<Self, AlgebraError> {
        if direction.module_squared() == T::ZERO {
            return Err(super::rejected(AlgebraError::InvalidArgument(
                "look-at direction is zero".to_string(),
            )));
        }
        let f = direction.normalized();
        let s = f.cross(up.normalized());
        if s.module() <= T::epsilon() {
            return Err(super::rejected(AlgebraError::InvalidArgument(
                "look-at direction is parallel to the up vector".to_string(),
            )));
        }
        let s = s.normalized();
        let u = s.cross(f);

        Ok(Self::from_cols_array_2d([
            [s.x, u.x, -f.x, T::ZERO],
            [s.y, u.y, -f.y, T::ZERO],
            [s.z, u.z, -f.z, T::ZERO],
            [-s.dot(eye), -u.dot(eye), f.dot(eye), T::ONE],
        ]))
    }
}

impl_square_inverse!(4);
impl_rotations!(
    4,
    [
        (from_rotation_x, rotated_x, rotate_x),
        (from_rotation_y, rotated_y, rotate_y),
        (from_rotation_z, rotated_z, rotate_z),
    ]
);

impl<T: Real> std::ops::Mul<Vec4<T>> for Mat<T, 4, 4> {
    type Output = Vec4<T>;

    #[inline]
    fn mul(self, rhs: Vec4<T>) -> Self::Output {
        let v = rhs.to_array();
        Vec4::from_array(std::array::from_fn(|r| {
            (0..4).fold(T::ZERO, |acc, c| acc + self.cols[c][r] * v[c])
        }))
    }
}

// A `Vec3` operand is a point in homogeneous coordinates.
impl<T: Real> std::ops::Mul<Vec3<T>> for Mat<T, 4, 4> {
    type Output = Vec3<T>;

    #[inline]
    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.transform_point(rhs)
    }
}
