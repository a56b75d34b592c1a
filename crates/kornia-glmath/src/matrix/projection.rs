//! Projection matrices.
//!
//! All projections follow the OpenGL clip space convention: a right-handed eye
//! space looking down `-Z`, mapped to normalized device coordinates in
//! `[-1, 1]` on every axis.

use super::rejected;
use crate::{deg_to_rad, AlgebraError, Mat, Real};

fn check_distinct<T: Real>(a: T, b: T, planes: &str) -> Result<(), AlgebraError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(rejected(AlgebraError::InvalidArgument(format!(
            "{planes} planes must be finite, got {a} and {b}"
        ))));
    }
    if a == b {
        return Err(rejected(AlgebraError::InvalidArgument(format!(
            "{planes} planes coincide at {a}"
        ))));
    }
    Ok(())
}

fn out_of_range<T: Real>(name: &'static str, value: T, reason: &'static str) -> AlgebraError {
    rejected(AlgebraError::ArgumentOutOfRange {
        name,
        value: value.as_f64(),
        reason,
    })
}

impl<T: Real> Mat<T, 4, 4> {
    /// Orthographic projection of the box bounded by the given planes.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `left == right`, `bottom == top` or
    /// `near == far`, or if any bound is not finite.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self, AlgebraError> {
        check_distinct(left, right, "left and right")?;
        check_distinct(bottom, top, "bottom and top")?;
        check_distinct(near, far, "near and far")?;

        let two = T::ONE + T::ONE;
        let (w, h, d) = (right - left, top - bottom, far - near);
        Ok(Self::from_cols_array_2d([
            [two / w, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two / h, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, -two / d, T::ZERO],
            [-(right + left) / w, -(top + bottom) / h, -(far + near) / d, T::ONE],
        ]))
    }

    /// Orthographic projection for 2D drawing, with the depth range fixed to `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `left == right` or `bottom == top`, or if
    /// any bound is not finite.
    pub fn ortho_2d(left: T, right: T, bottom: T, top: T) -> Result<Self, AlgebraError> {
        Self::ortho(left, right, bottom, top, -T::ONE, T::ONE)
    }

    /// Perspective projection of the frustum whose near plane spans the given bounds.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `left == right`, `bottom == top` or
    /// `near == far`, or if any bound is not finite.
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Result<Self, AlgebraError> {
        check_distinct(left, right, "left and right")?;
        check_distinct(bottom, top, "bottom and top")?;
        check_distinct(near, far, "near and far")?;
        Ok(Self::frustum_unchecked(left, right, bottom, top, near, far))
    }

    /// Symmetric perspective projection.
    ///
    /// `fov_y` is the vertical field of view in degrees and `aspect` the ratio of
    /// width to height.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ArgumentOutOfRange`] if `fov_y` is not inside `(0, 180)`, if
    /// `aspect <= 0`, if `near <= 0` or if `far <= near`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T) -> Result<Self, AlgebraError> {
        let half_turn = T::from_f64_cast(180.0);
        if !(fov_y > T::ZERO && fov_y < half_turn) {
            return Err(out_of_range("fov_y", fov_y, "must be inside (0, 180) degrees"));
        }
        if !(aspect > T::ZERO) {
            return Err(out_of_range("aspect", aspect, "must be positive"));
        }
        if !(near > T::ZERO) {
            return Err(out_of_range("near", near, "must be positive"));
        }
        if !(far > near) {
            return Err(out_of_range("far", far, "must be greater than near"));
        }

        let two = T::ONE + T::ONE;
        let f = T::ONE / (deg_to_rad(fov_y) / two).tan();
        Ok(Self::from_cols_array_2d([
            [f / aspect, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, f, T::ZERO, T::ZERO],
            [T::ZERO, T::ZERO, (far + near) / (near - far), -T::ONE],
            [T::ZERO, T::ZERO, two * far * near / (near - far), T::ZERO],
        ]))
    }

    /// Asymmetric perspective projection from the near plane bounds.
    ///
    /// Unlike [`perspective`](Self::perspective) the depth range is not required to
    /// be ordered: `near > far` yields a depth-reversed projection.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `left == right`, `bottom == top` or
    /// `near == far`, or if any bound is not finite.
    pub fn perspective_off_center(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Result<Self, AlgebraError> {
        check_distinct(left, right, "left and right")?;
        check_distinct(bottom, top, "bottom and top")?;
        check_distinct(near, far, "near and far")?;
        Ok(Self::frustum_unchecked(left, right, bottom, top, near, far))
    }

    fn frustum_unchecked(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let (w, h, d) = (right - left, top - bottom, far - near);
        Self::from_cols_array_2d([
            [two * near / w, T::ZERO, T::ZERO, T::ZERO],
            [T::ZERO, two * near / h, T::ZERO, T::ZERO],
            [(right + left) / w, (top + bottom) / h, -(far + near) / d, -T::ONE],
            [T::ZERO, T::ZERO, -two * far * near / d, T::ZERO],
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{AlgebraError, Mat4F32, Mat4F64, Vec3F64, Vec4F64};
    use approx::assert_relative_eq;

    fn project(m: &Mat4F64, p: Vec3F64) -> Vec3F64 {
        let clip = *m * Vec4F64::from(p);
        clip.truncate() * (1.0 / clip.w)
    }

    #[test]
    fn test_ortho() -> Result<(), AlgebraError> {
        let m = Mat4F64::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0)?;
        assert_eq!(m, Mat4F64::from_diagonal([1.0, 1.0, -1.0, 1.0]));

        let m = Mat4F64::ortho(0.0, 800.0, 0.0, 600.0, 0.1, 100.0)?;
        assert_relative_eq!(
            project(&m, Vec3F64::new(800.0, 600.0, -100.0)),
            Vec3F64::new(1.0, 1.0, 1.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            project(&m, Vec3F64::new(0.0, 0.0, -0.1)),
            Vec3F64::new(-1.0, -1.0, -1.0),
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_ortho_2d() -> Result<(), AlgebraError> {
        let m = Mat4F32::ortho_2d(0.0, 4.0, 0.0, 2.0)?;
        assert_eq!(m, Mat4F32::ortho(0.0, 4.0, 0.0, 2.0, -1.0, 1.0)?);
        assert!(Mat4F32::ortho_2d(1.0, 1.0, 0.0, 2.0).is_err());
        assert!(Mat4F32::ortho_2d(0.0, 1.0, 2.0, 2.0).is_err());
        Ok(())
    }

    #[test]
    fn test_frustum() -> Result<(), AlgebraError> {
        let m = Mat4F64::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0)?;
        assert_relative_eq!(
            project(&m, Vec3F64::new(0.0, 0.0, -1.0)),
            Vec3F64::new(0.0, 0.0, -1.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            project(&m, Vec3F64::new(10.0, -10.0, -10.0)),
            Vec3F64::new(1.0, -1.0, 1.0),
            epsilon = 1e-12
        );
        Ok(())
    }

    #[test]
    fn test_perspective_matches_frustum() -> Result<(), AlgebraError> {
        let p = Mat4F64::perspective(90.0, 1.0, 1.0, 10.0)?;
        let f = Mat4F64::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 10.0)?;
        assert_relative_eq!(p, f, epsilon = 1e-12);

        let p = Mat4F64::perspective(90.0, 2.0, 1.0, 10.0)?;
        let f = Mat4F64::perspective_off_center(-2.0, 2.0, -1.0, 1.0, 1.0, 10.0)?;
        assert_relative_eq!(p, f, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_perspective_rejects() {
        let reject = |fov: f32, aspect: f32, near: f32, far: f32| {
            Mat4F32::perspective(fov, aspect, near, far).is_err_and(|e| e.is_argument_error())
        };
        assert!(reject(0.0, 1.0, 0.1, 10.0));
        assert!(reject(180.0, 1.0, 0.1, 10.0));
        assert!(reject(-30.0, 1.0, 0.1, 10.0));
        assert!(reject(f32::NAN, 1.0, 0.1, 10.0));
        assert!(reject(60.0, 0.0, 0.1, 10.0));
        assert!(reject(60.0, 1.0, 0.0, 10.0));
        assert!(reject(60.0, 1.0, -1.0, 10.0));
        assert!(reject(60.0, 1.0, 1.0, 1.0));
        assert!(reject(60.0, 1.0, 10.0, 1.0));
        assert!(Mat4F32::perspective(60.0, 1.5, 0.1, 100.0).is_ok());

        assert_eq!(
            Mat4F64::perspective(60.0, 1.0, 0.0, 10.0),
            Err(AlgebraError::ArgumentOutOfRange {
                name: "near",
                value: 0.0,
                reason: "must be positive"
            })
        );
    }

    #[test]
    fn test_degenerate_planes() {
        assert!(Mat4F64::ortho(0.0, 0.0, -1.0, 1.0, -1.0, 1.0).is_err());
        assert!(Mat4F64::ortho(-1.0, 1.0, 1.0, 1.0, -1.0, 1.0).is_err());
        assert!(Mat4F64::ortho(-1.0, 1.0, -1.0, 1.0, 1.0, 1.0).is_err());
        assert!(Mat4F64::frustum(0.0, 0.0, -1.0, 1.0, 1.0, 10.0).is_err());
        assert!(Mat4F64::frustum(-1.0, 1.0, 0.5, 0.5, 1.0, 10.0).is_err());
        assert!(Mat4F64::frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 2.0).is_err());
        assert!(Mat4F64::perspective_off_center(3.0, 3.0, -1.0, 1.0, 1.0, 10.0).is_err());
        assert!(Mat4F64::perspective_off_center(-1.0, 1.0, 0.0, 0.0, 1.0, 10.0).is_err());
        assert!(Mat4F64::perspective_off_center(-1.0, 1.0, -1.0, 1.0, 5.0, 5.0).is_err());
        assert!(matches!(
            Mat4F64::frustum(0.0, 0.0, -1.0, 1.0, 1.0, 10.0),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_non_finite_planes() {
        let nan = f32::NAN;
        let inf = f32::INFINITY;
        let invalid = |r: Result<Mat4F32, AlgebraError>| {
            matches!(r, Err(AlgebraError::InvalidArgument(_)))
        };
        assert!(invalid(Mat4F32::ortho(nan, nan, -1.0, 1.0, -1.0, 1.0)));
        assert!(invalid(Mat4F32::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, inf)));
        assert!(invalid(Mat4F32::ortho_2d(-1.0, 1.0, nan, 1.0)));
        assert!(invalid(Mat4F32::frustum(-1.0, 1.0, -1.0, 1.0, nan, 10.0)));
        assert!(invalid(Mat4F32::frustum(-inf, 1.0, -1.0, 1.0, 1.0, 10.0)));
        assert!(invalid(Mat4F32::perspective_off_center(-1.0, 1.0, -1.0, nan, 1.0, 10.0)));
        assert!(invalid(Mat4F32::perspective_off_center(-1.0, 1.0, -1.0, 1.0, 1.0, nan)));
    }

    #[test]
    fn test_off_center_accepts_reversed_depth() {
        assert!(Mat4F64::perspective_off_center(-1.0, 1.0, -1.0, 1.0, 10.0, 1.0).is_ok());
    }
}
