use kornia_glmath::{AlgebraError, Vec2, Vec3, Vec4};

macro_rules! kind_tests {
    ($($name:ident: $t:ty);+ $(;)?) => {
        $(
            mod $name {
                use super::*;

                type T = $t;

                fn v3() -> Vec3<T> {
                    Vec3::new(1 as T, 2 as T, 3 as T)
                }

                #[test]
                fn homogeneous_round_trip() {
                    let v = v3();
                    let h: Vec4<T> = v.into();
                    assert_eq!(h.w, 1 as T);
                    assert_eq!(Vec3::from(h), v);
                    assert_eq!(h.truncate(), v);

                    let p: Vec3<T> = Vec2::new(4 as T, 5 as T).into();
                    assert_eq!(p, Vec3::new(4 as T, 5 as T, 1 as T));
                    let q: Vec4<T> = Vec2::new(4 as T, 5 as T).into();
                    assert_eq!(q, Vec4::new(4 as T, 5 as T, 0 as T, 1 as T));
                }

                #[test]
                fn from_slice_offsets() -> Result<(), AlgebraError> {
                    let data: Vec<T> = (0..6).map(|i| i as T).collect();
                    for offset in 0..=2 {
                        let v = Vec4::<T>::from_slice(&data, offset)?;
                        assert_eq!(v.as_slice(), &data[offset..offset + 4]);
                    }
                    assert!(Vec4::<T>::from_slice(&data, 3).is_err_and(|e| e.is_argument_error()));
                    assert!(Vec2::<T>::from_slice(&data, 6).is_err());
                    assert!(Vec2::<T>::from_slice(&data, usize::MAX).is_err());
                    Ok(())
                }

                #[test]
                fn zero_normalizes_to_zero() {
                    let mut v = Vec4::<T>::ZERO;
                    v.normalize();
                    assert_eq!(v, Vec4::ZERO);
                    assert_eq!(Vec3::<T>::ZERO.normalized(), Vec3::ZERO);
                    assert_eq!(Vec2::<T>::ZERO.module(), 0.0);
                }

                #[test]
                fn min_max_single_pass() -> Result<(), AlgebraError> {
                    let values = [
                        Vec2::new(3 as T, 0 as T),
                        Vec2::new(1 as T, 7 as T),
                        Vec2::new(2 as T, 5 as T),
                    ];
                    let (lo, hi) = Vec2::min_max(&values)?;
                    assert_eq!(lo, Vec2::new(1 as T, 0 as T));
                    assert_eq!(hi, Vec2::new(3 as T, 7 as T));
                    assert_eq!(Vec2::min(&values)?, lo);
                    assert_eq!(Vec2::max(&values)?, hi);
                    assert_eq!(Vec2::<T>::min_max(&[]), Err(AlgebraError::EmptySequence));
                    Ok(())
                }

                #[test]
                fn dot_and_cross_accumulate_in_float() {
                    let a = v3();
                    let b = Vec3::new(4 as T, 5 as T, 6 as T);
                    assert_eq!(a * b, 32.0);
                    let c = a ^ b;
                    assert_eq!((c.x, c.y, c.z), (-3.0, 6.0, -3.0));
                    assert_eq!(v3().module_squared(), 14.0);
                }

                #[test]
                fn packed_layout() {
                    assert_eq!(std::mem::size_of::<Vec2<T>>(), 2 * std::mem::size_of::<T>());
                    assert_eq!(std::mem::size_of::<Vec3<T>>(), 3 * std::mem::size_of::<T>());
                    assert_eq!(std::mem::size_of::<Vec4<T>>(), 4 * std::mem::size_of::<T>());
                    assert_eq!(v3().as_bytes().len(), 3 * std::mem::size_of::<T>());
                }
            }
        )+
    };
}

kind_tests!(
    kind_i8: i8;
    kind_u8: u8;
    kind_i16: i16;
    kind_u16: u16;
    kind_i32: i32;
    kind_u32: u32;
    kind_f32: f32;
    kind_f64: f64;
);

mod kind_f16 {
    use super::*;
    use half::f16;

    #[test]
    fn homogeneous_round_trip() {
        let v = Vec3::new(f16::ONE, f16::from_f32(2.0), f16::from_f32(-0.5));
        let h = Vec4::from(v);
        assert_eq!(h.w, f16::ONE);
        assert_eq!(h.truncate(), v);
    }

    #[test]
    fn epsilon_boundary() {
        let zero = Vec4::<f16>::ZERO;
        for i in 0..4 {
            let mut v = zero;
            v[i] = f16::from_f32(0.5);
            assert!(!v.approx_eq(&zero, f16::from_f32(0.25)));
            assert!(v.approx_eq(&zero, f16::from_f32(0.5)));
        }
    }

    #[test]
    fn accumulates_in_f32() {
        let v = Vec2::splat(f16::from_f32(300.0));
        // 300^2 * 2 overflows f16 but not the f32 accumulator
        assert_eq!(v.module_squared(), 180_000.0f32);
    }
}

#[test]
fn integer_kinds_wrap() {
    assert_eq!(Vec2::new(i8::MAX, 0) + Vec2::new(1, 0), Vec2::new(i8::MIN, 0));
    assert_eq!(Vec3::new(0u16, 1, 2) - Vec3::splat(1), Vec3::new(u16::MAX, 0, 1));
    assert_eq!(Vec4::splat(u32::MAX) * 2, Vec4::splat(u32::MAX - 1));
    assert_eq!(-Vec2::new(i32::MIN, 5), Vec2::new(i32::MIN, -5));
}

#[test]
fn kind_casts_follow_as() {
    assert_eq!(Vec3::new(-1i32, 256, 7).cast::<u8>(), Vec3::new(255u8, 0, 7));
    assert_eq!(Vec2::new(3.99f32, -3.99).cast::<i16>(), Vec2::new(3i16, -3));
    assert_eq!(Vec2::new(u8::MAX, 1).cast::<i8>(), Vec2::new(-1i8, 1));
    assert_eq!(Vec4::new(1u8, 2, 3, 4).cast::<f64>(), Vec4::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn scale_by_wider_kinds_truncates() {
    assert_eq!(Vec3::new(10u8, 20, 30).scale_by(1.5f64), Vec3::new(15u8, 30, 45));
    assert_eq!(Vec2::new(100u8, 3).scale_by(3u32), Vec2::new(44u8, 9));
    assert_eq!(Vec2::new(7i16, -7).div_by(2.0f32), Vec2::new(3i16, -3));
}
