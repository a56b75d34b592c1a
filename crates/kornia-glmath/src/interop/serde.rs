use crate::{Mat, Real};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T, const R: usize, const C: usize> serde::Serialize for Mat<T, R, C>
where
    T: Real + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Mat", 3)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("rows", &R)?;
        state.serialize_field("cols", &C)?;
        state.end()
    }
}

impl<'de, T, const R: usize, const C: usize> serde::Deserialize<'de> for Mat<T, R, C>
where
    T: Real + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatData<T> {
            data: Vec<T>,
            rows: usize,
            cols: usize,
        }

        let MatData { data, rows, cols } = MatData::deserialize(deserializer)?;

        if rows != R || cols != C {
            return Err(serde::de::Error::custom(format!(
                "Invalid shape: expected {R}x{C}, got {rows}x{cols}"
            )));
        }
        if data.len() != R * C {
            return Err(serde::de::Error::invalid_length(
                data.len(),
                &format!("{} elements", R * C).as_str(),
            ));
        }

        Mat::from_slice(&data, 0).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2x3F64, Mat3F32, Mat4F32, Vec3F16, Vec3F32};

    #[test]
    fn test_serde_matrix() -> Result<(), Box<dyn std::error::Error>> {
        let m = Mat2x3F64::from_flat_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let serialized = serde_json::to_string(&m)?;
        assert_eq!(
            serialized,
            r#"{"data":[1.0,2.0,3.0,4.0,5.0,6.0],"rows":2,"cols":3}"#
        );
        let deserialized: Mat2x3F64 = serde_json::from_str(&serialized)?;
        assert_eq!(deserialized, m);
        Ok(())
    }

    #[test]
    fn test_serde_matrix_rejects_shape() -> Result<(), Box<dyn std::error::Error>> {
        let serialized = serde_json::to_string(&Mat4F32::IDENTITY)?;
        assert!(serde_json::from_str::<Mat3F32>(&serialized).is_err());

        let short = r#"{"data":[1.0,0.0,0.0],"rows":3,"cols":3}"#;
        assert!(serde_json::from_str::<Mat3F32>(short).is_err());
        Ok(())
    }

    #[test]
    fn test_serde_vector() -> Result<(), Box<dyn std::error::Error>> {
        let v = Vec3F32::new(1.0, -2.0, 0.5);
        let serialized = serde_json::to_string(&v)?;
        assert_eq!(serialized, r#"{"x":1.0,"y":-2.0,"z":0.5}"#);
        assert_eq!(serde_json::from_str::<Vec3F32>(&serialized)?, v);

        let h: Vec3F16 = v.cast();
        assert_eq!(serde_json::from_str::<Vec3F16>(&serde_json::to_string(&h)?)?, h);
        Ok(())
    }
}
