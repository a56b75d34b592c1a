use thiserror::Error;

/// An error type for the vector and matrix operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// The source slice has fewer elements than the type needs after the start offset.
    #[error("Array too short: expected {required} elements from offset {offset}, but the array has {len}")]
    ArrayTooShort {
        /// Number of elements the type needs.
        required: usize,
        /// Start offset into the array.
        offset: usize,
        /// Length of the array.
        len: usize,
    },

    /// A batch reduction was asked to reduce nothing.
    #[error("Empty sequence: at least one element is required")]
    EmptySequence,

    /// Degenerate arguments, e.g. projection bounds collapsing to a plane.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument outside its valid interval.
    #[error("Argument `{name}` out of range: {value} ({reason})")]
    ArgumentOutOfRange {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// The constraint it violates.
        reason: &'static str,
    },

    /// The matrix has no inverse.
    #[error("Singular matrix: the determinant is zero")]
    SingularMatrix,

    /// Element access beyond the matrix shape.
    #[error("Index [{col}, {row}] out of range for a matrix with {cols} columns and {rows} rows")]
    IndexOutOfRange {
        /// The requested column.
        col: usize,
        /// The requested row.
        row: usize,
        /// Number of columns of the matrix.
        cols: usize,
        /// Number of rows of the matrix.
        rows: usize,
    },
}

impl AlgebraError {
    /// Whether the error was caused by an invalid argument.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::ArrayTooShort { .. }
                | Self::EmptySequence
                | Self::InvalidArgument(_)
                | Self::ArgumentOutOfRange { .. }
        )
    }

    /// Whether the operation is undefined for an otherwise valid receiver.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::SingularMatrix)
    }

    /// Whether the error was caused by indexing outside the matrix shape.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        let err = AlgebraError::ArrayTooShort {
            required: 4,
            offset: 1,
            len: 3,
        };
        assert!(err.is_argument_error());
        assert!(!err.is_invalid_operation());

        let err = AlgebraError::ArgumentOutOfRange {
            name: "near",
            value: 0.0,
            reason: "must be positive",
        };
        assert!(err.is_argument_error());

        assert!(AlgebraError::SingularMatrix.is_invalid_operation());
        assert!(!AlgebraError::SingularMatrix.is_argument_error());

        let err = AlgebraError::IndexOutOfRange {
            col: 2,
            row: 0,
            cols: 2,
            rows: 2,
        };
        assert!(err.is_index_out_of_range());
        assert!(!err.is_argument_error());
    }

    #[test]
    fn test_error_display() {
        let err = AlgebraError::IndexOutOfRange {
            col: 4,
            row: 1,
            cols: 4,
            rows: 3,
        };
        assert_eq!(
            err.to_string(),
            "Index [4, 1] out of range for a matrix with 4 columns and 3 rows"
        );
    }
}
