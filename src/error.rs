//! Error types for narray

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using narray's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in narray operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation that requires exact shapes
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}: axis {axis} has extents {lhs_extent} and {rhs_extent}")]
    BroadcastError {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
        /// Output axis on which the extents disagree
        axis: usize,
        /// Left extent on that axis
        lhs_extent: usize,
        /// Right extent on that axis
        rhs_extent: usize,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for array with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between a typed accessor and the array's element type
    #[error("DType mismatch: requested {requested}, array holds {actual}")]
    DTypeMismatch {
        /// The requested dtype
        requested: DType,
        /// The array's dtype
        actual: DType,
    },

    /// Division or remainder by zero in an integer-family or decimal operation
    #[error("Division by zero in '{op}' on dtype {dtype}")]
    DivisionByZero {
        /// The operation name
        op: &'static str,
        /// The result dtype the operation was computed in
        dtype: DType,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Array is not contiguous when contiguous memory is required
    #[error("Operation requires a contiguous array")]
    NotContiguous,
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create a division-by-zero error
    pub fn division_by_zero(op: &'static str, dtype: DType) -> Self {
        Self::DivisionByZero { op, dtype }
    }
}
