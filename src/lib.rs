//! # narray
//!
//! **Dtype-polymorphic n-dimensional array engine for Rust.**
//!
//! narray provides n-dimensional arrays with a runtime element type and the
//! machinery every element-wise binary operator needs: NumPy-style shape
//! broadcasting, a total numeric promotion lattice, and strided iteration
//! that reads contiguous, sliced, and broadcast operands through one
//! uniform coordinate-to-offset mapping.
//!
//! ## Highlights
//!
//! - **Runtime dtypes**: bool, u8, i16/u16, i32/u32, i64/u64, char, f32,
//!   f64, and 128-bit exact decimal in one array type
//! - **Broadcasting**: size-1 axes stretch with stride 0 — no data is
//!   copied to align shapes
//! - **Promotion**: mixed-kind operands resolve to a common result kind via
//!   a fixed precedence lattice, totally defined over every dtype pair
//! - **One dispatch per call**: operators monomorphize per result kind; the
//!   per-element loops carry no type switches
//! - **Parallel fast path**: contiguous operands run chunked across a rayon
//!   pool (default-on `rayon` feature)
//!
//! ## Quick Start
//!
//! ```
//! use narray::{NdArray, ops};
//!
//! let a = NdArray::from_slice(&[1i32, 2, 3, 4], &[2, 2]).unwrap();
//! let b = NdArray::scalar(10i64);
//!
//! // i32 x i64 promotes to i64; the scalar broadcasts over the 2x2 array
//! let c = ops::add(&a, &b).unwrap();
//! assert_eq!(c.to_vec::<i64>().unwrap(), vec![11, 12, 13, 14]);
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): multi-threaded kernels for large contiguous operands

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod dtype;
pub mod error;
pub mod ops;

pub(crate) mod engine;

pub use array::NdArray;
pub use dtype::DType;
pub use error::{Error, Result};

// Decimal arrays are constructed from `rust_decimal` values; re-exported so
// downstream code can name them without a separate dependency.
pub use rust_decimal;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::{Layout, NdArray, Storage};
    pub use crate::dtype::{promote, Boolean, CharCode, DType, Dec128, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops;
}
