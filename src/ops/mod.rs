//! Public operator surface
//!
//! One entry point per operator; the only caller-visible polymorphism is
//! over the operands' runtime dtypes. Every function allocates and returns a
//! new array — operands are never mutated. Result kinds follow the
//! promotion lattice in [`crate::dtype::promote`]; comparisons and logical
//! operators produce boolean arrays.

mod dispatch;
mod operators;

use crate::array::NdArray;
use crate::dtype::DType;
use crate::engine;
use crate::error::Result;

/// Arithmetic operator selector for the dispatch engine
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Addition (logical OR on boolean pairs)
    Add,
    /// Subtraction (logical XOR on boolean pairs)
    Sub,
    /// Multiplication (logical AND on boolean pairs)
    Mul,
    /// Division, with the native semantics of the result kind
    Div,
    /// Remainder, with the native semantics of the result kind
    Rem,
}

impl BinaryOp {
    /// Operation name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Rem => "modulo",
        }
    }
}

/// Comparison operator selector
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal
    Eq,
    /// Not equal
    Ne,
    /// Less than
    Lt,
    /// Less than or equal
    Le,
    /// Greater than
    Gt,
    /// Greater than or equal
    Ge,
}

/// Logical operator selector
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicOp {
    /// Logical AND
    And,
    /// Logical OR
    Or,
    /// Logical XOR
    Xor,
}

/// Element-wise addition with broadcasting and numeric promotion
///
/// # Example
///
/// ```
/// use narray::{NdArray, ops};
///
/// let a = NdArray::from_slice(&[1i32, 2, 3], &[3, 1]).unwrap();
/// let b = NdArray::from_slice(&[10i32, 20], &[1, 2]).unwrap();
/// let c = ops::add(&a, &b).unwrap();
/// assert_eq!(c.shape(), &[3, 2]);
/// assert_eq!(c.to_vec::<i32>().unwrap(), vec![11, 21, 12, 22, 13, 23]);
/// ```
pub fn add(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::binary_op(BinaryOp::Add, lhs, rhs)
}

/// Element-wise subtraction with broadcasting and numeric promotion
pub fn subtract(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::binary_op(BinaryOp::Sub, lhs, rhs)
}

/// Element-wise multiplication with broadcasting and numeric promotion
pub fn multiply(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::binary_op(BinaryOp::Mul, lhs, rhs)
}

/// Element-wise division with broadcasting and numeric promotion
///
/// Division keeps the native semantics of the result kind: integer division
/// truncates and fails on zero divisors, floating-point follows IEEE
/// inf/NaN rules.
pub fn divide(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::binary_op(BinaryOp::Div, lhs, rhs)
}

/// Element-wise remainder with broadcasting and numeric promotion
pub fn modulo(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::binary_op(BinaryOp::Rem, lhs, rhs)
}

/// Element-wise `==`, computed in the promoted kind; boolean result
pub fn equal(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::compare_op(CompareOp::Eq, lhs, rhs)
}

/// Element-wise `!=`; boolean result
pub fn not_equal(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::compare_op(CompareOp::Ne, lhs, rhs)
}

/// Element-wise `<`; boolean result
pub fn less(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::compare_op(CompareOp::Lt, lhs, rhs)
}

/// Element-wise `<=`; boolean result
pub fn less_equal(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::compare_op(CompareOp::Le, lhs, rhs)
}

/// Element-wise `>`; boolean result
pub fn greater(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::compare_op(CompareOp::Gt, lhs, rhs)
}

/// Element-wise `>=`; boolean result
pub fn greater_equal(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::compare_op(CompareOp::Ge, lhs, rhs)
}

/// Element-wise logical AND; operands coerced to boolean by nonzero test
pub fn logical_and(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::logical_op(LogicOp::And, lhs, rhs)
}

/// Element-wise logical OR; operands coerced to boolean by nonzero test
pub fn logical_or(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::logical_op(LogicOp::Or, lhs, rhs)
}

/// Element-wise logical XOR; operands coerced to boolean by nonzero test
pub fn logical_xor(lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    engine::logical_op(LogicOp::Xor, lhs, rhs)
}

/// Element-wise negation; logical NOT on booleans
///
/// Fails with `UnsupportedDType` for unsigned integer and char arrays.
pub fn negate(arr: &NdArray) -> Result<NdArray> {
    engine::negate(arr)
}

/// Convert an array to another element kind
///
/// Conversion policy (saturation, truncation, nonzero tests) is documented
/// in [`crate::dtype::CastFrom`].
pub fn cast(arr: &NdArray, dtype: DType) -> Result<NdArray> {
    engine::cast(arr, dtype)
}
