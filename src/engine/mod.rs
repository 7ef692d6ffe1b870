//! Element-wise dispatch engine
//!
//! The engine resolves each binary call in four steps: promote the operand
//! kinds to the result kind, take the scalar fast path when both operands
//! are rank-0, otherwise broadcast the layouts, convert operand storage to
//! the result kind, and run the kernel selected by operand linearity. Each
//! call is a single stateless transaction: inputs are never mutated, and on
//! error no partial output escapes.

pub(crate) mod broadcast;
pub(crate) mod iter;
pub(crate) mod kernels;

use crate::array::{Layout, NdArray, Storage};
use crate::dispatch_dtype;
use crate::dtype::{promote, Boolean, CastFrom, DType, Element};
use crate::error::Result;
use crate::ops::{BinaryOp, CompareOp, LogicOp};
use self::broadcast::broadcast_layouts;
use self::kernels::Operand;

/// Arithmetic operator entry point: `lhs op rhs` with numeric promotion and
/// broadcasting
pub(crate) fn binary_op(op: BinaryOp, lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    let dtype = promote(lhs.dtype(), rhs.dtype());

    if lhs.is_scalar() && rhs.is_scalar() {
        let l = cast(lhs, dtype)?;
        let r = cast(rhs, dtype)?;
        return dispatch_dtype!(dtype, T => {
            let a = l.scalar_value::<T>()?;
            let b = r.scalar_value::<T>()?;
            Ok(NdArray::scalar(kernels::apply_binary(op, a, b)?))
        });
    }

    let (l_layout, r_layout) = broadcast_layouts(lhs.layout(), rhs.layout())?;
    let l_cast = cast(lhs, dtype)?;
    let r_cast = cast(rhs, dtype)?;

    let out_layout = Layout::contiguous(l_layout.shape());
    let mut out_storage = Storage::zeroed(out_layout.elem_count(), dtype);

    dispatch_dtype!(dtype, T => {
        let a = operand::<T>(&l_cast, &l_layout)?;
        let b = operand::<T>(&r_cast, &r_layout)?;
        let out = out_storage.as_mut_slice::<T>();
        kernels::run_binary(op, &a, &b, l_layout.shape(), out)?;
    });

    Ok(NdArray::from_parts(out_storage, out_layout))
}

/// Comparison operator entry point: computed in the promoted kind, boolean
/// result
pub(crate) fn compare_op(op: CompareOp, lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    let compute = promote(lhs.dtype(), rhs.dtype());

    if lhs.is_scalar() && rhs.is_scalar() {
        let l = cast(lhs, compute)?;
        let r = cast(rhs, compute)?;
        return dispatch_dtype!(compute, T => {
            let a = l.scalar_value::<T>()?;
            let b = r.scalar_value::<T>()?;
            Ok(NdArray::scalar(kernels::apply_compare(op, a, b)))
        });
    }

    let (l_layout, r_layout) = broadcast_layouts(lhs.layout(), rhs.layout())?;
    let l_cast = cast(lhs, compute)?;
    let r_cast = cast(rhs, compute)?;

    let out_layout = Layout::contiguous(l_layout.shape());
    let mut out_storage = Storage::zeroed(out_layout.elem_count(), DType::Bool);

    dispatch_dtype!(compute, T => {
        let a = operand::<T>(&l_cast, &l_layout)?;
        let b = operand::<T>(&r_cast, &r_layout)?;
        let out = out_storage.as_mut_slice::<Boolean>();
        kernels::run_compare(op, &a, &b, l_layout.shape(), out);
    });

    Ok(NdArray::from_parts(out_storage, out_layout))
}

/// Logical operator entry point: operands coerced to boolean by nonzero
/// test, boolean result
pub(crate) fn logical_op(op: LogicOp, lhs: &NdArray, rhs: &NdArray) -> Result<NdArray> {
    let l_bool = cast(lhs, DType::Bool)?;
    let r_bool = cast(rhs, DType::Bool)?;

    if lhs.is_scalar() && rhs.is_scalar() {
        let a = l_bool.scalar_value::<Boolean>()?;
        let b = r_bool.scalar_value::<Boolean>()?;
        return Ok(NdArray::scalar(kernels::apply_logic(op, a, b)));
    }

    let (l_layout, r_layout) = broadcast_layouts(lhs.layout(), rhs.layout())?;
    let out_layout = Layout::contiguous(l_layout.shape());
    let mut out_storage = Storage::zeroed(out_layout.elem_count(), DType::Bool);

    let a = operand::<Boolean>(&l_bool, &l_layout)?;
    let b = operand::<Boolean>(&r_bool, &r_layout)?;
    let out = out_storage.as_mut_slice::<Boolean>();
    kernels::run_logic(op, &a, &b, l_layout.shape(), out);

    Ok(NdArray::from_parts(out_storage, out_layout))
}

/// Element-wise negation. Logical NOT on booleans; rejected for unsigned
/// and char dtypes, whose kinds cannot represent the result.
pub(crate) fn negate(arr: &NdArray) -> Result<NdArray> {
    let dtype = arr.dtype();
    if dtype.is_unsigned_int() || dtype.is_char() {
        return Err(crate::error::Error::unsupported_dtype(dtype, "negate"));
    }

    let out_layout = Layout::contiguous(arr.shape());
    let mut out_storage = Storage::zeroed(arr.numel(), dtype);

    dispatch_dtype!(dtype, T => {
        let src = operand::<T>(arr, arr.layout())?;
        let out = out_storage.as_mut_slice::<T>();
        kernels::run_map1(&src, arr.shape(), out, |x: T| x.neg());
    });

    Ok(NdArray::from_parts(out_storage, out_layout))
}

/// Convert an array to another element kind
///
/// The whole storage buffer is converted under the policy in
/// [`crate::dtype::CastFrom`]; the view layout (including stride-0 broadcast
/// axes) is preserved, so casting a view never materializes it.
pub(crate) fn cast(arr: &NdArray, dtype: DType) -> Result<NdArray> {
    if arr.dtype() == dtype {
        return Ok(arr.clone());
    }

    let len = arr.storage().len();
    let mut out_storage = Storage::zeroed(len, dtype);

    dispatch_dtype!(arr.dtype(), S => {
        dispatch_dtype!(dtype, D => {
            let src = arr.storage().as_slice::<S>()?;
            let out = out_storage.as_mut_slice::<D>();
            for (o, &s) in out.iter_mut().zip(src.iter()) {
                *o = D::cast_from(s);
            }
        });
    });

    Ok(NdArray::from_parts(out_storage, arr.layout().clone()))
}

/// Build a kernel operand for `arr`'s storage under a broadcast-adjusted
/// layout. Linearity is the dispatch engine's path test: contiguous
/// row-major at offset 0 means the operand can be walked with the flat
/// output index.
fn operand<'a, T: Element>(arr: &'a NdArray, layout: &'a Layout) -> Result<Operand<'a, T>> {
    Ok(Operand {
        data: arr.storage().as_slice::<T>()?,
        strides: layout.strides(),
        offset: layout.offset(),
        linear: layout.is_contiguous(),
    })
}
