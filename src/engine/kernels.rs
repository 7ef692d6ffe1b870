//! Element-wise compute kernels
//!
//! Kernels are generic over `T: Element` and are monomorphized once per
//! result kind by the dispatch macro; the operator match happens once per
//! call, never per element. Three iteration paths cover every operand
//! combination:
//!
//! - **linear**: both operands flat-indexable — a plain indexed loop,
//!   fanned out across a rayon pool for large arrays (the operation is
//!   embarrassingly parallel; output chunks are disjoint);
//! - **mixed**: exactly one operand linear — the linear side advances a
//!   flat counter in lock-step with an odometer over the output shape that
//!   locates the strided side's elements;
//! - **strided**: neither linear — one odometer, both sides located by
//!   coordinate-to-offset dot products.
//!
//! The output buffer is always freshly allocated and hence always linear.

use crate::dtype::{Boolean, Element};
use crate::engine::iter::{element_offset, NdCoords};
use crate::error::{Error, Result};
use crate::ops::{BinaryOp, CompareOp, LogicOp};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Minimum element count before the linear path fans out to the rayon pool;
/// below this the dispatch overhead outweighs the work.
#[cfg(feature = "rayon")]
const PAR_MIN_LEN: usize = 4096;

/// One operand of an element-wise kernel: a typed view over its storage
/// buffer plus the broadcast-adjusted access pattern.
pub(crate) struct Operand<'a, T> {
    /// The operand's full storage buffer
    pub data: &'a [T],
    /// Broadcast-adjusted strides (0 on stretched axes)
    pub strides: &'a [isize],
    /// Starting element offset into `data`
    pub offset: usize,
    /// Whether elements can be read with a flat index matching iteration
    /// order (contiguous row-major at offset 0, no broadcast axes)
    pub linear: bool,
}

/// Apply `op` to a single pair of already-promoted scalars
pub(crate) fn apply_binary<T: Element>(op: BinaryOp, a: T, b: T) -> Result<T> {
    match op {
        BinaryOp::Add => Ok(a + b),
        BinaryOp::Sub => Ok(a - b),
        BinaryOp::Mul => Ok(a * b),
        BinaryOp::Div => a
            .checked_div(b)
            .ok_or_else(|| Error::division_by_zero(op.name(), T::DTYPE)),
        BinaryOp::Rem => a
            .checked_rem(b)
            .ok_or_else(|| Error::division_by_zero(op.name(), T::DTYPE)),
    }
}

/// Apply `op` to a single pair of already-promoted scalars
pub(crate) fn apply_compare<T: Element>(op: CompareOp, a: T, b: T) -> Boolean {
    Boolean::from(match op {
        CompareOp::Eq => a == b,
        CompareOp::Ne => a != b,
        CompareOp::Lt => a < b,
        CompareOp::Le => a <= b,
        CompareOp::Gt => a > b,
        CompareOp::Ge => a >= b,
    })
}

/// Apply `op` to a single pair of booleans
pub(crate) fn apply_logic(op: LogicOp, a: Boolean, b: Boolean) -> Boolean {
    Boolean::from(match op {
        LogicOp::And => a.as_bool() & b.as_bool(),
        LogicOp::Or => a.as_bool() | b.as_bool(),
        LogicOp::Xor => a.as_bool() ^ b.as_bool(),
    })
}

/// Run an arithmetic operator over broadcast operands into `out`
///
/// Division and remainder abort on the first zero divisor; the partial
/// output buffer is discarded by the caller.
pub(crate) fn run_binary<T: Element>(
    op: BinaryOp,
    lhs: &Operand<'_, T>,
    rhs: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [T],
) -> Result<()> {
    match op {
        BinaryOp::Add => {
            zip2(lhs, rhs, dims, out, |x, y| x + y);
            Ok(())
        }
        BinaryOp::Sub => {
            zip2(lhs, rhs, dims, out, |x, y| x - y);
            Ok(())
        }
        BinaryOp::Mul => {
            zip2(lhs, rhs, dims, out, |x, y| x * y);
            Ok(())
        }
        BinaryOp::Div => try_zip2(lhs, rhs, dims, out, |x, y| x.checked_div(y))
            .map_err(|_| Error::division_by_zero(op.name(), T::DTYPE)),
        BinaryOp::Rem => try_zip2(lhs, rhs, dims, out, |x, y| x.checked_rem(y))
            .map_err(|_| Error::division_by_zero(op.name(), T::DTYPE)),
    }
}

/// Run a comparison operator over broadcast operands into a boolean `out`
///
/// NaN compares false under every operator except `Ne`, matching IEEE
/// partial ordering.
pub(crate) fn run_compare<T: Element>(
    op: CompareOp,
    lhs: &Operand<'_, T>,
    rhs: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [Boolean],
) {
    match op {
        CompareOp::Eq => zip2(lhs, rhs, dims, out, |x, y| Boolean::from(x == y)),
        CompareOp::Ne => zip2(lhs, rhs, dims, out, |x, y| Boolean::from(x != y)),
        CompareOp::Lt => zip2(lhs, rhs, dims, out, |x, y| Boolean::from(x < y)),
        CompareOp::Le => zip2(lhs, rhs, dims, out, |x, y| Boolean::from(x <= y)),
        CompareOp::Gt => zip2(lhs, rhs, dims, out, |x, y| Boolean::from(x > y)),
        CompareOp::Ge => zip2(lhs, rhs, dims, out, |x, y| Boolean::from(x >= y)),
    }
}

/// Run a logical operator over boolean operands into `out`
pub(crate) fn run_logic(
    op: LogicOp,
    lhs: &Operand<'_, Boolean>,
    rhs: &Operand<'_, Boolean>,
    dims: &[usize],
    out: &mut [Boolean],
) {
    match op {
        LogicOp::And => zip2(lhs, rhs, dims, out, |x: Boolean, y: Boolean| {
            Boolean::from(x.as_bool() & y.as_bool())
        }),
        LogicOp::Or => zip2(lhs, rhs, dims, out, |x: Boolean, y: Boolean| {
            Boolean::from(x.as_bool() | y.as_bool())
        }),
        LogicOp::Xor => zip2(lhs, rhs, dims, out, |x: Boolean, y: Boolean| {
            Boolean::from(x.as_bool() ^ y.as_bool())
        }),
    }
}

/// Run a unary map over one operand into `out`
pub(crate) fn run_map1<T: Element, O: Element, F>(
    src: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) where
    F: Fn(T) -> O + Sync + Send,
{
    if out.is_empty() {
        return;
    }

    if src.linear {
        map1_linear(src.data, out, f);
        return;
    }

    let mut coords = NdCoords::new(dims);
    for o in out.iter_mut() {
        *o = f(src.data[element_offset(coords.current(), src.strides, src.offset)]);
        coords.advance();
    }
}

fn map1_linear<T: Element, O: Element, F>(src: &[T], out: &mut [O], f: F)
where
    F: Fn(T) -> O + Sync + Send,
{
    #[cfg(feature = "rayon")]
    if out.len() >= PAR_MIN_LEN {
        out.par_iter_mut()
            .enumerate()
            .with_min_len(PAR_MIN_LEN)
            .for_each(|(i, o)| *o = f(src[i]));
        return;
    }

    for (i, o) in out.iter_mut().enumerate() {
        *o = f(src[i]);
    }
}

/// Infallible pairwise map, selecting the iteration path from operand
/// linearity
fn zip2<T: Element, O: Element, F>(
    lhs: &Operand<'_, T>,
    rhs: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) where
    F: Fn(T, T) -> O + Sync + Send,
{
    if out.is_empty() {
        return;
    }

    match (lhs.linear, rhs.linear) {
        (true, true) => zip2_linear(lhs.data, rhs.data, out, f),
        (true, false) => zip2_mixed(lhs.data, rhs, dims, out, f),
        (false, true) => zip2_mixed(rhs.data, lhs, dims, out, |lin, st| f(st, lin)),
        (false, false) => zip2_strided(lhs, rhs, dims, out, f),
    }
}

/// Fallible pairwise map (`Err` on the first `None` from `f`)
fn try_zip2<T: Element, O: Element, F>(
    lhs: &Operand<'_, T>,
    rhs: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) -> std::result::Result<(), ()>
where
    F: Fn(T, T) -> Option<O> + Sync + Send,
{
    if out.is_empty() {
        return Ok(());
    }

    match (lhs.linear, rhs.linear) {
        (true, true) => try_zip2_linear(lhs.data, rhs.data, out, f),
        (true, false) => try_zip2_mixed(lhs.data, rhs, dims, out, f),
        (false, true) => try_zip2_mixed(rhs.data, lhs, dims, out, |lin, st| f(st, lin)),
        (false, false) => try_zip2_strided(lhs, rhs, dims, out, f),
    }
}

fn zip2_linear<T: Element, O: Element, F>(a: &[T], b: &[T], out: &mut [O], f: F)
where
    F: Fn(T, T) -> O + Sync + Send,
{
    #[cfg(feature = "rayon")]
    if out.len() >= PAR_MIN_LEN {
        out.par_iter_mut()
            .enumerate()
            .with_min_len(PAR_MIN_LEN)
            .for_each(|(i, o)| *o = f(a[i], b[i]));
        return;
    }

    for (i, o) in out.iter_mut().enumerate() {
        *o = f(a[i], b[i]);
    }
}

fn try_zip2_linear<T: Element, O: Element, F>(
    a: &[T],
    b: &[T],
    out: &mut [O],
    f: F,
) -> std::result::Result<(), ()>
where
    F: Fn(T, T) -> Option<O> + Sync + Send,
{
    #[cfg(feature = "rayon")]
    if out.len() >= PAR_MIN_LEN {
        return out
            .par_iter_mut()
            .enumerate()
            .with_min_len(PAR_MIN_LEN)
            .try_for_each(|(i, o)| match f(a[i], b[i]) {
                Some(v) => {
                    *o = v;
                    Ok(())
                }
                None => Err(()),
            });
    }

    for (i, o) in out.iter_mut().enumerate() {
        *o = f(a[i], b[i]).ok_or(())?;
    }
    Ok(())
}

/// One linear operand read by flat counter, one strided operand located per
/// output coordinate. `f` receives `(linear value, strided value)`.
fn zip2_mixed<T: Element, O: Element, F>(
    lin: &[T],
    st: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) where
    F: Fn(T, T) -> O,
{
    let mut coords = NdCoords::new(dims);
    for (i, o) in out.iter_mut().enumerate() {
        let sv = st.data[element_offset(coords.current(), st.strides, st.offset)];
        *o = f(lin[i], sv);
        coords.advance();
    }
}

fn try_zip2_mixed<T: Element, O: Element, F>(
    lin: &[T],
    st: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) -> std::result::Result<(), ()>
where
    F: Fn(T, T) -> Option<O>,
{
    let mut coords = NdCoords::new(dims);
    for (i, o) in out.iter_mut().enumerate() {
        let sv = st.data[element_offset(coords.current(), st.strides, st.offset)];
        *o = f(lin[i], sv).ok_or(())?;
        coords.advance();
    }
    Ok(())
}

/// Both operands located per output coordinate; output written via the flat
/// counter.
fn zip2_strided<T: Element, O: Element, F>(
    lhs: &Operand<'_, T>,
    rhs: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) where
    F: Fn(T, T) -> O,
{
    let mut coords = NdCoords::new(dims);
    for o in out.iter_mut() {
        let c = coords.current();
        let a = lhs.data[element_offset(c, lhs.strides, lhs.offset)];
        let b = rhs.data[element_offset(c, rhs.strides, rhs.offset)];
        *o = f(a, b);
        coords.advance();
    }
}

fn try_zip2_strided<T: Element, O: Element, F>(
    lhs: &Operand<'_, T>,
    rhs: &Operand<'_, T>,
    dims: &[usize],
    out: &mut [O],
    f: F,
) -> std::result::Result<(), ()>
where
    F: Fn(T, T) -> Option<O>,
{
    let mut coords = NdCoords::new(dims);
    for o in out.iter_mut() {
        let c = coords.current();
        let a = lhs.data[element_offset(c, lhs.strides, lhs.offset)];
        let b = rhs.data[element_offset(c, rhs.strides, rhs.offset)];
        *o = f(a, b).ok_or(())?;
        coords.advance();
    }
    Ok(())
}
