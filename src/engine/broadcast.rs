//! Pairwise shape broadcasting
//!
//! Given the layouts of two operands, produces a pair of broadcast-adjusted
//! layouts of identical rank and extents: missing leading axes and size-1
//! axes are stretched with stride 0 so the same coordinate walk reads
//! correctly from both operands. The canonical output shape (the elementwise
//! max of the extents, with natural strides) is what the destination array
//! is allocated with; it is never itself broadcast.

use crate::array::{Layout, Shape, Strides};
use crate::error::{Error, Result};
use smallvec::SmallVec;

/// Resolve the shared broadcast shape of two extent vectors
///
/// Axes are aligned right-to-left; the lower-rank shape is conceptually
/// left-padded with size-1 axes. Per axis the extents must be equal or one
/// of them must be 1. Fails with `BroadcastError` naming the offending axis.
pub(crate) fn broadcast_shapes(lhs: &[usize], rhs: &[usize]) -> Result<Shape> {
    let nd = lhs.len().max(rhs.len());
    let mut out: Shape = SmallVec::from_elem(1, nd);

    for i in 0..nd {
        let l = axis_extent(lhs, i, nd);
        let r = axis_extent(rhs, i, nd);

        if l == r || r == 1 {
            out[i] = l;
        } else if l == 1 {
            out[i] = r;
        } else {
            return Err(Error::BroadcastError {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
                axis: i,
                lhs_extent: l,
                rhs_extent: r,
            });
        }
    }

    Ok(out)
}

/// Extent of `shape` on output axis `i` after left-padding to rank `nd`
#[inline]
fn axis_extent(shape: &[usize], i: usize, nd: usize) -> usize {
    let k = (i + shape.len()) as isize - nd as isize;
    if k >= 0 {
        shape[k as usize]
    } else {
        1
    }
}

/// Broadcast two operand layouts against each other
///
/// Returns `(lhs', rhs')` with identical rank and extents. Each output
/// layout keeps its operand's storage offset and carries stride 0 on every
/// stretched axis. Neither input layout is mutated; a scalar (or
/// single-element rank-1) operand short-circuits to an all-zero-stride copy
/// of the other shape.
pub(crate) fn broadcast_layouts(lhs: &Layout, rhs: &Layout) -> Result<(Layout, Layout)> {
    if lhs.shape() == rhs.shape() {
        return Ok((lhs.clone(), rhs.clone()));
    }

    // Scalar short-circuits avoid the shape resolution entirely.
    if is_scalar_like(lhs) {
        let stretched = zero_strided(rhs.shape(), lhs.offset());
        return Ok((stretched, rhs.clone()));
    }
    if is_scalar_like(rhs) {
        let stretched = zero_strided(lhs.shape(), rhs.offset());
        return Ok((lhs.clone(), stretched));
    }

    let out = broadcast_shapes(lhs.shape(), rhs.shape())?;
    Ok((align_to(lhs, &out), align_to(rhs, &out)))
}

#[inline]
fn is_scalar_like(layout: &Layout) -> bool {
    layout.is_scalar() || (layout.ndim() == 1 && layout.shape()[0] == 1)
}

fn zero_strided(shape: &[usize], offset: usize) -> Layout {
    let strides: Strides = SmallVec::from_elem(0, shape.len());
    Layout::new(SmallVec::from_slice(shape), strides, offset)
}

/// Re-stride `layout` to the resolved output shape: axes that were added or
/// stretched from extent 1 get stride 0, kept axes keep their native stride.
fn align_to(layout: &Layout, out: &Shape) -> Layout {
    let nd = out.len();
    let own_nd = layout.ndim();
    let mut strides: Strides = SmallVec::with_capacity(nd);

    for (j, &extent) in out.iter().enumerate() {
        let k = (j + own_nd) as isize - nd as isize;
        if k < 0 || layout.shape()[k as usize] != extent {
            strides.push(0);
        } else {
            strides.push(layout.strides()[k as usize]);
        }
    }

    Layout::new(out.clone(), strides, layout.offset())
}
