//! Odometer iteration over n-dimensional index spaces

use crate::array::Shape;
use smallvec::SmallVec;

/// Odometer-style cursor over every coordinate of an n-dimensional space
///
/// Visits each coordinate of `[0, dims[0]) x ... x [0, dims[n-1])` exactly
/// once in row-major order (last axis fastest): increment the last
/// coordinate; on overflow reset it to 0 and carry leftward; when the carry
/// runs past the first axis the sequence is exhausted.
///
/// A rank-0 space iterates exactly one coordinate. Created fresh per
/// element-wise loop and discarded afterwards; it is the only mutable state
/// in the dispatch engine.
pub struct NdCoords {
    dims: Shape,
    index: Shape,
}

impl NdCoords {
    /// Create a cursor positioned at the all-zeroes coordinate
    ///
    /// A rank-0 (scalar) space is treated as a single-element `[1]` space.
    pub fn new(dims: &[usize]) -> Self {
        let dims: Shape = if dims.is_empty() {
            SmallVec::from_slice(&[1])
        } else {
            SmallVec::from_slice(dims)
        };
        let index: Shape = dims.iter().map(|_| 0).collect();
        Self { dims, index }
    }

    /// The current coordinate
    #[inline]
    pub fn current(&self) -> &[usize] {
        &self.index
    }

    /// Step to the next coordinate in row-major order
    ///
    /// Returns false once every coordinate has been visited; the cursor then
    /// stays at the all-zeroes coordinate.
    #[inline]
    pub fn advance(&mut self) -> bool {
        for dim in (0..self.dims.len()).rev() {
            self.index[dim] += 1;
            if self.index[dim] < self.dims[dim] {
                return true;
            }
            self.index[dim] = 0;
        }
        false
    }

    /// Rewind to the all-zeroes coordinate
    pub fn reset(&mut self) {
        for i in self.index.iter_mut() {
            *i = 0;
        }
    }
}

/// Buffer index of a coordinate under a stride vector: the dot product of
/// coordinates and strides plus the view's starting offset.
///
/// This is how a (possibly broadcast) operand's source element is located
/// for each visited output coordinate; stride-0 axes contribute nothing, so
/// every coordinate along them reads the same element.
#[inline]
pub fn element_offset(coords: &[usize], strides: &[isize], offset: usize) -> usize {
    let mut idx = offset as isize;
    for (&c, &s) in coords.iter().zip(strides.iter()) {
        idx += c as isize * s;
    }
    idx as usize
}
