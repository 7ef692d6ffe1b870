//! Layout: shape, strides, and offset describing an array's memory view

use smallvec::SmallVec;
use std::fmt;

/// Stack allocation threshold for dimensions
/// Most arrays have 4 or fewer dimensions, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Shape type: extents of an array along each dimension
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Strides type: element offsets between consecutive elements along each
/// dimension. Signed to leave room for negative-stride views; a stride of 0
/// marks a broadcast dimension. Strides are in ELEMENTS, not bytes.
pub type Strides = SmallVec<[isize; STACK_DIMS]>;

/// Layout describes the memory layout of an array
///
/// An array's elements live in a flat buffer, but not necessarily in
/// row-major order. The layout specifies how to compute the buffer index of
/// any element given its coordinates:
///
///   offset + i0 * strides[0] + i1 * strides[1] + ... + in * strides[n]
///
/// A dimension with stride 0 is *broadcast*: every coordinate along it reads
/// the same underlying element.
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Extent along each dimension
    shape: Shape,
    /// Offset (in elements) between consecutive elements along each dimension
    strides: Strides,
    /// Starting element index in the underlying storage
    offset: usize,
}

impl Layout {
    /// Create a new contiguous (row-major/C-order) layout from a shape
    pub fn contiguous(shape: &[usize]) -> Self {
        let shape: Shape = shape.iter().copied().collect();
        let strides = Self::compute_contiguous_strides(&shape);
        Self {
            shape,
            strides,
            offset: 0,
        }
    }

    /// Create a layout with explicit shape, strides, and offset
    pub fn new(shape: Shape, strides: Strides, offset: usize) -> Self {
        debug_assert_eq!(shape.len(), strides.len());
        Self {
            shape,
            strides,
            offset,
        }
    }

    /// Create a scalar (0-dimensional) layout
    pub fn scalar() -> Self {
        Self {
            shape: SmallVec::new(),
            strides: SmallVec::new(),
            offset: 0,
        }
    }

    /// Compute contiguous strides for a given shape (row-major order)
    fn compute_contiguous_strides(shape: &[usize]) -> Strides {
        if shape.is_empty() {
            return SmallVec::new();
        }

        let mut strides: Strides = SmallVec::with_capacity(shape.len());
        let mut stride = 1isize;

        // Compute strides from last dimension to first
        for &dim in shape.iter().rev() {
            strides.push(stride);
            stride *= dim as isize;
        }

        strides.reverse();
        strides
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        &self.strides
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Check if the layout is a scalar (0 dimensions)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// Check if memory is contiguous row-major starting at offset 0
    ///
    /// This is the "linear" test of the dispatch engine: a contiguous layout
    /// can be walked with a flat increasing index matching iteration order.
    pub fn is_contiguous(&self) -> bool {
        if self.is_scalar() {
            return self.offset == 0;
        }

        let expected = Self::compute_contiguous_strides(&self.shape);
        self.strides == expected && self.offset == 0
    }

    /// Check if any dimension is broadcast (stride 0 with extent > 1)
    pub fn is_broadcast(&self) -> bool {
        self.shape
            .iter()
            .zip(self.strides.iter())
            .any(|(&d, &s)| s == 0 && d > 1)
    }

    /// Normalize a dimension index (handle negative indices)
    pub fn normalize_dim(&self, d: isize) -> Option<usize> {
        let ndim = self.ndim() as isize;
        let idx = if d < 0 { ndim + d } else { d };
        if idx >= 0 && idx < ndim {
            Some(idx as usize)
        } else {
            None
        }
    }

    /// Compute the buffer index (element offset) for given coordinates
    pub fn index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() {
            return None;
        }

        // Check bounds
        for (idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if *idx >= dim {
                return None;
            }
        }

        let mut linear = self.offset as isize;
        for (&idx, &stride) in indices.iter().zip(self.strides.iter()) {
            linear += idx as isize * stride;
        }

        Some(linear as usize)
    }

    /// Create a transposed layout (swap two dimensions)
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Option<Self> {
        let d0 = self.normalize_dim(dim0)?;
        let d1 = self.normalize_dim(dim1)?;

        let mut new_shape = self.shape.clone();
        let mut new_strides = self.strides.clone();

        new_shape.swap(d0, d1);
        new_strides.swap(d0, d1);

        Some(Self {
            shape: new_shape,
            strides: new_strides,
            offset: self.offset,
        })
    }

    /// Create a reshaped layout (if contiguous)
    ///
    /// Returns None if the layout is not contiguous or the element counts
    /// don't match
    pub fn reshape(&self, new_shape: &[usize]) -> Option<Self> {
        if !self.is_contiguous() {
            return None;
        }

        let new_count: usize = new_shape.iter().product();
        if new_count != self.elem_count() {
            return None;
        }

        Some(Self::contiguous(new_shape))
    }

    /// Create a narrowed layout: restrict one dimension to `[start, start+len)`
    ///
    /// Returns None if the dimension or range is out of bounds
    pub fn narrow(&self, dim: isize, start: usize, len: usize) -> Option<Self> {
        let d = self.normalize_dim(dim)?;
        if start + len > self.shape[d] {
            return None;
        }

        let mut new_shape = self.shape.clone();
        new_shape[d] = len;
        let offset = (self.offset as isize + start as isize * self.strides[d]) as usize;

        Some(Self::new(new_shape, self.strides.clone(), offset))
    }

    /// Create a broadcast layout to a target shape
    ///
    /// Missing leading dimensions and dimensions of extent 1 are stretched
    /// with stride 0. Returns None if the shapes are not broadcastable.
    pub fn broadcast_to(&self, target: &[usize]) -> Option<Self> {
        if target.len() < self.ndim() {
            return None;
        }

        let mut new_shape = Shape::new();
        let mut new_strides = Strides::new();

        // Pad with leading broadcast dimensions
        let pad = target.len() - self.ndim();
        for &t in &target[..pad] {
            new_shape.push(t);
            new_strides.push(0);
        }

        for ((&s, &st), &t) in self
            .shape
            .iter()
            .zip(self.strides.iter())
            .zip(&target[pad..])
        {
            if s == t {
                new_shape.push(t);
                new_strides.push(st);
            } else if s == 1 {
                new_shape.push(t);
                new_strides.push(0);
            } else {
                return None;
            }
        }

        Some(Self::new(new_shape, new_strides, self.offset))
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, strides: {:?}, offset: {} }}",
            self.shape.as_slice(),
            self.strides.as_slice(),
            self.offset
        )
    }
}
