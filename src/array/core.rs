//! Core NdArray type

use super::{Layout, Storage};
use crate::dtype::{Boolean, CharCode, DType, Dec128, Element};
use crate::engine::iter::{element_offset, NdCoords};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array with a runtime element type
///
/// `NdArray` is the fundamental data structure in narray. It consists of:
/// - **Storage**: reference-counted element buffer
/// - **Layout**: shape, strides, and offset defining the view into storage
/// - **DType**: element kind (determined at runtime)
///
/// # Zero-Copy Views
///
/// `transpose`, `narrow`, `reshape`, and `broadcast_to` create new arrays
/// that share the same underlying storage through the Arc-wrapped buffer and
/// a modified layout. Operators never mutate their inputs; every operation
/// allocates and returns a fresh output array.
///
/// # Example
///
/// ```
/// use narray::{NdArray, ops};
///
/// let a = NdArray::from_slice(&[1i32, 2, 3, 4], &[2, 2]).unwrap();
/// let b = NdArray::scalar(10i32);
/// let c = ops::add(&a, &b).unwrap();
/// assert_eq!(c.to_vec::<i32>().unwrap(), vec![11, 12, 13, 14]);
/// ```
pub struct NdArray {
    /// Element buffer
    storage: Storage,
    /// Shape, strides, offset
    layout: Layout,
}

impl NdArray {
    /// Create an array from storage and layout
    pub(crate) fn from_parts(storage: Storage, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create an array from a slice of data
    ///
    /// Fails with `ShapeMismatch` if `data.len()` does not equal the product
    /// of the `shape` dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use narray::NdArray;
    /// let a = NdArray::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(a.shape(), &[2, 2]);
    /// ```
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_slice(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a rank-0 (scalar) array holding a single value
    pub fn scalar<T: Element>(value: T) -> Self {
        Self {
            storage: Storage::from_slice(&[value]),
            layout: Layout::scalar(),
        }
    }

    /// Create a boolean array from `bool` values
    pub fn from_bools(data: &[bool], shape: &[usize]) -> Result<Self> {
        let elems: Vec<Boolean> = data.iter().map(|&b| Boolean::from(b)).collect();
        Self::from_slice(&elems, shape)
    }

    /// Create a char array from `char` values
    pub fn from_chars(data: &[char], shape: &[usize]) -> Result<Self> {
        let elems: Vec<CharCode> = data.iter().map(|&c| CharCode::from(c)).collect();
        Self::from_slice(&elems, shape)
    }

    /// Create a decimal array from `rust_decimal::Decimal` values
    pub fn from_decimals(data: &[rust_decimal::Decimal], shape: &[usize]) -> Result<Self> {
        let elems: Vec<Dec128> = data.iter().map(|&d| Dec128::from_decimal(d)).collect();
        Self::from_slice(&elems, shape)
    }

    /// Create an array filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let len: usize = shape.iter().product();
        Self {
            storage: Storage::zeroed(len, dtype),
            layout: Layout::contiguous(shape),
        }
    }

    /// The element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// The shape (extent along each dimension)
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// The strides (in elements)
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Total number of elements in the view
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Whether this is a rank-0 array
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Whether the view is contiguous row-major over its storage
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// The layout (shape, strides, offset)
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Broadcast this array to a target shape (zero-copy view)
    ///
    /// Stretched dimensions get stride 0, so every coordinate along them
    /// reads the same underlying element.
    pub fn broadcast_to(&self, target: &[usize]) -> Result<Self> {
        let layout = self
            .layout
            .broadcast_to(target)
            .ok_or_else(|| Error::shape_mismatch(target, self.shape()))?;
        Ok(Self {
            storage: self.storage.clone(),
            layout,
        })
    }

    /// Swap two dimensions (zero-copy view)
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Result<Self> {
        let layout = self
            .layout
            .transpose(dim0, dim1)
            .ok_or(Error::InvalidDimension {
                dim: dim0.min(dim1),
                ndim: self.ndim(),
            })?;
        Ok(Self {
            storage: self.storage.clone(),
            layout,
        })
    }

    /// Restrict one dimension to `[start, start + len)` (zero-copy view)
    pub fn narrow(&self, dim: isize, start: usize, len: usize) -> Result<Self> {
        let d = self
            .layout
            .normalize_dim(dim)
            .ok_or(Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })?;
        let layout = self
            .layout
            .narrow(dim, start, len)
            .ok_or(Error::IndexOutOfBounds {
                index: start + len,
                size: self.shape()[d],
            })?;
        Ok(Self {
            storage: self.storage.clone(),
            layout,
        })
    }

    /// Reinterpret the shape of a contiguous array (zero-copy view)
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self> {
        let layout = self.layout.reshape(new_shape).ok_or(Error::NotContiguous)?;
        Ok(Self {
            storage: self.storage.clone(),
            layout,
        })
    }

    /// Read the single element of a rank-0 array
    pub fn scalar_value<T: Element>(&self) -> Result<T> {
        if !self.is_scalar() {
            return Err(Error::InvalidArgument {
                arg: "self",
                reason: format!("expected a scalar array, got shape {:?}", self.shape()),
            });
        }
        let data = self.storage.as_slice::<T>()?;
        Ok(data[self.layout.offset()])
    }

    /// Read one element by coordinates
    pub fn get<T: Element>(&self, indices: &[usize]) -> Result<T> {
        let data = self.storage.as_slice::<T>()?;
        let idx = self
            .layout
            .index(indices)
            .ok_or_else(|| Error::InvalidArgument {
                arg: "indices",
                reason: format!("{indices:?} out of bounds for shape {:?}", self.shape()),
            })?;
        Ok(data[idx])
    }

    /// Copy the view's elements out in row-major order
    ///
    /// Materializes strided and broadcast views; contiguous arrays copy the
    /// buffer directly.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        let data = self.storage.as_slice::<T>()?;
        let total = self.numel();

        if self.is_contiguous() {
            return Ok(data[..total].to_vec());
        }

        let mut out = Vec::with_capacity(total);
        if total == 0 {
            return Ok(out);
        }

        let offset = self.layout.offset();
        let strides = self.layout.strides();
        let mut coords = NdCoords::new(self.shape());
        loop {
            out.push(data[element_offset(coords.current(), strides, offset)]);
            if !coords.advance() {
                break;
            }
        }
        Ok(out)
    }

    /// Copy a boolean array out as `bool` values
    pub fn to_bools(&self) -> Result<Vec<bool>> {
        Ok(self.to_vec::<Boolean>()?.iter().map(|b| b.as_bool()).collect())
    }

    /// Copy a char array out as `char` values
    pub fn to_chars(&self) -> Result<Vec<char>> {
        Ok(self.to_vec::<CharCode>()?.iter().map(|c| c.as_char()).collect())
    }

    /// Copy a decimal array out as `rust_decimal::Decimal` values
    pub fn to_decimals(&self) -> Result<Vec<rust_decimal::Decimal>> {
        Ok(self.to_vec::<Dec128>()?.iter().map(|d| d.to_decimal()).collect())
    }
}

impl Clone for NdArray {
    /// Zero-copy clone sharing the same storage
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl fmt::Debug for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdArray")
            .field("dtype", &self.dtype())
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_shape_check() {
        assert!(NdArray::from_slice(&[1i32, 2, 3], &[2, 2]).is_err());
        let a = NdArray::from_slice(&[1i32, 2, 3, 4], &[2, 2]).unwrap();
        assert_eq!(a.dtype(), DType::I32);
        assert_eq!(a.numel(), 4);
    }

    #[test]
    fn test_scalar() {
        let s = NdArray::scalar(2.5f64);
        assert!(s.is_scalar());
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.numel(), 1);
        assert_eq!(s.scalar_value::<f64>().unwrap(), 2.5);
    }

    #[test]
    fn test_get() {
        let a = NdArray::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert_eq!(a.get::<i32>(&[0, 0]).unwrap(), 1);
        assert_eq!(a.get::<i32>(&[1, 2]).unwrap(), 6);
        assert!(a.get::<i32>(&[2, 0]).is_err());
    }

    #[test]
    fn test_transpose_to_vec() {
        let a = NdArray::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let t = a.transpose(0, 1).unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        assert_eq!(t.to_vec::<i32>().unwrap(), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_narrow_to_vec() {
        let a = NdArray::from_slice(&[1i32, 2, 3, 4, 5, 6], &[3, 2]).unwrap();
        let n = a.narrow(0, 1, 2).unwrap();
        assert_eq!(n.shape(), &[2, 2]);
        assert_eq!(n.to_vec::<i32>().unwrap(), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_broadcast_view_shares_storage() {
        let a = NdArray::from_slice(&[1i32, 2, 3], &[3, 1]).unwrap();
        let b = a.broadcast_to(&[3, 4]).unwrap();
        assert_eq!(b.numel(), 12);
        assert_eq!(a.storage().ref_count(), 2);
        assert_eq!(
            b.to_vec::<i32>().unwrap(),
            vec![1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3]
        );
    }

    #[test]
    fn test_bool_char_decimal_construction() {
        let b = NdArray::from_bools(&[true, false], &[2]).unwrap();
        assert_eq!(b.dtype(), DType::Bool);
        assert_eq!(b.to_bools().unwrap(), vec![true, false]);

        let c = NdArray::from_chars(&['a', 'z'], &[2]).unwrap();
        assert_eq!(c.dtype(), DType::Char);
        assert_eq!(c.to_chars().unwrap(), vec!['a', 'z']);

        let d = NdArray::from_decimals(&[rust_decimal::Decimal::new(15, 1)], &[1]).unwrap();
        assert_eq!(d.dtype(), DType::Decimal);
        assert_eq!(d.to_decimals().unwrap()[0], rust_decimal::Decimal::new(15, 1));
    }
}
