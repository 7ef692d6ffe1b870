//! Storage: reference-counted element buffers

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Storage for array data
///
/// Storage wraps a flat element buffer with reference counting, enabling
/// zero-copy views (transpose, narrow, broadcast) that share the underlying
/// memory. The buffer is kept as 16-byte-aligned raw words so that a single
/// storage type can hold every element kind and hand out typed slices via
/// `bytemuck` casts.
pub struct Storage {
    inner: Arc<StorageInner>,
}

struct StorageInner {
    /// Raw buffer; u128 words guarantee alignment for every element kind
    raw: Box<[u128]>,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
}

impl Storage {
    /// Create zero-initialized storage for `len` elements of `dtype`
    ///
    /// The all-zeroes bit pattern is the zero value of every supported kind.
    pub fn zeroed(len: usize, dtype: DType) -> Self {
        let words = Self::words_for(len, dtype);
        Self {
            inner: Arc::new(StorageInner {
                raw: vec![0u128; words].into_boxed_slice(),
                len,
                dtype,
            }),
        }
    }

    /// Create storage holding a copy of `data`, with dtype inferred from the
    /// element type
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        let dtype = T::DTYPE;
        let len = data.len();
        let words = Self::words_for(len, dtype);
        let mut raw = vec![0u128; words].into_boxed_slice();

        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut raw);
        bytes[..std::mem::size_of_val(data)].copy_from_slice(bytemuck::cast_slice(data));

        Self {
            inner: Arc::new(StorageInner { raw, len, dtype }),
        }
    }

    fn words_for(len: usize, dtype: DType) -> usize {
        (len * dtype.size_in_bytes()).div_ceil(16)
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Get size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// Get the reference count
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// View the whole buffer as a typed slice
    ///
    /// Fails with `DTypeMismatch` if `T` is not the storage's element type.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        if T::DTYPE != self.inner.dtype {
            return Err(Error::DTypeMismatch {
                requested: T::DTYPE,
                actual: self.inner.dtype,
            });
        }

        let bytes: &[u8] = bytemuck::cast_slice(&self.inner.raw);
        Ok(bytemuck::cast_slice(&bytes[..self.size_in_bytes()]))
    }

    /// View the whole buffer as a mutable typed slice
    ///
    /// Only valid while this is the sole reference, which holds for freshly
    /// allocated output buffers.
    ///
    /// # Panics
    ///
    /// Panics if the storage is shared or `T` is not the element type; both
    /// indicate an engine bug, not a caller error.
    pub fn as_mut_slice<T: Element>(&mut self) -> &mut [T] {
        assert_eq!(T::DTYPE, self.inner.dtype, "storage dtype mismatch");
        let size = self.size_in_bytes();
        let inner = Arc::get_mut(&mut self.inner)
            .expect("as_mut_slice requires unshared storage");
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut inner.raw);
        bytemuck::cast_slice_mut(&mut bytes[..size])
    }

    /// View the raw bytes of the buffer (used by no-mutation tests and
    /// byte-level comparisons)
    pub fn as_bytes(&self) -> &[u8] {
        let bytes: &[u8] = bytemuck::cast_slice(&self.inner.raw);
        &bytes[..self.size_in_bytes()]
    }
}

impl Clone for Storage {
    /// Clone increments the reference count (zero-copy)
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .field("refs", &Arc::strong_count(&self.inner))
            .finish()
    }
}
