//! Fixed-size, single-owner element storage.
//!
//! [`RawBuffer`] owns at most one heap block holding an exact number of
//! elements. It is never resized in place: growth elsewhere in the crate is
//! always "allocate a new buffer, transfer elements, drop the old one".
//!
//! Storage is a `Box<[T]>` filled with `T::default()` at construction, so
//! every slot is always a valid `T` and no `unsafe` is needed. An empty
//! buffer owns no allocation.

use std::ops::{Index, IndexMut};

use crate::error::ArrayError;

/// Exclusive owner of one contiguous block of `len()` elements.
///
/// Not `Clone`: ownership of the block cannot be duplicated. Use
/// [`RawBuffer::take`] or [`RawBuffer::swap`] to transfer it.
#[derive(Debug)]
pub struct RawBuffer<T> {
    /// Backing storage. Zero-length boxes do not allocate.
    data: Box<[T]>,
}

impl<T> RawBuffer<T> {
    /// An empty buffer that owns no allocation.
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// Adopt an existing vector's elements as a buffer of exactly
    /// `vec.len()` slots.
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self {
            data: vec.into_boxed_slice(),
        }
    }

    /// Number of slots in the block. Fixed for the buffer's lifetime.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer owns no slots.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pointer to the first slot.
    ///
    /// For an empty buffer this is dangling and must not be dereferenced.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first slot.
    ///
    /// For an empty buffer this is dangling and must not be dereferenced.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// All slots, including ones the owning array considers stale.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All slots, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Exchange owned blocks with `other`. O(1), touches no elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Move the block out, leaving this buffer empty.
    pub fn take(&mut self) -> Self {
        Self {
            data: std::mem::take(&mut self.data),
        }
    }

    /// Consume the buffer, returning its slots as a vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T: Default> RawBuffer<T> {
    /// Allocate `capacity` default-constructed slots.
    ///
    /// A capacity of 0 allocates nothing. Returns
    /// [`ArrayError::AllocationFailed`] if the block size overflows or the
    /// allocator refuses the request.
    pub fn try_new(capacity: usize) -> Result<Self, ArrayError> {
        let mut data = try_vec_with_capacity(capacity)?;
        data.resize_with(capacity, T::default);
        Ok(Self::from_vec(data))
    }

    /// Allocate `capacity` default-constructed slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`RawBuffer::try_new`].
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// An empty vector with room for exactly `capacity` elements, or
/// [`ArrayError::AllocationFailed`] if that room cannot be obtained.
pub(crate) fn try_vec_with_capacity<T>(capacity: usize) -> Result<Vec<T>, ArrayError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|err| {
        tracing::debug!(requested = capacity, error = %err, "storage allocation refused");
        ArrayError::AllocationFailed {
            requested: capacity,
        }
    })?;
    Ok(data)
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Index<usize> for RawBuffer<T> {
    type Output = T;

    /// Caller guarantees `index < len()`; panics otherwise.
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for RawBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}
