//! The growable contiguous array.
//!
//! [`DynamicArray`] owns one [`RawBuffer`] and a logical length. Slots
//! `[0, len)` are live; slots `[len, capacity)` hold default or stale values
//! that the public API never exposes.
//!
//! Every operation that needs more room follows the same shape:
//!
//! 1. allocate a fresh, larger buffer (the only fallible step),
//! 2. move the live elements into it and apply the mutation there,
//! 3. swap the replacement in and drop the old buffer.
//!
//! If step 1 fails the array is untouched. Shrinking operations (`clear`,
//! `pop_back`, `erase`, shrinking `resize`) only move the length; capacity
//! never decreases and nothing is dropped until a slot is overwritten or the
//! buffer itself goes away.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Range};

use crate::error::ArrayError;
use crate::growth;
use crate::raw::{self, RawBuffer};

/// A resizable array with explicit, doubling capacity management.
pub struct DynamicArray<T> {
    /// Backing block. Its length is the array's capacity.
    storage: RawBuffer<T>,
    /// Number of live elements. Always `<= storage.len()`.
    len: usize,
}

impl<T> DynamicArray<T> {
    /// An empty array that owns no allocation.
    pub fn new() -> Self {
        Self {
            storage: RawBuffer::empty(),
            len: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements the array can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checked access. Fails with [`ArrayError::OutOfRange`] when
    /// `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable access. Fails with [`ArrayError::OutOfRange`] when
    /// `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable element at `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.storage.as_slice()[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage.as_mut_slice()[..self.len]
    }

    /// Pointer to the first element.
    ///
    /// For an empty array the value is unspecified: it may or may not be
    /// dangling and must never be dereferenced or compared against null as
    /// an emptiness test.
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable pointer to the first element. Same contract as
    /// [`DynamicArray::as_ptr`].
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Half-open pointer range over the live elements (`begin..end`).
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Forget every element. Capacity and stored values are kept; the old
    /// values are dropped only when their slots are overwritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Forget the last element without dropping it.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        assert!(self.len > 0, "pop_back on an empty array");
        self.len -= 1;
    }

    /// Remove the element at `index`, shifting the tail left by one.
    ///
    /// Returns `index`, which now names the element that followed the erased
    /// one (or equals `len()` if the last element was erased). The erased
    /// value moves to the first stale slot and is dropped when overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(
            index < len,
            "erase index {index} out of bounds for length {len}"
        );
        let slots = self.storage.as_mut_slice();
        // Front to back: each slot is read before its left neighbour is
        // overwritten.
        for i in index..len - 1 {
            slots.swap(i, i + 1);
        }
        self.len -= 1;
        index
    }

    /// Exchange contents with `other`. O(1), never fails.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out, leaving this array empty with capacity 0.
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
            len: std::mem::replace(&mut self.len, 0),
        }
    }

    /// Deep copy whose capacity equals this array's length.
    ///
    /// Returns [`ArrayError::AllocationFailed`] instead of panicking when the
    /// copy cannot be allocated.
    pub fn try_clone(&self) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        let mut data = raw::try_vec_with_capacity(self.len)?;
        data.extend_from_slice(self.as_slice());
        Ok(Self::from(data))
    }

    /// Swap `replacement` in and let the previous storage drop with it.
    fn adopt(&mut self, mut replacement: Self, reason: &'static str) {
        tracing::trace!(
            reason = reason,
            len = replacement.len,
            old_capacity = self.capacity(),
            new_capacity = replacement.capacity(),
            "reallocated array storage"
        );
        self.swap(&mut replacement);
    }
}

impl<T: Default> DynamicArray<T> {
    /// `len` default-valued elements; capacity equals `len`.
    pub fn try_with_len(len: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            storage: RawBuffer::try_new(len)?,
            len,
        })
    }

    /// `len` default-valued elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`DynamicArray::try_with_len`].
    pub fn with_len(len: usize) -> Self {
        Self::try_with_len(len).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Empty array with room for `capacity` elements.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            storage: RawBuffer::try_new(capacity)?,
            len: 0,
        })
    }

    /// Empty array with room for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See
    /// [`DynamicArray::try_with_capacity`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self::try_with_capacity(capacity).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Change the length to `new_len`.
    ///
    /// Shrinking only moves the length. Growing within capacity fills the
    /// new slots with `T::default()`. Growing past capacity reallocates to
    /// `max(capacity * 2, new_len)`.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ArrayError> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        if new_len <= self.capacity() {
            self.storage.as_mut_slice()[self.len..new_len]
                .iter_mut()
                .for_each(|slot| *slot = T::default());
            self.len = new_len;
            return Ok(());
        }
        let mut grown = self.relocated(growth::grown_for_resize(self.capacity(), new_len))?;
        // Fresh slots past the old length are already default.
        grown.len = new_len;
        self.adopt(grown, "resize");
        Ok(())
    }

    /// Grow capacity to exactly `new_capacity` if it is larger than the
    /// current one. Never shrinks; length and values are preserved.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let grown = self.relocated(new_capacity)?;
        self.adopt(grown, "reserve");
        Ok(())
    }

    /// Append `value`, doubling capacity (or going 0 -> 1) when full.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self.len < self.capacity() {
            self.storage[self.len] = value;
            self.len += 1;
            return Ok(());
        }
        let mut grown = self.relocated(growth::grown_for_push(self.len))?;
        grown.storage[grown.len] = value;
        grown.len += 1;
        self.adopt(grown, "push_back");
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` right by one.
    ///
    /// `index == len()` appends. Returns `index`, the position of the
    /// inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, ArrayError> {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index {index} out of bounds for length {len}"
        );

        if len < self.capacity() {
            let slots = self.storage.as_mut_slice();
            slots[len] = value;
            // Back to front, so no element is overwritten before it moves.
            for i in (index..len).rev() {
                slots.swap(i, i + 1);
            }
            self.len += 1;
            return Ok(index);
        }

        let mut grown = RawBuffer::try_new(growth::grown_for_push(len))?;
        {
            let (head, tail) = self.as_mut_slice().split_at_mut(index);
            let dst = grown.as_mut_slice();
            move_into(&mut dst[..index], head);
            dst[index] = value;
            move_into(&mut dst[index + 1..=len], tail);
        }
        self.adopt(
            Self {
                storage: grown,
                len: len + 1,
            },
            "insert",
        );
        Ok(index)
    }

    /// Copy-and-swap assignment.
    ///
    /// `rhs` is taken by value, so callers choose between cloning and
    /// moving. Its live elements are moved into fresh storage sized to its
    /// length, which then replaces this array's contents.
    pub fn assign(&mut self, mut rhs: Self) -> Result<(), ArrayError> {
        let replacement = rhs.relocated(rhs.len)?;
        self.adopt(replacement, "assign");
        Ok(())
    }

    /// Build a replacement with `capacity` slots holding this array's live
    /// elements, moved into `[0, len)`.
    ///
    /// Allocation happens before anything is moved, so on error `self` is
    /// unchanged. On success `self`'s live slots hold defaults and it is
    /// expected to be swapped out by `adopt`.
    fn relocated(&mut self, capacity: usize) -> Result<Self, ArrayError> {
        debug_assert!(capacity >= self.len);
        let mut storage = RawBuffer::try_new(capacity)?;
        move_into(&mut storage.as_mut_slice()[..self.len], self.as_mut_slice());
        Ok(Self {
            storage,
            len: self.len,
        })
    }
}

impl<T: Clone> DynamicArray<T> {
    /// `len` clones of `value`; capacity equals `len`.
    pub fn try_from_elem(len: usize, value: T) -> Result<Self, ArrayError> {
        let mut data = raw::try_vec_with_capacity(len)?;
        data.resize(len, value);
        Ok(Self::from(data))
    }

    /// `len` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails. See [`DynamicArray::try_from_elem`].
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::try_from_elem(len, value).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// Move every element of `src` into the matching slot of `dst`, leaving the
/// displaced `dst` values behind in `src`.
fn move_into<T>(dst: &mut [T], src: &mut [T]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src.iter_mut()) {
        std::mem::swap(d, s);
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }

    /// Copy-and-swap: the copy is built in full before `self` changes.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    /// Unchecked-contract access: the caller guarantees `index < len()`.
    /// Violations panic rather than reading a stale slot.
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    /// Adopts the vector's elements in order; capacity equals its length.
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        Self {
            storage: RawBuffer::from_vec(vec),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Self::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from(items.to_vec())
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for DynamicArray<T> {
    /// Appends with [`DynamicArray::push_back`]'s growth rule.
    ///
    /// # Panics
    ///
    /// Panics if an allocation fails.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item).unwrap_or_else(|err| panic!("{err}"));
        }
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut data = self.storage.into_vec();
        data.truncate(self.len);
        data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialOrd> PartialOrd for DynamicArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for DynamicArray<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}
