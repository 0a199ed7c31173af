//! Capacity reservation as a construction argument.
//!
//! `DynamicArray::try_from(reserve(n))` reads like the call site it stands
//! for: build an empty array that already has room for `n` elements.

use crate::array::DynamicArray;
use crate::error::ArrayError;

/// A pending capacity reservation, consumed by
/// `TryFrom<ReserveProxy> for DynamicArray<T>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    /// The capacity that will be reserved.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Request an array pre-sized for `capacity` elements.
pub fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy { capacity }
}

impl<T: Default> TryFrom<ReserveProxy> for DynamicArray<T> {
    type Error = ArrayError;

    fn try_from(proxy: ReserveProxy) -> Result<Self, ArrayError> {
        DynamicArray::try_with_capacity(proxy.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_carries_capacity() {
        assert_eq!(reserve(12).capacity(), 12);
    }

    #[test]
    fn reservation_is_applied_to_constructed_array() {
        let arr: DynamicArray<i32> = DynamicArray::try_from(reserve(5)).unwrap();
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.capacity(), 5);
    }

    #[test]
    fn zero_reservation_allocates_nothing() {
        let arr: DynamicArray<String> = reserve(0).try_into().unwrap();
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 0);
    }

    #[test]
    fn impossible_reservation_fails() {
        let result: Result<DynamicArray<u64>, _> = reserve(usize::MAX).try_into();
        assert!(matches!(result, Err(ArrayError::AllocationFailed { .. })));
    }
}
