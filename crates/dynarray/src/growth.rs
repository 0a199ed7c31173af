//! Capacity growth policy.
//!
//! All reallocating operations pick their new capacity here so the
//! doubling rule lives in one place. Arithmetic saturates instead of
//! wrapping: an absurd request turns into an allocation failure at the
//! storage layer, never into a smaller-than-needed buffer.

/// Multiplier applied to the current size when an append-style operation
/// finds the array full.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity chosen when an empty, unallocated array receives its first
/// element.
pub const MIN_GROWN_CAPACITY: usize = 1;

/// Capacity for `push_back`/`insert` on a full array of length `len`.
///
/// `max(len * 2, 1)`: the 0 -> 1 transition is the base case of the
/// doubling rule.
pub fn grown_for_push(len: usize) -> usize {
    len.saturating_mul(GROWTH_FACTOR).max(MIN_GROWN_CAPACITY)
}

/// Capacity for `resize(new_len)` when `new_len` exceeds `capacity`.
///
/// `max(capacity * 2, new_len)`: doubles unless the request alone is larger.
pub fn grown_for_resize(capacity: usize, new_len: usize) -> usize {
    capacity.saturating_mul(GROWTH_FACTOR).max(new_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_growth_starts_at_one() {
        assert_eq!(grown_for_push(0), 1);
    }

    #[test]
    fn push_growth_doubles() {
        assert_eq!(grown_for_push(1), 2);
        assert_eq!(grown_for_push(3), 6);
        assert_eq!(grown_for_push(64), 128);
    }

    #[test]
    fn resize_growth_prefers_doubling() {
        assert_eq!(grown_for_resize(4, 5), 8);
    }

    #[test]
    fn resize_growth_honours_large_request() {
        assert_eq!(grown_for_resize(4, 100), 100);
        assert_eq!(grown_for_resize(0, 3), 3);
    }

    #[test]
    fn growth_saturates_instead_of_wrapping() {
        assert_eq!(grown_for_push(usize::MAX / 2 + 1), usize::MAX);
        assert_eq!(grown_for_resize(usize::MAX - 1, 1), usize::MAX);
    }
}
