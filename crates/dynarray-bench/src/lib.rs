//! Benchmark workloads for the dynarray container.
//!
//! - [`filled_array`]: an array of `0..len` built by repeated `push_back`
//! - [`positions`]: deterministic pseudo-random indices via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::DynamicArray;

/// Build an array holding `0..len` through the doubling growth path.
pub fn filled_array(len: usize) -> DynamicArray<u64> {
    let mut arr = DynamicArray::new();
    for i in 0..len as u64 {
        arr.push_back(i).expect("benchmark sizes fit in memory");
    }
    arr
}

/// Generate `n` deterministic positions for a growing array.
///
/// Position `i` is taken modulo `start_len + i + 1`, so the sequence is
/// valid for `insert` on an array that starts at `start_len` elements and
/// grows by one per step.
pub fn positions(n: usize, start_len: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % (start_len + i + 1) as u64) as usize
        })
        .collect()
}
