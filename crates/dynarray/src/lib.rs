//! A growable contiguous array with explicit capacity management.
//!
//! Two layers:
//!
//! ```text
//! DynamicArray<T> (len + growth policy + element shifting)
//! └── RawBuffer<T> (one fixed-size, single-owner block; never resized)
//! ```
//!
//! Growth never resizes a buffer in place. A reallocating operation builds a
//! complete replacement array on a fresh [`RawBuffer`], moving elements
//! across, and only then swaps it in. A failed allocation therefore leaves
//! the original array untouched.
//!
//! # Growth rule
//!
//! - `push_back` / `insert` on a full array: `max(len * 2, 1)`
//! - `resize(n)` past capacity: `max(capacity * 2, n)`
//! - `reserve(n)`: exactly `n`
//!
//! Capacity never shrinks. `clear`, `pop_back`, `erase` and shrinking
//! `resize` only move the length.
//!
//! # Errors
//!
//! Checked access ([`DynamicArray::at`]) and storage acquisition are the
//! only fallible paths; see [`ArrayError`]. Indexing with `[]`, popping an
//! empty array and inserting or erasing at an invalid index are caller bugs
//! and panic.
//!
//! # Logging
//!
//! Reallocations emit `tracing` events at `TRACE`; refused allocations at
//! `DEBUG`. The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod growth;
pub mod raw;
pub mod reserve;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use error::ArrayError;
pub use raw::RawBuffer;
pub use reserve::{reserve, ReserveProxy};
