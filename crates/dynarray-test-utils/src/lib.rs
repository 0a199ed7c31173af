//! Test utilities for dynarray development.
//!
//! Provides element types that make container lifecycles observable:
//! a shared [`Tally`] plus fixtures that bump it on drop or clone, and a
//! move-only element for checking that no operation needs `Clone`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CloneCounter, DropCounter, MoveOnly};

use std::cell::Cell;
use std::rc::Rc;

/// A shared event counter.
///
/// Cheap to clone; every clone observes the same count.
#[derive(Clone, Debug, Default)]
pub struct Tally(Rc<Cell<usize>>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count.
    pub fn get(&self) -> usize {
        self.0.get()
    }

    pub(crate) fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}
