//! Reusable element fixtures.
//!
//! - [`DropCounter`] — bumps a [`Tally`] when dropped.
//! - [`CloneCounter`] — bumps a [`Tally`] when cloned.
//! - [`MoveOnly`] — no `Clone`; compiles only against move-based paths.
//!
//! The `Default` values carry no tally, so the filler a container writes
//! into unused slots never shows up in a count.

use crate::Tally;

/// Counts drops of tracked values.
#[derive(Debug, Default)]
pub struct DropCounter {
    pub id: u32,
    tally: Option<Tally>,
}

impl DropCounter {
    pub fn new(id: u32, tally: &Tally) -> Self {
        Self {
            id,
            tally: Some(tally.clone()),
        }
    }

    /// Whether this value reports to a tally (false for defaults).
    pub fn is_tracked(&self) -> bool {
        self.tally.is_some()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        if let Some(tally) = &self.tally {
            tally.bump();
        }
    }
}

/// Counts clones of tracked values. Compares by `value` only.
#[derive(Debug, Default)]
pub struct CloneCounter {
    pub value: i32,
    tally: Option<Tally>,
}

impl CloneCounter {
    pub fn new(value: i32, tally: &Tally) -> Self {
        Self {
            value,
            tally: Some(tally.clone()),
        }
    }
}

impl Clone for CloneCounter {
    fn clone(&self) -> Self {
        if let Some(tally) = &self.tally {
            tally.bump();
        }
        Self {
            value: self.value,
            tally: self.tally.clone(),
        }
    }
}

impl PartialEq for CloneCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// An element that can only be moved.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveOnly(pub i32);
