// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the tableau search.
//!
//! Every change to the working state of a search (a cell being filled, a
//! remaining count being decremented) records the overwritten value on the
//! trail. Backtracking rewinds the trail to a checkpoint, handing each old
//! value back to its owner in reverse order, so undoing a placement costs
//! one step per recorded change.
//!
//! The trail does not own the state it protects. The owner supplies a
//! restore function when rewinding; see `SearchContext::rewind_to`.

/// A location in the working state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A grid cell, by row-major position.
    Cell(usize),
    /// The remaining count of a value.
    Remaining(u32),
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    slot: Slot,
    old_value: u32,
}

/// Log of overwritten values, rewound on backtrack.
///
/// Checkpoints are plain trail lengths: `len()` before a change, then
/// `rewind_to(checkpoint, ..)` to undo everything recorded since.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail with room for `capacity` entries.
    ///
    /// A tableau search records two entries per filled cell, so the trail
    /// never needs more than twice the cell count.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record that `slot` held `old_value` before being overwritten.
    pub(crate) fn record_change(&mut self, slot: Slot, old_value: u32) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    ///
    /// `restore` is called once per entry with the slot and the value it
    /// held before the change.
    pub fn rewind_to<F>(&mut self, checkpoint: usize, mut restore: F)
    where
        F: FnMut(Slot, u32),
    {
        if checkpoint >= self.entries.len() {
            return;
        }
        for entry in self.entries.drain(checkpoint..).rev() {
            restore(entry.slot, entry.old_value);
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
