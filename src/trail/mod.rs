// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the gear-train search.
//!
//! Every assignment of a pool position to a slot is recorded here with the
//! slot's previous value. Rewinding to a checkpoint replays those records in
//! reverse, restoring the train to the state it had at the checkpoint.

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TrailEntry {
    /// Identifier of the value that changed (a slot index)
    pub(crate) id: usize,
    /// The value before the change
    pub(crate) old_value: u64,
}

/// The trail: an undo log of state changes.
///
/// Checkpoints are plain trail lengths. The engine remembers the length when
/// it enters a predicate and rewinds to it before each new attempt.
#[derive(Debug)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Maximum trail size. A train never records more than one change per slot
    /// on a single path, so anything near this is a bug.
    const MAX_SIZE: usize = 1024;

    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(16),
        }
    }

    /// Current position, usable as a checkpoint for `rewind_to`.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds MAX_SIZE.
    pub(crate) fn record_change(&mut self, id: usize, old_value: u64) {
        if self.entries.len() >= Self::MAX_SIZE {
            panic!("Trail overflow: exceeded {} entries", Self::MAX_SIZE);
        }
        self.entries.push(TrailEntry { id, old_value });
    }

    /// Undo every change made after `checkpoint`, newest first.
    ///
    /// `restore` is called with each entry's id and old value.
    pub(crate) fn rewind_to<F: FnMut(usize, u64)>(&mut self, checkpoint: usize, mut restore: F) {
        if checkpoint >= self.entries.len() {
            return;
        }
        for entry in self.entries.drain(checkpoint..).rev() {
            restore(entry.id, entry.old_value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}
