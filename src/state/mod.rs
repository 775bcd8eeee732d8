// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.

pub mod statistics;

use crate::train::constants::SLOT_COUNT;
use crate::train::Slot;

/// The train under construction: which pool position sits in each slot.
///
/// Only changed through `SearchContext`, which records every change on the
/// trail so backtracking can restore it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainState {
    positions: [Option<usize>; SLOT_COUNT],
}

impl TrainState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self, slot: Slot) -> Option<usize> {
        self.positions[slot.index()]
    }

    /// Is this pool position already placed in some slot?
    pub fn uses_position(&self, position: usize) -> bool {
        self.positions.iter().any(|&p| p == Some(position))
    }

    pub(crate) fn positions(&self) -> &[Option<usize>; SLOT_COUNT] {
        &self.positions
    }

    /// Encoded value of a slot for the trail: 0 for empty, position + 1 otherwise.
    pub(crate) fn encoded(&self, index: usize) -> u64 {
        match self.positions[index] {
            None => 0,
            Some(position) => position as u64 + 1,
        }
    }

    /// Inverse of `encoded`.
    pub(crate) fn restore(&mut self, index: usize, encoded: u64) {
        self.positions[index] = match encoded {
            0 => None,
            n => Some((n - 1) as usize),
        };
    }

    pub(crate) fn set(&mut self, slot: Slot, position: usize) {
        self.positions[slot.index()] = Some(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_round_trip() {
        let mut state = TrainState::new();
        assert_eq!(state.encoded(Slot::C.index()), 0);

        state.set(Slot::C, 0);
        let encoded = state.encoded(Slot::C.index());
        assert_eq!(encoded, 1);

        state.restore(Slot::C.index(), 0);
        assert_eq!(state.position(Slot::C), None);
        state.restore(Slot::C.index(), encoded);
        assert_eq!(state.position(Slot::C), Some(0));
    }

    #[test]
    fn test_uses_position() {
        let mut state = TrainState::new();
        state.set(Slot::A, 3);
        state.set(Slot::D, 5);
        assert!(state.uses_position(3));
        assert!(state.uses_position(5));
        assert!(!state.uses_position(4));
    }
}
