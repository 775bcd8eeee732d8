// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gear usage tables for the chart optimizer.

use crate::train::{Gear, Slot, Solution};
use std::collections::{HashMap, HashSet};

/// How often each (slot, gear) pair occurs across all candidate solutions.
///
/// Empty slots are not counted.
#[derive(Debug, Default, Clone)]
pub struct GearFrequency {
    counts: HashMap<(Slot, Gear), u32>,
}

impl GearFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every occupied slot of every solution.
    pub fn from_solutions<'a, I>(solutions: I) -> Self
    where
        I: IntoIterator<Item = &'a Solution>,
    {
        let mut frequency = Self::new();
        for solution in solutions {
            frequency.add(solution);
        }
        frequency
    }

    pub fn add(&mut self, solution: &Solution) {
        for pair in solution.populated() {
            *self.counts.entry(pair).or_insert(0) += 1;
        }
    }

    pub fn get(&self, slot: Slot, gear: Gear) -> u32 {
        self.counts.get(&(slot, gear)).copied().unwrap_or(0)
    }
}

/// The (slot, gear) pairs committed to by targets already processed.
#[derive(Debug, Default, Clone)]
pub struct SelectedGears {
    pairs: HashSet<(Slot, Gear)>,
}

impl SelectedGears {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock in the occupied slots of a chosen solution.
    pub fn commit(&mut self, solution: &Solution) {
        self.pairs.extend(solution.populated());
    }

    pub fn contains(&self, slot: Slot, gear: Gear) -> bool {
        self.pairs.contains(&(slot, gear))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::Leadscrew;

    fn g(teeth: u32) -> Gear {
        Gear::new(teeth)
    }

    #[test]
    fn test_frequency_is_per_slot() {
        let lead = Leadscrew::imperial();
        let solutions = [
            Solution::two_gear(g(40), g(20), lead),
            Solution::two_gear(g(20), g(40), lead),
            Solution::four_gear(g(40), g(20), g(80), g(45), lead),
        ];
        let frequency = GearFrequency::from_solutions(&solutions);
        assert_eq!(frequency.get(Slot::A, g(40)), 2);
        assert_eq!(frequency.get(Slot::A, g(20)), 1);
        assert_eq!(frequency.get(Slot::D, g(20)), 1);
        assert_eq!(frequency.get(Slot::B, g(20)), 1);
        assert_eq!(frequency.get(Slot::C, g(40)), 0);
    }

    #[test]
    fn test_selected_ignores_empty_slots() {
        let mut selected = SelectedGears::new();
        assert!(selected.is_empty());
        selected.commit(&Solution::two_gear(g(40), g(50), Leadscrew::imperial()));
        assert_eq!(selected.len(), 2);
        assert!(selected.contains(Slot::A, g(40)));
        assert!(selected.contains(Slot::D, g(50)));
        assert!(!selected.contains(Slot::D, g(40)));
    }
}
