// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept in the context and incremented by the predicates, so a
//! search can report how much it pruned.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
#[strum(serialize_all = "snake_case")]
pub enum Counters {
    /// Complete trains with distinct pool positions.
    Enumerated,
    /// Four-gear trains where gear B fouls the C/D stack.
    ClearanceRejected,
    /// Four-gear trains too small to span the shafts.
    ReachRejected,
    /// Trains whose ratio misses the target.
    OutOfTolerance,
    /// Trains repeating the gear values of an earlier solution.
    Duplicate,
    /// Solutions kept.
    Accepted,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their names, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        Counters::iter().map(move |counter| (counter.into(), self.get(counter)))
    }
}
