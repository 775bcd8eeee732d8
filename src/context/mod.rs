// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one gear-train search.
//!
//! The context holds everything a predicate program needs:
//! - the inputs: gear pool, leadscrew and target (never modified)
//! - the train under construction, changed only through trailed setters
//! - the solutions accepted so far, with the value tuples already seen
//! - statistics counters
//!
//! A context is built per request and dropped afterwards. Nothing is shared
//! between searches.

use crate::state::statistics::{Counters, Statistics};
use crate::state::TrainState;
use crate::trail::Trail;
use crate::train::constants::SLOT_COUNT;
use crate::train::{Gear, GearPool, Leadscrew, Slot, Solution, Target};
use std::collections::HashSet;

/// Search context combining the inputs with the mutable search state.
///
/// # Example
///
/// ```
/// use change_gears::context::SearchContext;
/// use change_gears::train::{GearPool, Leadscrew, Slot, Target};
///
/// let mut ctx = SearchContext::new(GearPool::from_teeth(&[20, 30]), Leadscrew::Metric, Target::Pitch(1.0));
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.assign(Slot::A, 0);
/// assert_eq!(ctx.position(Slot::A), Some(0));
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.position(Slot::A), None);
/// ```
#[derive(Debug)]
pub struct SearchContext {
    pub pool: GearPool,
    pub leadscrew: Leadscrew,
    pub target: Target,
    /// Undo log for the train state
    pub trail: Trail,
    pub statistics: Statistics,
    state: TrainState,
    solutions: Vec<Solution>,
    seen: HashSet<[Option<Gear>; SLOT_COUNT]>,
}

impl SearchContext {
    pub fn new(pool: GearPool, leadscrew: Leadscrew, target: Target) -> Self {
        Self {
            pool,
            leadscrew,
            target,
            trail: Trail::new(),
            statistics: Statistics::new(),
            state: TrainState::new(),
            solutions: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Place the gear at `position` in `slot`, recording the change on the trail.
    ///
    /// # Panics
    ///
    /// Panics if `position` is outside the pool.
    pub fn assign(&mut self, slot: Slot, position: usize) {
        assert!(
            position < self.pool.len(),
            "Pool position out of bounds: {}",
            position
        );
        let index = slot.index();
        self.trail.record_change(index, self.state.encoded(index));
        self.state.set(slot, position);
    }

    /// Undo all assignments made after `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let state = &mut self.state;
        self.trail
            .rewind_to(checkpoint, |index, old| state.restore(index, old));
    }

    /// Pool position placed in a slot.
    pub fn position(&self, slot: Slot) -> Option<usize> {
        self.state.position(slot)
    }

    /// Is this pool position already part of the current train?
    pub fn uses_position(&self, position: usize) -> bool {
        self.state.uses_position(position)
    }

    /// Gear placed in a slot.
    pub fn gear(&self, slot: Slot) -> Option<Gear> {
        self.position(slot).and_then(|position| self.pool.get(position))
    }

    /// Gear values of the current train, slot by slot.
    pub fn train(&self) -> [Option<Gear>; SLOT_COUNT] {
        let positions = *self.state.positions();
        positions.map(|position| position.and_then(|p| self.pool.get(p)))
    }

    /// Keep a solution unless one with the same gear values was kept before.
    ///
    /// Returns true if the solution was new.
    pub fn record(&mut self, solution: Solution) -> bool {
        if !self.seen.insert(*solution.gears()) {
            return false;
        }
        self.solutions.push(solution);
        true
    }

    /// Solutions accepted so far, in discovery order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }

    pub(crate) fn count(&mut self, counter: Counters) {
        self.statistics.increment_counter(counter);
    }
}
