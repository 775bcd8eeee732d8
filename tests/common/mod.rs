// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use change_gears::context::SearchContext;
use change_gears::train::{Gear, GearPool, Leadscrew, Slot, Solution};
use change_gears::{Predicate, PredicateResult};

/// The default pool: both stock gear lists, 23 gears.
pub fn standard_pool() -> GearPool {
    GearPool::standard()
}

/// Imperial 16 TPI leadscrew.
pub fn imperial() -> Leadscrew {
    Leadscrew::imperial()
}

/// Gear values of a solution, `None` for empty slots.
pub fn values(solution: &Solution) -> [Option<u32>; 4] {
    solution.gears().map(|g| g.map(Gear::teeth))
}

/// Shorthand for the values of a two-gear train.
pub fn two(a: u32, d: u32) -> [Option<u32>; 4] {
    [Some(a), None, None, Some(d)]
}

/// A predicate that places fixed pool positions in fixed slots.
///
/// This is used in tests to pin part of a train, bypassing the
/// ChooseGearsPredicate enumeration for those slots.
#[derive(Debug)]
pub struct FixedGearsPredicate(pub Vec<(Slot, usize)>);

impl Predicate for FixedGearsPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        for &(slot, position) in &self.0 {
            if position >= ctx.pool.len() || ctx.uses_position(position) {
                eprintln!("Could not place position {} in slot {}", position, slot);
                return PredicateResult::Failure;
            }
            ctx.assign(slot, position);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "FixedGears"
    }
}
