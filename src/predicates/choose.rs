// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ChooseGearsPredicate - places one pool position in each slot of a train.
//!
//! The predicate runs one round per slot. Each round offers every pool
//! position as a choice, in ascending order, and rejects positions already
//! used by an earlier slot. Equal tooth counts at different positions are
//! different gears here; collapsing equal trains is left to the recorder.
//!
//! Because choices are tried in order and the program ends in a failing
//! predicate, trains are visited in nested-loop order over the slots.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::train::Slot;

#[derive(Debug)]
pub struct ChooseGearsPredicate {
    slots: Vec<Slot>,
}

impl ChooseGearsPredicate {
    /// Fill `slots` in the given order, outermost first.
    pub fn new(slots: &[Slot]) -> Self {
        Self {
            slots: slots.to_vec(),
        }
    }
}

impl Predicate for ChooseGearsPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        if round == self.slots.len() {
            ctx.count(Counters::Enumerated);
            return PredicateResult::Success;
        }
        if ctx.pool.is_empty() {
            return PredicateResult::Failure;
        }
        PredicateResult::Choices(ctx.pool.len())
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Positions, not values, must be distinct within a train
        if ctx.uses_position(choice) {
            return PredicateResult::Failure;
        }
        ctx.assign(self.slots[round], choice);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "ChooseGears"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineBuilder;
    use crate::predicates::FailPredicate;
    use crate::train::{GearPool, Leadscrew, Target};

    fn context(teeth: &[u32]) -> SearchContext {
        SearchContext::new(GearPool::from_teeth(teeth), Leadscrew::Metric, Target::Pitch(1.0))
    }

    fn enumerate(teeth: &[u32], slots: &[Slot]) -> u64 {
        let mut ctx = context(teeth);
        let mut engine = EngineBuilder::new()
            .add(Box::new(ChooseGearsPredicate::new(slots)))
            .terminal(Box::new(FailPredicate))
            .build();
        engine.search(&mut ctx);
        ctx.statistics.get(Counters::Enumerated)
    }

    #[test]
    fn test_try_pred_offers_every_position() {
        let mut ctx = context(&[20, 30, 40]);
        let mut pred = ChooseGearsPredicate::new(&Slot::TWO_GEAR);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::Choices(3));
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Success);
    }

    #[test]
    fn test_retry_pred_rejects_used_position() {
        let mut ctx = context(&[20, 30, 40]);
        let mut pred = ChooseGearsPredicate::new(&Slot::TWO_GEAR);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.position(Slot::A), Some(1));
        assert_eq!(pred.retry_pred(&mut ctx, 1, 1), PredicateResult::Failure);
        assert_eq!(pred.retry_pred(&mut ctx, 1, 2), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.position(Slot::D), Some(2));
    }

    #[test]
    fn test_empty_pool_fails() {
        let mut ctx = context(&[]);
        let mut pred = ChooseGearsPredicate::new(&Slot::TWO_GEAR);
        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_enumerates_ordered_distinct_positions() {
        // n * (n-1) pairs, n * (n-1) * (n-2) * (n-3) quadruples
        assert_eq!(enumerate(&[20, 20, 30, 40, 50], &Slot::TWO_GEAR), 20);
        assert_eq!(enumerate(&[20, 20, 30, 40, 50], &Slot::FOUR_GEAR), 120);
        assert_eq!(enumerate(&[20, 30, 40], &Slot::FOUR_GEAR), 0);
        assert_eq!(enumerate(&[20], &Slot::TWO_GEAR), 0);
    }
}
