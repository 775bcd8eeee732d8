// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RecordSolutionPredicate - keeps trains that cut the target thread.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::train::Solution;

/// Computes the current train's pitch and TPI and records it as a solution
/// when either is within tolerance of the target.
///
/// Trains whose gear values repeat an earlier solution are dropped, so the
/// first position tuple to realise a value tuple wins.
#[derive(Debug)]
pub struct RecordSolutionPredicate;

impl Predicate for RecordSolutionPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let lead = ctx.leadscrew;
        let solution = match ctx.train() {
            [Some(a), None, None, Some(d)] => Solution::two_gear(a, d, lead),
            [Some(a), Some(b), Some(c), Some(d)] => Solution::four_gear(a, b, c, d, lead),
            _ => return PredicateResult::Failure,
        };

        if !ctx.target.accepts(solution.pitch(), solution.tpi()) {
            ctx.count(Counters::OutOfTolerance);
            return PredicateResult::Failure;
        }

        if ctx.record(solution) {
            ctx.count(Counters::Accepted);
            PredicateResult::Success
        } else {
            ctx.count(Counters::Duplicate);
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "RecordSolution"
    }
}
