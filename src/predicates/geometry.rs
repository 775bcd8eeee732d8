// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! GeometryPredicate - physical limits of a compound train on the banjo.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::statistics::Counters;
use crate::train::constants::{GEAR_CLEARANCE, MIN_GEAR_SUM};
use crate::train::{Gear, Slot};

/// Rejects four-gear trains that cannot be mounted.
///
/// - Clearance: B + GEAR_CLEARANCE must not exceed C + D, or B fouls the
///   leadscrew gear.
/// - Reach: A + B + C + D must be at least MIN_GEAR_SUM, or the train
///   cannot span the spindle and leadscrew shafts.
///
/// Trains with an empty B or C slot pass unchanged.
#[derive(Debug)]
pub struct GeometryPredicate;

/// Why a train does not fit, if it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misfit {
    Clearance,
    Reach,
}

/// Check the clearance and reach limits of a four-gear train.
pub fn check_fit(a: Gear, b: Gear, c: Gear, d: Gear) -> Result<(), Misfit> {
    let [a, b, c, d] = [a, b, c, d].map(|gear| u64::from(gear.teeth()));
    if b + u64::from(GEAR_CLEARANCE) > c + d {
        return Err(Misfit::Clearance);
    }
    if a + b + c + d < u64::from(MIN_GEAR_SUM) {
        return Err(Misfit::Reach);
    }
    Ok(())
}

impl Predicate for GeometryPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let [a, b, c, d] = ctx.train();
        let (Some(a), Some(b), Some(c), Some(d)) = (a, b, c, d) else {
            return PredicateResult::Success;
        };
        match check_fit(a, b, c, d) {
            Ok(()) => PredicateResult::Success,
            Err(Misfit::Clearance) => {
                ctx.count(Counters::ClearanceRejected);
                PredicateResult::Failure
            }
            Err(Misfit::Reach) => {
                ctx.count(Counters::ReachRejected);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Geometry"
    }
}
