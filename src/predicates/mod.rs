// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! # Organization
//!
//! - `choose`: ChooseGearsPredicate, one round per slot, one choice per pool position
//! - `geometry`: GeometryPredicate, the clearance and reach limits of a four-gear train
//! - `record`: RecordSolutionPredicate, tolerance check and value deduplication
//! - Built-in predicate: `FailPredicate`

pub mod choose;
pub mod geometry;
pub mod record;

pub use choose::ChooseGearsPredicate;
pub use geometry::GeometryPredicate;
pub use record::RecordSolutionPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a program with
/// it makes the engine visit every train, so all solutions get recorded.
///
/// # Example
///
/// ```
/// use change_gears::context::SearchContext;
/// use change_gears::engine::EngineBuilder;
/// use change_gears::predicates::{ChooseGearsPredicate, FailPredicate};
/// use change_gears::train::{GearPool, Leadscrew, Slot, Target};
///
/// let mut ctx = SearchContext::new(GearPool::from_teeth(&[20, 30, 40]), Leadscrew::Metric, Target::Pitch(1.0));
/// let mut engine = EngineBuilder::new()
///     .add(Box::new(ChooseGearsPredicate::new(&Slot::TWO_GEAR)))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// engine.search(&mut ctx);
/// assert!(ctx.solutions().is_empty()); // Nothing records, everything fails
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}
