// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solution search: every gear train that cuts a target thread.
//!
//! The search runs two predicate programs on the engine:
//!
//! ```text
//! two-gear:  ChooseGears[A, D]       -> RecordSolution -> Fail
//! four-gear: ChooseGears[A, B, C, D] -> Geometry -> RecordSolution -> Fail
//! ```
//!
//! Two-gear trains are tried first. If any exist and four-gear trains were
//! not asked for, the O(n^4) four-gear pass is skipped.
//!
//! # Example
//!
//! ```
//! use change_gears::search::search;
//! use change_gears::train::{GearPool, Leadscrew, Target};
//!
//! let solutions = search(&GearPool::standard(), Leadscrew::imperial(), Target::Tpi(20.0), false);
//! assert!(solutions.iter().all(|s| s.is_two_gear()));
//! assert!(!solutions.is_empty());
//! ```

use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::predicates::{
    ChooseGearsPredicate, FailPredicate, GeometryPredicate, RecordSolutionPredicate,
};
use crate::state::statistics::Statistics;
use crate::train::{GearPool, Leadscrew, Slot, Solution, Target};
use tracing::debug;

fn two_gear_program() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(ChooseGearsPredicate::new(&Slot::TWO_GEAR)))
        .add(Box::new(RecordSolutionPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

fn four_gear_program() -> SearchEngine {
    EngineBuilder::new()
        .add(Box::new(ChooseGearsPredicate::new(&Slot::FOUR_GEAR)))
        .add(Box::new(GeometryPredicate))
        .add(Box::new(RecordSolutionPredicate))
        .terminal(Box::new(FailPredicate))
        .build()
}

/// Find all trains within tolerance of `target`, in discovery order.
///
/// Two-gear solutions come first. Four-gear trains are searched when no
/// two-gear train works, or always when `allow_four_gear` is set.
///
/// An empty pool or a target that is zero, negative or not a number gives
/// an empty result.
pub fn search(
    pool: &GearPool,
    leadscrew: Leadscrew,
    target: Target,
    allow_four_gear: bool,
) -> Vec<Solution> {
    search_with_statistics(pool, leadscrew, target, allow_four_gear).0
}

/// As `search`, also returning the pruning counters.
pub fn search_with_statistics(
    pool: &GearPool,
    leadscrew: Leadscrew,
    target: Target,
    allow_four_gear: bool,
) -> (Vec<Solution>, Statistics) {
    if !target.is_requested() || pool.is_empty() {
        debug!(thread = %target, pool = pool.len(), "nothing to search");
        return (Vec::new(), Statistics::new());
    }

    let mut ctx = SearchContext::new(pool.clone(), leadscrew, target);

    two_gear_program().search(&mut ctx);
    let two_gear = ctx.solutions().len();

    if two_gear == 0 || allow_four_gear {
        four_gear_program().search(&mut ctx);
    }

    debug!(
        thread = %target,
        pool = pool.len(),
        two_gear,
        four_gear = ctx.solutions().len() - two_gear,
        statistics = ?ctx.statistics.iter().collect::<Vec<_>>(),
        "search complete"
    );

    let statistics = ctx.statistics.clone();
    (ctx.into_solutions(), statistics)
}
