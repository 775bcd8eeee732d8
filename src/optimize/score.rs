// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scoring of candidate solutions for a chart row.
//!
//! The weights set a strict priority: accuracy first, then two-gear trains,
//! then gears that recur across the chart, then gears already in use.

use crate::optimize::frequency::{GearFrequency, SelectedGears};
use crate::train::{Solution, Target};

/// Weight of a perfectly accurate solution.
pub const ACCURACY_WEIGHT: f64 = 100_000.0;

/// Exponential decay of the accuracy term per percent of error.
pub const ACCURACY_DECAY: f64 = 10.0;

/// Bonus for a train with empty B and C slots.
pub const TWO_GEAR_BONUS: f64 = 10_000.0;

/// Per occurrence of a (slot, gear) pair among all candidates.
pub const FREQUENCY_WEIGHT: f64 = 10.0;

/// Per (slot, gear) pair already committed by an earlier row.
pub const REUSE_BONUS: f64 = 100.0;

/// Unsigned error of a solution against its target, in percent.
///
/// `None` when the target asks for no thread.
pub fn error_percent(solution: &Solution, target: Target) -> Option<f64> {
    solution.error_percent(target).map(f64::abs)
}

/// Score a candidate for `target`; higher is better.
///
/// A target that asks for no thread contributes no accuracy term.
pub fn score(
    solution: &Solution,
    target: Target,
    frequency: &GearFrequency,
    selected: &SelectedGears,
) -> f64 {
    let mut score = error_percent(solution, target)
        .map_or(0.0, |e| ACCURACY_WEIGHT * (-ACCURACY_DECAY * e).exp());

    if solution.is_two_gear() {
        score += TWO_GEAR_BONUS;
    }

    for (slot, gear) in solution.populated() {
        score += frequency.get(slot, gear) as f64 * FREQUENCY_WEIGHT;
        if selected.contains(slot, gear) {
            score += REUSE_BONUS;
        }
    }

    score
}
