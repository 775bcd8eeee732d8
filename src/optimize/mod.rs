// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multi-target optimization for thread charts.
//!
//! Changing gears between rows of a chart is slow, so when several targets
//! are requested together the optimizer picks one solution per target that
//! favours gears shared with other rows.
//!
//! 1. Search each target independently and keep its first
//!    `MAX_CANDIDATES_PER_TARGET` solutions.
//! 2. Count how often every (slot, gear) pair occurs across all kept candidates.
//! 3. Walk the targets in the given order. For each, pick the highest scoring
//!    candidate (first one wins a tie) and commit its gears, so later rows
//!    are rewarded for reusing them.
//!
//! The walk is greedy and order dependent: the same targets in another order
//! can produce a different chart.
//!
//! # Example
//!
//! ```
//! use change_gears::optimize::optimize;
//! use change_gears::train::{GearPool, Leadscrew, Target};
//!
//! let chart = optimize(
//!     &[Target::Tpi(20.0), Target::Pitch(0.0)],
//!     &GearPool::standard(),
//!     Leadscrew::imperial(),
//! );
//! assert_eq!(chart.len(), 2);
//! assert!(chart[0].is_some());
//! assert!(chart[1].is_none());
//! ```

pub mod frequency;
pub mod score;

pub use frequency::{GearFrequency, SelectedGears};
pub use score::score;

use crate::search::search;
use crate::train::{GearPool, Leadscrew, Solution, Target};
use tracing::{info, trace};

/// Candidates kept per target; later solutions are discarded.
pub const MAX_CANDIDATES_PER_TARGET: usize = 10;

/// The candidate solutions of one chart row.
#[derive(Debug, Clone)]
pub struct Candidates {
    pub target: Target,
    pub solutions: Vec<Solution>,
}

/// Search every target, keeping at most `MAX_CANDIDATES_PER_TARGET` each.
///
/// Four-gear trains are always included so rows have alternatives to trade.
pub fn candidates(targets: &[Target], pool: &GearPool, leadscrew: Leadscrew) -> Vec<Candidates> {
    targets
        .iter()
        .map(|&target| {
            let mut solutions = search(pool, leadscrew, target, true);
            solutions.truncate(MAX_CANDIDATES_PER_TARGET);
            Candidates { target, solutions }
        })
        .collect()
}

/// Greedily pick one solution per row, in row order.
///
/// Rows without candidates yield `None` and commit nothing.
pub fn select(rows: &[Candidates]) -> Vec<Option<Solution>> {
    let frequency = GearFrequency::from_solutions(rows.iter().flat_map(|row| &row.solutions));
    let mut selected = SelectedGears::new();

    rows.iter()
        .map(|row| {
            let mut best: Option<(&Solution, f64)> = None;
            for solution in &row.solutions {
                let value = score(solution, row.target, &frequency, &selected);
                // Strictly greater keeps the earliest of equal scores
                if best.map_or(true, |(_, best_value)| value > best_value) {
                    best = Some((solution, value));
                }
            }

            best.map(|(solution, value)| {
                selected.commit(solution);
                trace!(
                    thread = %row.target,
                    %solution,
                    score = value,
                    committed = selected.len(),
                    "row selected"
                );
                solution.clone()
            })
        })
        .collect()
}

/// Pick one solution per target, favouring gears shared across the chart.
///
/// The result has one entry per target, in the same order.
pub fn optimize(targets: &[Target], pool: &GearPool, leadscrew: Leadscrew) -> Vec<Option<Solution>> {
    let rows = candidates(targets, pool, leadscrew);
    let chart = select(&rows);

    let two_gear = chart.iter().flatten().filter(|s| s.is_two_gear()).count();
    let found = chart.iter().flatten().count();
    info!(
        targets = targets.len(),
        two_gear,
        four_gear = found - two_gear,
        missing = targets.len() - found,
        "chart optimized"
    );

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::{Gear, Slot};

    fn g(teeth: u32) -> Gear {
        Gear::new(teeth)
    }

    #[test]
    fn test_candidates_are_capped() {
        let rows = candidates(&[Target::Tpi(20.0)], &GearPool::standard(), Leadscrew::imperial());
        assert_eq!(rows[0].solutions.len(), MAX_CANDIDATES_PER_TARGET);
        // The cap keeps discovery order, two-gear trains first
        assert!(rows[0].solutions[..3].iter().all(Solution::is_two_gear));
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        let lead = Leadscrew::imperial();
        let rows = vec![Candidates {
            target: Target::Tpi(20.0),
            solutions: vec![
                Solution::two_gear(g(20), g(25), lead),
                Solution::two_gear(g(40), g(50), lead),
            ],
        }];
        let chart = select(&rows);
        assert_eq!(chart[0].as_ref().and_then(|s| s.gear(Slot::A)), Some(g(20)));
    }

    #[test]
    fn test_shared_gears_win_for_later_rows() {
        let lead = Leadscrew::imperial();
        let rows = vec![
            Candidates {
                target: Target::Tpi(8.0),
                solutions: vec![Solution::two_gear(g(40), g(20), lead)],
            },
            Candidates {
                target: Target::Tpi(20.0),
                solutions: vec![
                    Solution::two_gear(g(20), g(25), lead),
                    Solution::two_gear(g(40), g(50), lead),
                ],
            },
        ];
        let chart = select(&rows);
        // 40 in slot A is shared with row one, and row one is committed first
        assert_eq!(chart[1].as_ref().and_then(|s| s.gear(Slot::A)), Some(g(40)));
    }

    #[test]
    fn test_empty_rows_yield_none() {
        let rows = vec![
            Candidates {
                target: Target::Tpi(20.0),
                solutions: vec![],
            },
            Candidates {
                target: Target::Pitch(1.0),
                solutions: vec![Solution::two_gear(g(20), g(30), Leadscrew::Metric)],
            },
        ];
        let chart = select(&rows);
        assert!(chart[0].is_none());
        assert!(chart[1].is_some());
    }

    #[test]
    fn test_unrequested_target_still_ranks_candidates() {
        let lead = Leadscrew::Metric;
        let rows = vec![Candidates {
            target: Target::Pitch(0.0),
            solutions: vec![
                Solution::four_gear(g(20), g(25), g(60), g(60), lead),
                Solution::two_gear(g(20), g(30), lead),
            ],
        }];
        let chart = select(&rows);
        let chosen = chart[0].as_ref().expect("row has candidates");
        assert!(chosen.is_two_gear());
    }

    #[test]
    fn test_no_targets() {
        assert!(optimize(&[], &GearPool::standard(), Leadscrew::Metric).is_empty());
    }
}
