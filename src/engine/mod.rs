// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail so every predicate
//! attempt starts from the train state the predicate was entered with.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//!
//! Programs end in a terminal predicate that fails, so a run is an exhaustive
//! enumeration: results are collected as side effects in the context.
//!
//! # Example
//!
//! ```
//! use change_gears::context::SearchContext;
//! use change_gears::engine::EngineBuilder;
//! use change_gears::predicates::{ChooseGearsPredicate, FailPredicate, RecordSolutionPredicate};
//! use change_gears::train::{GearPool, Leadscrew, Slot, Target};
//!
//! let pool = GearPool::from_teeth(&[20, 30, 40, 60]);
//! let mut ctx = SearchContext::new(pool, Leadscrew::Metric, Target::Pitch(1.0));
//! let mut engine = EngineBuilder::new()
//!     .add(Box::new(ChooseGearsPredicate::new(&Slot::TWO_GEAR)))
//!     .add(Box::new(RecordSolutionPredicate))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//!
//! engine.search(&mut ctx);
//! // 20:30 and 40:60
//! assert_eq!(ctx.solutions().len(), 2);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 64;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

/// Search engine that coordinates predicate execution and backtracking.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer `EngineBuilder`, which ensures the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the program until every choice has been exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence reaches its end (no terminal
    /// predicate), if the stack grows past its limit, or if a predicate
    /// returns Choices from retry_pred.
    pub fn search(&mut self, ctx: &mut SearchContext) {
        self.stack.clear();
        self.try_count = 0;
        self.retry_count = 0;

        if self.predicates.is_empty() {
            return;
        }

        self.stack.push(StackEntry {
            predicate_index: 0,
            round: 0,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.checkpoint(),
        });

        // Backtracking past the first predicate empties the stack
        while let Some(entry) = self.stack.last_mut() {
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                if matches!(
                    result,
                    PredicateResult::Success | PredicateResult::SuccessSamePredicate
                ) {
                    // Deterministic success: popped, not re-tried, on backtracking
                    entry.in_choice_mode = true;
                    entry.current_choice = 0;
                    entry.num_choices = 0;
                }

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        self.stack.pop();
                    }
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.checkpoint();
                        }
                    }
                }
            } else {
                if entry.current_choice >= entry.num_choices {
                    self.stack.pop();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let next_index = match self.stack.last() {
            Some(current) => current.predicate_index + 1,
            None => return,
        };

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without a terminal predicate. \
                 All programs must end with a predicate that fails."
            );
        }

        self.push_entry(next_index, 0, ctx);
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        if let Some(current) = self.stack.last() {
            let (index, round) = (current.predicate_index, current.round + 1);
            self.push_entry(index, round, ctx);
        }
    }

    fn push_entry(&mut self, predicate_index: usize, round: usize, ctx: &SearchContext) {
        if self.stack.len() >= MAX_STACK_SIZE {
            panic!("Predicate stack overflow: exceeded {} entries", MAX_STACK_SIZE);
        }
        self.stack.push(StackEntry {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint: ctx.trail.checkpoint(),
        });
    }

    /// Get statistics about the last search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builds a predicate program that is guaranteed to end in a terminal predicate.
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to become an engine.
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}
