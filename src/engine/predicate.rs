// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for the backtracking search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! is either a choice point (which gear goes in the next slot), a filter
//! (does the train fit on the banjo), or an action (record the train).
//!
//! # Example
//!
//! ```
//! use change_gears::engine::{Predicate, PredicateResult};
//! use change_gears::context::SearchContext;
//!
//! #[derive(Debug)]
//! struct EveryPosition;
//!
//! impl Predicate for EveryPosition {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(ctx.pool.len())
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//!
//!     fn name(&self) -> &str {
//!         "EveryPosition"
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

/// Result of attempting a predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute multiple times (e.g., once per slot).
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),
}

/// A terminal predicate that ends a program.
///
/// Terminal predicates never return Success, so the engine never runs off
/// the end of the predicate sequence. `EngineBuilder::terminal` only accepts
/// predicates with this marker.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the backtracking engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Failure: engine backtracks to previous predicate
/// 4. If Choices(n): engine calls `retry_pred` for choice 0, 1, ... n-1
///
/// # Trail Integration
///
/// Predicates change the train only through `SearchContext::assign`, which
/// records the change. Before every `try_pred` and `retry_pred` the engine
/// rewinds the trail to the predicate's checkpoint, so each attempt starts
/// from the same train.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    /// Cannot return Choices (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // By default, we do not allow retry. Predicates that return Choices
        // must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Name for debugging. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
