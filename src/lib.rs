// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Change-gear train search for screw-cutting lathes.
//!
//! Given the gears on hand and the lathe's leadscrew, find the trains that
//! cut a target pitch (mm) or thread count (TPI), and pick a low-changeover
//! set of trains for a whole thread chart.
//!
//! # Architecture
//!
//! The search is a predicate program run on a small backtracking engine:
//!
//! - `train`: gears, pools, leadscrews, targets and solutions
//! - `context`: the inputs of one search and the train being built
//! - `trail`: undo log that restores the train on backtracking
//! - `engine`: runs predicates in sequence, exploring every choice
//! - `predicates`: choose gears, check geometry, record solutions
//! - `search`: two-gear pass, then four-gear pass when needed
//! - `optimize`: greedy per-row choice for multi-target charts
//!
//! # Geometry
//!
//! Gears are treated as tooth counts only. Two limits stand in for the
//! banjo geometry of a compound train A-B / C-D:
//!
//! - B + 10 <= C + D, so gear B clears the leadscrew gear
//! - A + B + C + D >= 160, so the train spans both shafts
//!
//! # Example
//!
//! ```
//! use change_gears::{search, GearPool, Leadscrew, Target};
//!
//! let found = search(&GearPool::standard(), Leadscrew::Metric, Target::Pitch(1.0), false);
//! for solution in &found {
//!     assert!((solution.pitch() - 1.0).abs() < 0.002);
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod optimize;
pub mod predicates;
pub mod search;
pub mod settings;
pub mod state;
pub mod trail;
pub mod train;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{EngineBuilder, Predicate, PredicateResult, SearchEngine};
pub use error::{Error, Result};
pub use optimize::optimize;
pub use search::search;
pub use settings::{Settings, SettingsStore};
pub use train::{Gear, GearPool, Leadscrew, Slot, Solution, Target, TargetKind};
