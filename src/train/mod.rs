// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Domain values for change-gear trains.

pub mod constants;
pub mod gear;
pub mod leadscrew;
pub mod slot;
pub mod solution;
pub mod target;

pub use gear::{Gear, GearPool};
pub use leadscrew::Leadscrew;
pub use slot::Slot;
pub use solution::Solution;
pub use target::{within_tolerance, Target, TargetKind};
