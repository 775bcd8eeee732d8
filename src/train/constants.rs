// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric constants for change-gear trains.
//!
//! All tolerances and geometric limits used by the search live here, so
//! tests and the optimizer refer to the same values.

/// Millimetres per inch. Converts between pitch (mm/rev) and TPI.
pub const MM_PER_INCH: f64 = 25.4;

/// Lead of a metric leadscrew, in mm per revolution.
pub const METRIC_LEAD_MM: f64 = 1.5;

/// Threads per inch of the usual imperial leadscrew.
pub const DEFAULT_LEADSCREW_TPI: f64 = 16.0;

/// Relative tolerance for accepting a train: |actual/target - 1| must be below this.
pub const RESULT_TOLERANCE: f64 = 0.002;

/// Gear B plus this many teeth must not exceed gear C plus gear D.
pub const GEAR_CLEARANCE: u32 = 10;

/// Minimum total teeth of a four-gear train, so it spans the two shafts.
pub const MIN_GEAR_SUM: u32 = 160;

/// Number of slots in a gear train (A, B, C, D).
pub const SLOT_COUNT: usize = 4;
