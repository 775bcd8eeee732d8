// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Leadscrew of the lathe, which scales every gear ratio into a pitch.

use crate::train::constants::{DEFAULT_LEADSCREW_TPI, METRIC_LEAD_MM, MM_PER_INCH};
use serde::{Deserialize, Serialize};

/// The lathe's leadscrew.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Leadscrew {
    /// Metric leadscrew with a 1.5 mm lead.
    Metric,
    /// Imperial leadscrew cut at `tpi` threads per inch.
    Imperial { tpi: f64 },
}

impl Leadscrew {
    /// The usual 16 TPI imperial leadscrew.
    pub const fn imperial() -> Self {
        Leadscrew::Imperial {
            tpi: DEFAULT_LEADSCREW_TPI,
        }
    }

    /// Carriage advance per leadscrew revolution, in mm.
    pub fn lead_mm(self) -> f64 {
        match self {
            Leadscrew::Metric => METRIC_LEAD_MM,
            Leadscrew::Imperial { tpi } => MM_PER_INCH / tpi,
        }
    }
}

impl Default for Leadscrew {
    fn default() -> Self {
        Self::imperial()
    }
}
