// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Targets: the pitch or thread count the operator wants to cut.
//!
//! A pitch and a TPI are reciprocal views of one physical quantity, so a
//! train is accepted if it matches on either channel. A target only ever
//! populates the channel of its own kind.

use crate::error::{Error, Result};
use crate::train::constants::RESULT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which channel a target is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Pitch,
    Tpi,
}

/// A thread to cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Target {
    /// Pitch in mm per spindle revolution.
    Pitch(f64),
    /// Threads per inch.
    Tpi(f64),
}

impl Target {
    pub fn kind(self) -> TargetKind {
        match self {
            Target::Pitch(_) => TargetKind::Pitch,
            Target::Tpi(_) => TargetKind::Tpi,
        }
    }

    /// The raw value as given, whether or not it requests anything.
    pub fn value(self) -> f64 {
        match self {
            Target::Pitch(v) | Target::Tpi(v) => v,
        }
    }

    /// True if the value is a positive, finite number.
    ///
    /// Anything else asks for no thread at all and searches find nothing.
    pub fn is_requested(self) -> bool {
        let v = self.value();
        v.is_finite() && v > 0.0
    }

    /// Requested pitch, if this is a usable pitch target.
    pub fn pitch(self) -> Option<f64> {
        match self {
            Target::Pitch(v) if self.is_requested() => Some(v),
            _ => None,
        }
    }

    /// Requested TPI, if this is a usable TPI target.
    pub fn tpi(self) -> Option<f64> {
        match self {
            Target::Tpi(v) if self.is_requested() => Some(v),
            _ => None,
        }
    }

    /// Does a train cutting `pitch` (and the matching `tpi`) satisfy this target?
    pub fn accepts(self, pitch: f64, tpi: f64) -> bool {
        within_tolerance(pitch, self.pitch()) || within_tolerance(tpi, self.tpi())
    }
}

/// Relative tolerance test against an optional target value.
///
/// A missing or zero target never matches.
pub fn within_tolerance(actual: f64, target: Option<f64>) -> bool {
    match target {
        Some(t) if t != 0.0 => (actual / t - 1.0).abs() < RESULT_TOLERANCE,
        _ => false,
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Pitch(v) => write!(f, "{}mm", v),
            Target::Tpi(v) => write!(f, "{}tpi", v),
        }
    }
}

impl FromStr for Target {
    type Err = Error;

    /// Parse `"1.25mm"` as a pitch or `"20tpi"` as a thread count.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_lowercase();
        let (number, make): (&str, fn(f64) -> Target) =
            if let Some(number) = text.strip_suffix("tpi") {
                (number, Target::Tpi)
            } else if let Some(number) = text.strip_suffix("mm") {
                (number, Target::Pitch)
            } else {
                return Err(Error::InvalidTarget(format!(
                    "{:?} needs a unit suffix, e.g. 1.25mm or 20tpi",
                    s
                )));
            };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::InvalidTarget(format!("{:?} is not a number", number.trim())))?;
        Ok(make(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance() {
        assert!(within_tolerance(20.0, Some(20.0)));
        assert!(within_tolerance(20.039, Some(20.0)));
        assert!(!within_tolerance(20.05, Some(20.0)));
        assert!(within_tolerance(19.961, Some(20.0)));
        assert!(!within_tolerance(20.0, None));
        assert!(!within_tolerance(20.0, Some(0.0)));
    }

    #[test]
    fn test_channels() {
        assert_eq!(Target::Pitch(1.0).pitch(), Some(1.0));
        assert_eq!(Target::Pitch(1.0).tpi(), None);
        assert_eq!(Target::Tpi(20.0).tpi(), Some(20.0));
        assert_eq!(Target::Tpi(20.0).pitch(), None);
    }

    #[test]
    fn test_non_positive_targets_request_nothing() {
        assert!(!Target::Pitch(0.0).is_requested());
        assert!(!Target::Tpi(-4.0).is_requested());
        assert!(!Target::Tpi(f64::NAN).is_requested());
        assert_eq!(Target::Pitch(0.0).pitch(), None);
    }

    #[test]
    fn test_accepts_on_own_channel() {
        let target = Target::Tpi(20.0);
        assert!(target.accepts(1.27, 20.0));
        assert!(!target.accepts(1.0, 25.4));
    }

    #[test]
    fn test_parse() {
        assert_eq!("1.25mm".parse::<Target>().unwrap(), Target::Pitch(1.25));
        assert_eq!(" 20 TPI ".parse::<Target>().unwrap(), Target::Tpi(20.0));
        assert_eq!("0.5 mm".parse::<Target>().unwrap(), Target::Pitch(0.5));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("20".parse::<Target>(), Err(Error::InvalidTarget(_))));
        assert!(matches!("xtpi".parse::<Target>(), Err(Error::InvalidTarget(_))));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let target = Target::Pitch(1.75);
        assert_eq!(target.to_string(), "1.75mm");
        assert_eq!(target.to_string().parse::<Target>().unwrap(), target);
    }
}
