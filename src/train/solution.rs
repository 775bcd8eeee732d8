// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Accepted gear trains.
//!
//! A `Solution` is immutable once built. Its pitch and TPI are both computed
//! at construction, whichever channel the caller asked for.

use crate::train::constants::{MM_PER_INCH, SLOT_COUNT};
use crate::train::{Gear, Leadscrew, Slot, Target, TargetKind};
use serde::Serialize;
use std::fmt;

/// A candidate train with its realised pitch and TPI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    gears: [Option<Gear>; SLOT_COUNT],
    pitch: f64,
    tpi: f64,
}

impl Solution {
    /// Two-gear train: A drives D directly, B and C are empty.
    pub fn two_gear(a: Gear, d: Gear, leadscrew: Leadscrew) -> Self {
        let pitch = leadscrew.lead_mm() * a.teeth() as f64 / d.teeth() as f64;
        Self::with_pitch([Some(a), None, None, Some(d)], pitch)
    }

    /// Compound train: A drives B, C turns with B and drives D.
    pub fn four_gear(a: Gear, b: Gear, c: Gear, d: Gear, leadscrew: Leadscrew) -> Self {
        let driving = a.teeth() as f64 * c.teeth() as f64;
        let driven = b.teeth() as f64 * d.teeth() as f64;
        let pitch = leadscrew.lead_mm() * driving / driven;
        Self::with_pitch([Some(a), Some(b), Some(c), Some(d)], pitch)
    }

    fn with_pitch(gears: [Option<Gear>; SLOT_COUNT], pitch: f64) -> Self {
        Self {
            gears,
            pitch,
            tpi: MM_PER_INCH / pitch,
        }
    }

    /// Gear in a slot, or `None` if the slot is empty.
    pub fn gear(&self, slot: Slot) -> Option<Gear> {
        self.gears[slot.index()]
    }

    pub fn gears(&self) -> &[Option<Gear>; SLOT_COUNT] {
        &self.gears
    }

    /// Actual pitch in mm per spindle revolution.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Actual threads per inch.
    pub fn tpi(&self) -> f64 {
        self.tpi
    }

    /// True when the idler slots B and C are both empty.
    pub fn is_two_gear(&self) -> bool {
        self.gear(Slot::B).is_none() && self.gear(Slot::C).is_none()
    }

    /// Occupied slots with their gears, in slot order.
    pub fn populated(&self) -> impl Iterator<Item = (Slot, Gear)> + '_ {
        Slot::FOUR_GEAR
            .iter()
            .filter_map(move |&slot| self.gear(slot).map(|gear| (slot, gear)))
    }

    /// Actual value on the given channel.
    pub fn actual(&self, kind: TargetKind) -> f64 {
        match kind {
            TargetKind::Pitch => self.pitch,
            TargetKind::Tpi => self.tpi,
        }
    }

    /// Signed error against a target, in percent of the target.
    ///
    /// `None` when the target does not request anything.
    pub fn error_percent(&self, target: Target) -> Option<f64> {
        if !target.is_requested() {
            return None;
        }
        let wanted = target.value();
        Some((self.actual(target.kind()) - wanted) / wanted * 100.0)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = |slot: Slot| match self.gear(slot) {
            Some(gear) => gear.to_string(),
            None if slot == Slot::B => String::from("ANY"),
            None => String::from("-"),
        };
        write!(
            f,
            "{} {} {} {} ({:.5} mm, {:.5} tpi)",
            cell(Slot::A),
            cell(Slot::B),
            cell(Slot::C),
            cell(Slot::D),
            self.pitch,
            self.tpi
        )
    }
}
